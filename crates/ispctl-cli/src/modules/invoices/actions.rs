use super::http::{generate_receipt, list_invoices, mark_paid};
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_invoice(
    args: InvoiceArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        InvoiceCommand::List => {
            let reply = list_invoices(ctx).await?;
            print_json_response(&reply)?;
        }
        InvoiceCommand::Pay(args) => {
            let reply = mark_paid(ctx, &args.id).await?;
            print_json_response(&reply)?;
        }
        InvoiceCommand::Generate(args) => {
            let reply = generate_receipt(ctx, &args.id).await?;
            print_json_response(&reply)?;
        }
    }
    Ok(())
}
