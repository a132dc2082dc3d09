use crate::cli_args::*;
use crate::modules::system::CommandContext;

use crate::modules::account::handle_account;
use crate::modules::auth::{
    handle_login_command, handle_logout_command, handle_register_command, handle_status,
    handle_whoami,
};
use crate::modules::customers::handle_customer;
use crate::modules::hotspot::handle_hotspot;
use crate::modules::invoices::handle_invoice;
use crate::modules::payments::handle_payment;
use crate::modules::plans::handle_plan;
use crate::modules::pppoe::handle_pppoe;
use crate::modules::routers::handle_router;
use crate::modules::sms::handle_sms;
use crate::modules::system::{handle_health, handle_stats};

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => handle_login_command(args, ctx).await?,
        Command::Register(args) => handle_register_command(args, ctx).await?,
        Command::Logout => handle_logout_command(ctx).await?,
        Command::Whoami => handle_whoami(ctx).await?,
        Command::Status => handle_status(ctx)?,
        Command::Stats => handle_stats(ctx).await?,
        Command::Health => handle_health(ctx).await?,
        Command::Customer(args) => handle_customer(args, ctx).await?,
        Command::Plan(args) => handle_plan(args, ctx).await?,
        Command::Pppoe(args) => handle_pppoe(args, ctx).await?,
        Command::Hotspot(args) => handle_hotspot(args, ctx).await?,
        Command::Payment(args) => handle_payment(args, ctx).await?,
        Command::Invoice(args) => handle_invoice(args, ctx).await?,
        Command::Router(args) => handle_router(args, ctx).await?,
        Command::Sms(args) => handle_sms(args, ctx).await?,
        Command::Account(args) => handle_account(args, ctx).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
