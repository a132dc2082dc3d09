use clap::{Args, Subcommand};

#[derive(Args)]
pub struct InvoiceArgs {
    #[command(subcommand)]
    pub command: InvoiceCommand,
}

#[derive(Subcommand)]
pub enum InvoiceCommand {
    List,
    #[command(about = "Mark an invoice as paid")]
    Pay(InvoiceIdArgs),
    #[command(about = "Regenerate the receipt document for an invoice")]
    Generate(InvoiceIdArgs),
}

#[derive(Args)]
pub struct InvoiceIdArgs {
    pub id: String,
}
