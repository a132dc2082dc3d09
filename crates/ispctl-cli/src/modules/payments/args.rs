use clap::{Args, Subcommand};

use crate::modules::shared::args::OutputFormat;

#[derive(Args)]
pub struct PaymentArgs {
    #[command(subcommand)]
    pub command: PaymentCommand,
}

#[derive(Subcommand)]
pub enum PaymentCommand {
    List(PaymentListArgs),
    #[command(about = "Record a payment received outside the gateway")]
    Manual(PaymentManualArgs),
}

#[derive(Args)]
pub struct PaymentListArgs {
    #[arg(long)]
    pub limit: Option<i64>,
    #[arg(long)]
    pub include_deleted: bool,
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct PaymentManualArgs {
    #[arg(long)]
    pub transaction_id: String,
    #[arg(long)]
    pub payment_id: Option<String>,
    #[arg(long)]
    pub customer_id: Option<String>,
    #[arg(long)]
    pub account_number: Option<String>,
    #[arg(long)]
    pub amount: Option<f64>,
    #[arg(long)]
    pub method: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Operator name recorded against the validation
    #[arg(long)]
    pub validated_by: Option<String>,
}
