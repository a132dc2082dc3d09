use clap::{Args, Subcommand};

use crate::modules::shared::args::OutputFormat;

#[derive(Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Subcommand)]
pub enum CustomerCommand {
    List(CustomerListArgs),
    Search(CustomerSearchArgs),
    Get(CustomerGetArgs),
    Create(CustomerCreateArgs),
    Update(CustomerUpdateArgs),
    Delete(CustomerDeleteArgs),
    #[command(about = "Check a customer's router-side connection state")]
    Health(CustomerHealthArgs),
}

#[derive(Args)]
pub struct CustomerListArgs {
    #[arg(long)]
    pub disabled: bool,
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CustomerSearchArgs {
    pub query: String,
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CustomerGetArgs {
    pub id: String,
}

#[derive(Args)]
pub struct CustomerCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub plan: String,
    #[arg(long, default_value = "pppoe")]
    pub connection_type: String,
    #[arg(long)]
    pub router_ip: Option<String>,
    #[arg(long)]
    pub profile: Option<String>,
    #[arg(long)]
    pub local_address: Option<String>,
}

#[derive(Args)]
pub struct CustomerUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub plan: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub router_ip: Option<String>,
}

#[derive(Args)]
pub struct CustomerDeleteArgs {
    pub id: String,
}

#[derive(Args)]
pub struct CustomerHealthArgs {
    pub account_number: String,
}
