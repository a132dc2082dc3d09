use clap::{Args, Subcommand};

#[derive(Args)]
pub struct PppoeArgs {
    #[command(subcommand)]
    pub command: PppoeCommand,
}

#[derive(Subcommand)]
pub enum PppoeCommand {
    #[command(about = "List sessions currently online")]
    Active,
    Profiles,
    Provision(PppoeProvisionArgs),
    Update(PppoeUpdateArgs),
    Remove(PppoeRemoveArgs),
    Enable(PppoeAccountArgs),
    Disable(PppoeAccountArgs),
}

#[derive(Args)]
pub struct PppoeProvisionArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub profile: Option<String>,
    #[arg(long)]
    pub local_address: Option<String>,
    #[arg(long)]
    pub rate_limit: Option<String>,
}

#[derive(Args)]
pub struct PppoeUpdateArgs {
    pub username: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub profile: Option<String>,
    #[arg(long)]
    pub rate_limit: Option<String>,
    #[arg(long)]
    pub disabled: Option<bool>,
}

#[derive(Args)]
pub struct PppoeRemoveArgs {
    pub username: String,
}

#[derive(Args)]
pub struct PppoeAccountArgs {
    pub account_number: String,
}
