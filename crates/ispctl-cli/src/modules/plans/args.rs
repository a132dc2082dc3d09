use clap::{Args, Subcommand};

use crate::modules::shared::args::OutputFormat;

#[derive(Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommand,
}

#[derive(Subcommand)]
pub enum PlanCommand {
    List(PlanListArgs),
    Create(PlanCreateArgs),
    Update(PlanUpdateArgs),
    Delete(PlanDeleteArgs),
}

#[derive(Args)]
pub struct PlanListArgs {
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct PlanCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: f64,
    #[arg(long, help = "Billing period in days")]
    pub duration: i64,
    #[arg(long, help = "Download speed in Mbps")]
    pub speed: f64,
    #[arg(long)]
    pub rate_limit: Option<String>,
    #[arg(long)]
    pub data_cap: Option<String>,
}

#[derive(Args)]
pub struct PlanUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub duration: Option<i64>,
    #[arg(long)]
    pub speed: Option<f64>,
    #[arg(long)]
    pub rate_limit: Option<String>,
    #[arg(long)]
    pub data_cap: Option<String>,
}

#[derive(Args)]
pub struct PlanDeleteArgs {
    pub id: String,
}
