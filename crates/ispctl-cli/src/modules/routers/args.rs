use clap::{Args, Subcommand};

use crate::modules::shared::args::OutputFormat;

#[derive(Args)]
pub struct RouterArgs {
    #[command(subcommand)]
    pub command: RouterCommand,
}

#[derive(Subcommand)]
pub enum RouterCommand {
    #[command(about = "Show the connection state of the selected router")]
    Status(RouterSelectArgs),
    Ping(RouterSelectArgs),
    List(RouterListArgs),
    Add(RouterAddArgs),
    #[command(about = "Make a saved router the tenant default")]
    SetPrimary(RouterIdArgs),
    Remove(RouterIdArgs),
    #[command(about = "Connect to a saved router and report its identity")]
    Test(RouterIdArgs),
    #[command(about = "List PPPoE profiles defined on the router")]
    Profiles(RouterSelectArgs),
}

#[derive(Args)]
pub struct RouterSelectArgs {
    /// Saved router to target instead of the configured default
    #[arg(long)]
    pub server: Option<String>,
}

#[derive(Args)]
pub struct RouterListArgs {
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct RouterAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub host: String,
    /// RouterOS API port; defaults to 8728, or 8729 with --tls
    #[arg(long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub tls: bool,
    #[arg(long)]
    pub primary: bool,
    #[arg(long)]
    pub site: Option<String>,
}

#[derive(Args)]
pub struct RouterIdArgs {
    pub id: String,
}
