use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,
    SetUrl(ConfigSetUrlArgs),
    #[command(about = "Route MikroTik commands to a saved router by default")]
    UseRouter(ConfigUseRouterArgs),
    ClearRouter,
}

#[derive(Args)]
pub struct ConfigSetUrlArgs {
    pub url: String,
}

#[derive(Args)]
pub struct ConfigUseRouterArgs {
    pub id: String,
}
