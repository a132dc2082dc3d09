use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;

mod cli_args;
mod cli_command;
mod modules;
#[cfg(test)]
mod tests;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::session;
use crate::modules::auth::store::CredentialStore;
use crate::modules::system::gateway::Gateway;
use crate::modules::system::CommandContext;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, resolve_api_url, save_config,
};
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_API_URL: &str = "https://localhost:5000/api";
pub(crate) const REFRESH_SKEW_SECONDS: i64 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;
    let command = cli.command;

    match command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        command => {
            let api_url = resolve_api_url(cli.api_url, &config);
            ensure_secure_addr(&api_url, cli.insecure)?;
            let client = reqwest::Client::builder()
                .danger_accept_invalid_certs(cli.insecure)
                .build()?;
            let store = CredentialStore::open()?;
            let mut gateway = Gateway::new(client, &api_url, store)
                .with_token_override(cli.token)
                .with_tenant_override(cli.tenant)
                .with_router(cli.router.or_else(|| config.router_id.clone()));
            if let Some(secs) = cli.timeout_secs {
                gateway = gateway.with_call_timeout(Duration::from_secs(secs));
            }

            // Session commands manage tokens themselves; status and health
            // never send authenticated requests.
            if !matches!(
                command,
                Command::Login(_)
                    | Command::Register(_)
                    | Command::Logout
                    | Command::Status
                    | Command::Health
            ) {
                session::ensure_fresh(&gateway).await;
            }

            let ctx = CommandContext { gateway: &gateway };
            handle_command(command, &ctx).await?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
