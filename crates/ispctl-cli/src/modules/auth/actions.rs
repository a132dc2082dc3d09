use reqwest::Method;

use ispctl_core::api::auth::{LoginRequest, RegisterRequest};
use ispctl_core::jwt;

use crate::cli_args::*;
use crate::modules::auth::session;
use crate::modules::auth::store::CredentialStore;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_login_command(
    args: LoginArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let request = LoginRequest {
        email: args.email,
        password,
        isp_id: args.tenant,
    };
    session::login(ctx.gateway, &request).await?;
    print_session_line(ctx.gateway.store(), "Logged in");
    Ok(())
}

pub(crate) async fn handle_register_command(
    args: RegisterArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let request = RegisterRequest {
        email: args.email,
        password,
        display_name: args.display_name,
        tenant_name: args.tenant_name,
    };
    session::register(ctx.gateway, &request).await?;
    print_session_line(ctx.gateway.store(), "Registered");
    Ok(())
}

pub(crate) async fn handle_logout_command(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    session::logout(ctx.gateway).await?;
    println!("Logged out");
    Ok(())
}

/// Reports the stored session without touching the network.
pub(crate) fn handle_status(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let store = ctx.gateway.store();
    let Some(access) = store.access_token() else {
        println!("Not logged in");
        return Ok(());
    };
    match store.user().and_then(|user| user.email) {
        Some(email) => println!("Logged in as {email}"),
        None => println!("Logged in"),
    }
    if let Some(tenant) = store.tenant_id() {
        println!("Tenant: {tenant}");
    }
    match jwt::expires_at(&access) {
        Some(expires) => println!("Access token expires at {}", expires.to_rfc3339()),
        None => println!("Access token has no expiry"),
    }
    if store.refresh_token().is_some() {
        println!("Refresh token present");
    }
    Ok(())
}

pub(crate) async fn handle_whoami(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let reply = ctx.gateway.call(Method::GET, "/auth/me", None).await?;
    print_json_response(&reply)
}

fn print_session_line(store: &CredentialStore, verb: &str) {
    match (store.user().and_then(|user| user.email), store.tenant_id()) {
        (Some(email), Some(tenant)) => println!("{verb} as {email} (tenant {tenant})"),
        (Some(email), None) => println!("{verb} as {email}"),
        _ => println!("{verb}"),
    }
}
