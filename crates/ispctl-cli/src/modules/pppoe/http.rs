use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::pppoe::{ProvisionPppoeRequest, UpdatePppoeRequest};

use crate::modules::system::gateway::{CallOptions, ROUTER_CALL_TIMEOUT};
use crate::modules::system::CommandContext;

fn router_options() -> CallOptions {
    CallOptions::with_timeout(ROUTER_CALL_TIMEOUT)
}

pub(crate) async fn active_sessions(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(Method::GET, "/pppoe/active", None, router_options())
        .await?)
}

pub(crate) async fn list_profiles(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(Method::GET, "/pppoe/profiles", None, router_options())
        .await?)
}

pub(crate) async fn provision_user(
    ctx: &CommandContext<'_>,
    payload: &ProvisionPppoeRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call_with(Method::POST, "/pppoe", Some(body), router_options())
        .await?)
}

pub(crate) async fn update_user(
    ctx: &CommandContext<'_>,
    username: &str,
    payload: &UpdatePppoeRequest,
) -> anyhow::Result<Value> {
    let path = format!("/pppoe/update/{}", urlencoding::encode(username));
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call_with(Method::PUT, &path, Some(body), router_options())
        .await?)
}

pub(crate) async fn remove_user(ctx: &CommandContext<'_>, username: &str) -> anyhow::Result<Value> {
    let path = format!("/pppoe/remove/{}", urlencoding::encode(username));
    Ok(ctx
        .gateway
        .call_with(Method::DELETE, &path, None, router_options())
        .await?)
}

pub(crate) async fn enable_account(
    ctx: &CommandContext<'_>,
    account_number: &str,
) -> anyhow::Result<Value> {
    let path = format!("/pppoe/{}/enable", urlencoding::encode(account_number));
    Ok(ctx
        .gateway
        .call_with(Method::POST, &path, None, router_options())
        .await?)
}

pub(crate) async fn disable_account(
    ctx: &CommandContext<'_>,
    account_number: &str,
) -> anyhow::Result<Value> {
    let path = format!("/pppoe/{}/disable", urlencoding::encode(account_number));
    Ok(ctx
        .gateway
        .call_with(Method::POST, &path, None, router_options())
        .await?)
}
