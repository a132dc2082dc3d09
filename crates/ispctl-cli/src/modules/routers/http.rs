use reqwest::Method;
use serde_json::{json, Value};

use ispctl_core::api::routers::CreateRouterRequest;

use crate::modules::system::gateway::{CallOptions, ROUTER_CALL_TIMEOUT};
use crate::modules::system::CommandContext;

fn router_options(server: Option<String>) -> CallOptions {
    CallOptions::with_timeout(ROUTER_CALL_TIMEOUT).router(server)
}

pub(crate) async fn connection_status(
    ctx: &CommandContext<'_>,
    server: Option<String>,
) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(Method::GET, "/mikrotik/status", None, router_options(server))
        .await?)
}

pub(crate) async fn ping(
    ctx: &CommandContext<'_>,
    server: Option<String>,
) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(Method::GET, "/mikrotik/ping", None, router_options(server))
        .await?)
}

pub(crate) async fn list_servers(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(Method::GET, "/mikrotik/servers", None, router_options(None))
        .await?)
}

pub(crate) async fn add_server(
    ctx: &CommandContext<'_>,
    payload: &CreateRouterRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call_with(
            Method::POST,
            "/mikrotik/servers",
            Some(body),
            router_options(None),
        )
        .await?)
}

pub(crate) async fn set_primary(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/mikrotik/servers/{id}");
    Ok(ctx
        .gateway
        .call_with(
            Method::PUT,
            &path,
            Some(json!({"primary": true})),
            router_options(None),
        )
        .await?)
}

pub(crate) async fn remove_server(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/mikrotik/servers/{id}");
    Ok(ctx
        .gateway
        .call_with(Method::DELETE, &path, None, router_options(None))
        .await?)
}

pub(crate) async fn test_server(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/mikrotik/servers/{id}/test");
    Ok(ctx
        .gateway
        .call_with(Method::POST, &path, None, router_options(None))
        .await?)
}

pub(crate) async fn pppoe_profiles(
    ctx: &CommandContext<'_>,
    server: Option<String>,
) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(
            Method::GET,
            "/mikrotik/pppoe-profiles",
            None,
            router_options(server),
        )
        .await?)
}
