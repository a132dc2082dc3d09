use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::hotspot::CreateHotspotPlanRequest;

use crate::modules::system::gateway::{CallOptions, ROUTER_CALL_TIMEOUT};
use crate::modules::system::CommandContext;

pub(crate) async fn active_users(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call_with(
            Method::GET,
            "/hotspot/active",
            None,
            CallOptions::with_timeout(ROUTER_CALL_TIMEOUT),
        )
        .await?)
}

pub(crate) async fn list_plans(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call(Method::GET, "/hotspot-plans", None)
        .await?)
}

pub(crate) async fn create_plan(
    ctx: &CommandContext<'_>,
    payload: &CreateHotspotPlanRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/hotspot-plans", Some(body))
        .await?)
}

pub(crate) async fn delete_plan(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/hotspot-plans/{id}");
    Ok(ctx.gateway.call(Method::DELETE, &path, None).await?)
}
