use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::plans::{CreatePlanRequest, UpdatePlanRequest};

use crate::modules::system::CommandContext;

pub(crate) async fn list_plans(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx.gateway.call(Method::GET, "/plans", None).await?)
}

pub(crate) async fn create_plan(
    ctx: &CommandContext<'_>,
    payload: &CreatePlanRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx.gateway.call(Method::POST, "/plans", Some(body)).await?)
}

pub(crate) async fn update_plan(
    ctx: &CommandContext<'_>,
    id: &str,
    payload: &UpdatePlanRequest,
) -> anyhow::Result<Value> {
    let path = format!("/plans/{id}");
    let body = serde_json::to_value(payload)?;
    Ok(ctx.gateway.call(Method::PUT, &path, Some(body)).await?)
}

pub(crate) async fn delete_plan(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/plans/{id}");
    Ok(ctx.gateway.call(Method::DELETE, &path, None).await?)
}
