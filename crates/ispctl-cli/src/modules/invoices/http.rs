use reqwest::Method;
use serde_json::Value;

use crate::modules::system::CommandContext;

pub(crate) async fn list_invoices(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx.gateway.call(Method::GET, "/invoices", None).await?)
}

pub(crate) async fn mark_paid(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/invoices/{id}/pay");
    Ok(ctx.gateway.call(Method::PUT, &path, None).await?)
}

pub(crate) async fn generate_receipt(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/invoices/{id}/generate");
    Ok(ctx.gateway.call(Method::POST, &path, None).await?)
}
