use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::customers::{CreateCustomerRequest, UpdateCustomerRequest};

use crate::modules::system::http::{append_params, build_params, opt_param};
use crate::modules::system::CommandContext;

pub(crate) async fn list_customers(
    ctx: &CommandContext<'_>,
    disabled: bool,
) -> anyhow::Result<Value> {
    let path = if disabled {
        "/customers/disabled"
    } else {
        "/customers"
    };
    Ok(ctx.gateway.call(Method::GET, path, None).await?)
}

pub(crate) async fn search_customers(
    ctx: &CommandContext<'_>,
    query: &str,
) -> anyhow::Result<Value> {
    let mut path = "/customers/search".to_string();
    append_params(
        &mut path,
        build_params([opt_param("query", Some(query.to_string()))]),
    );
    Ok(ctx.gateway.call(Method::GET, &path, None).await?)
}

pub(crate) async fn get_customer(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/customers/by-id/{id}");
    Ok(ctx.gateway.call(Method::GET, &path, None).await?)
}

pub(crate) async fn create_customer(
    ctx: &CommandContext<'_>,
    payload: &CreateCustomerRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx.gateway.call(Method::POST, "/customers", Some(body)).await?)
}

pub(crate) async fn update_customer(
    ctx: &CommandContext<'_>,
    id: &str,
    payload: &UpdateCustomerRequest,
) -> anyhow::Result<Value> {
    let path = format!("/customers/{id}");
    let body = serde_json::to_value(payload)?;
    Ok(ctx.gateway.call(Method::PUT, &path, Some(body)).await?)
}

pub(crate) async fn delete_customer(ctx: &CommandContext<'_>, id: &str) -> anyhow::Result<Value> {
    let path = format!("/customers/{id}");
    Ok(ctx.gateway.call(Method::DELETE, &path, None).await?)
}

pub(crate) async fn customer_health(
    ctx: &CommandContext<'_>,
    account_number: &str,
) -> anyhow::Result<Value> {
    let path = format!("/customers/health/{}", urlencoding::encode(account_number));
    Ok(ctx.gateway.call(Method::GET, &path, None).await?)
}
