use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::account::{UpdateEmailRequest, UpdatePasswordRequest};

use crate::modules::system::CommandContext;

pub(crate) async fn update_email(
    ctx: &CommandContext<'_>,
    payload: &UpdateEmailRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::PUT, "/account/email", Some(body))
        .await?)
}

pub(crate) async fn update_password(
    ctx: &CommandContext<'_>,
    payload: &UpdatePasswordRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::PUT, "/account/password", Some(body))
        .await?)
}
