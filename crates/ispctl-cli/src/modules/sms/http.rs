use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::sms::{
    SendSmsRequest, SendTestSmsRequest, SmsPreviewRequest, UpdateSmsSettingsRequest,
    UpsertSmsTemplateRequest,
};

use crate::modules::system::CommandContext;

pub(crate) async fn settings(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx.gateway.call(Method::GET, "/sms/settings", None).await?)
}

pub(crate) async fn save_settings(
    ctx: &CommandContext<'_>,
    payload: &UpdateSmsSettingsRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/sms/settings", Some(body))
        .await?)
}

pub(crate) async fn list_templates(ctx: &CommandContext<'_>) -> anyhow::Result<Value> {
    Ok(ctx
        .gateway
        .call(Method::GET, "/sms/templates", None)
        .await?)
}

pub(crate) async fn upsert_template(
    ctx: &CommandContext<'_>,
    payload: &UpsertSmsTemplateRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/sms/templates", Some(body))
        .await?)
}

pub(crate) async fn preview(
    ctx: &CommandContext<'_>,
    payload: &SmsPreviewRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/sms/preview", Some(body))
        .await?)
}

pub(crate) async fn send_test(
    ctx: &CommandContext<'_>,
    payload: &SendTestSmsRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/sms/send-test", Some(body))
        .await?)
}

pub(crate) async fn send(
    ctx: &CommandContext<'_>,
    payload: &SendSmsRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/sms/send", Some(body))
        .await?)
}
