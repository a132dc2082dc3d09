use reqwest::Method;
use serde_json::Value;

use ispctl_core::api::payments::ManualPaymentRequest;

use crate::modules::system::http::{append_params, build_params, flag_param, opt_param};
use crate::modules::system::CommandContext;

pub(crate) async fn list_payments(
    ctx: &CommandContext<'_>,
    limit: Option<i64>,
    include_deleted: bool,
) -> anyhow::Result<Value> {
    let mut path = "/payments".to_string();
    let params = build_params([
        opt_param("limit", limit.map(|limit| limit.to_string())),
        flag_param("includeDeleted", include_deleted),
    ]);
    append_params(&mut path, params);
    Ok(ctx.gateway.call(Method::GET, &path, None).await?)
}

pub(crate) async fn record_manual_payment(
    ctx: &CommandContext<'_>,
    payload: &ManualPaymentRequest,
) -> anyhow::Result<Value> {
    let body = serde_json::to_value(payload)?;
    Ok(ctx
        .gateway
        .call(Method::POST, "/payments/manual", Some(body))
        .await?)
}
