use reqwest::Method;

use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_stats(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let reply = ctx.gateway.call(Method::GET, "/stats", None).await?;
    print_json_response(&reply)
}

pub(crate) async fn handle_health(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let reply = ctx.gateway.call(Method::GET, "/health", None).await?;
    print_json_response(&reply)
}
