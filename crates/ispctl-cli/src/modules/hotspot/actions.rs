use ispctl_core::api::hotspot::CreateHotspotPlanRequest;

use super::http::{active_users, create_plan, delete_plan, list_plans};
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_hotspot(
    args: HotspotArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        HotspotCommand::Active => {
            let reply = active_users(ctx).await?;
            print_json_response(&reply)?;
        }
        HotspotCommand::Plans => {
            let reply = list_plans(ctx).await?;
            print_json_response(&reply)?;
        }
        HotspotCommand::CreatePlan(args) => {
            let payload = CreateHotspotPlanRequest {
                name: args.name,
                price: args.price,
                duration: args.duration,
                speed: args.speed,
                server: args.server,
                profile: args.profile,
                secret: args.secret,
            };
            let reply = create_plan(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        HotspotCommand::DeletePlan(args) => {
            delete_plan(ctx, &args.id).await?;
            println!("Hotspot plan deleted");
        }
    }
    Ok(())
}
