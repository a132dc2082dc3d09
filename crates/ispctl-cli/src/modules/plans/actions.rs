use serde_json::Value;

use ispctl_core::api::plans::{CreatePlanRequest, Plan, UpdatePlanRequest};

use super::http::{create_plan, delete_plan, list_plans, update_plan};
use crate::cli_args::*;
use crate::modules::shared::args::OutputFormat;
use crate::modules::shared::{cell, money_cell, number_cell, print_table};
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_plan(args: PlanArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        PlanCommand::List(args) => {
            let reply = list_plans(ctx).await?;
            print_plans(&reply, args.format)?;
        }
        PlanCommand::Create(args) => {
            let payload = CreatePlanRequest {
                name: args.name,
                description: args.description,
                price: args.price,
                duration: args.duration,
                speed: args.speed,
                rate_limit: args.rate_limit,
                data_cap: args.data_cap,
            };
            let reply = create_plan(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        PlanCommand::Update(args) => {
            let payload = UpdatePlanRequest {
                name: args.name,
                description: args.description,
                price: args.price,
                duration: args.duration,
                speed: args.speed,
                rate_limit: args.rate_limit,
                data_cap: args.data_cap,
            };
            let reply = update_plan(ctx, &args.id, &payload).await?;
            print_json_response(&reply)?;
        }
        PlanCommand::Delete(args) => {
            delete_plan(ctx, &args.id).await?;
            println!("Plan deleted");
        }
    }
    Ok(())
}

fn print_plans(reply: &Value, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json_response(reply);
    }
    let plans: Vec<Plan> = serde_json::from_value(reply.clone())?;
    let rows: Vec<Vec<String>> = plans
        .iter()
        .map(|plan| {
            vec![
                cell(plan.id.as_deref()),
                cell(plan.name.as_deref()),
                money_cell(plan.price),
                number_cell(plan.duration),
                number_cell(plan.speed),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "PRICE", "DAYS", "MBPS"], &rows);
    Ok(())
}
