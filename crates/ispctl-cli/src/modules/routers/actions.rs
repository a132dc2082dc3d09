use serde_json::Value;

use ispctl_core::api::routers::{CreateRouterRequest, RouterServerList};

use super::http::{
    add_server, connection_status, list_servers, ping, pppoe_profiles, remove_server, set_primary,
    test_server,
};
use crate::cli_args::*;
use crate::modules::shared::args::OutputFormat;
use crate::modules::shared::{cell, number_cell, print_table};
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_router(
    args: RouterArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        RouterCommand::Status(args) => {
            let reply = connection_status(ctx, args.server).await?;
            print_json_response(&reply)?;
        }
        RouterCommand::Ping(args) => {
            let reply = ping(ctx, args.server).await?;
            print_json_response(&reply)?;
        }
        RouterCommand::List(args) => {
            let reply = list_servers(ctx).await?;
            print_servers(&reply, args.format)?;
        }
        RouterCommand::Add(args) => {
            let password = match args.password {
                Some(password) => password,
                None => prompt_password("Router password: ")?,
            };
            let payload = CreateRouterRequest {
                name: args.name,
                host: args.host,
                port: args.port.unwrap_or(if args.tls { 8729 } else { 8728 }),
                username: args.username,
                password,
                tls: args.tls,
                primary: args.primary,
                site: args.site,
            };
            let reply = add_server(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        RouterCommand::SetPrimary(args) => {
            set_primary(ctx, &args.id).await?;
            println!("Primary router updated");
        }
        RouterCommand::Remove(args) => {
            remove_server(ctx, &args.id).await?;
            println!("Router removed");
        }
        RouterCommand::Test(args) => {
            let reply = test_server(ctx, &args.id).await?;
            print_json_response(&reply)?;
        }
        RouterCommand::Profiles(args) => {
            let reply = pppoe_profiles(ctx, args.server).await?;
            print_json_response(&reply)?;
        }
    }
    Ok(())
}

fn print_servers(reply: &Value, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json_response(reply);
    }
    let servers: RouterServerList = serde_json::from_value(reply.clone())?;
    let rows: Vec<Vec<String>> = servers
        .into_vec()
        .iter()
        .map(|server| {
            vec![
                cell(server.server_id()),
                cell(server.name.as_deref()),
                cell(server.host.as_deref()),
                number_cell(server.port),
                cell(server.primary.unwrap_or(false).then_some("yes")),
                cell(server.last_verified_at.as_deref()),
            ]
        })
        .collect();
    print_table(
        &["ID", "NAME", "HOST", "PORT", "PRIMARY", "VERIFIED"],
        &rows,
    );
    Ok(())
}
