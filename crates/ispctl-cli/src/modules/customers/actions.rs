use serde_json::Value;

use ispctl_core::api::customers::{
    CreateCustomerRequest, Customer, PppoeConfig, UpdateCustomerRequest,
};

use super::http::{
    create_customer, customer_health, delete_customer, get_customer, list_customers,
    search_customers, update_customer,
};
use crate::cli_args::*;
use crate::modules::shared::args::OutputFormat;
use crate::modules::shared::{cell, print_table};
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_customer(
    args: CustomerArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        CustomerCommand::List(args) => {
            let reply = list_customers(ctx, args.disabled).await?;
            print_customers(&reply, args.format)?;
        }
        CustomerCommand::Search(args) => {
            let reply = search_customers(ctx, &args.query).await?;
            print_customers(&reply, args.format)?;
        }
        CustomerCommand::Get(args) => {
            let reply = get_customer(ctx, &args.id).await?;
            print_json_response(&reply)?;
        }
        CustomerCommand::Create(args) => {
            if args.connection_type == "pppoe" && args.profile.is_none() {
                anyhow::bail!("--profile is required for pppoe connections");
            }
            let pppoe_config = args.profile.map(|profile| PppoeConfig {
                profile: Some(profile),
                local_address: args.local_address,
                rate_limit: None,
            });
            let payload = CreateCustomerRequest {
                name: args.name,
                email: args.email,
                phone: args.phone,
                address: args.address,
                router_ip: args.router_ip,
                plan: args.plan,
                connection_type: args.connection_type,
                pppoe_config,
            };
            let reply = create_customer(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        CustomerCommand::Update(args) => {
            let payload = UpdateCustomerRequest {
                name: args.name,
                email: args.email,
                phone: args.phone,
                address: args.address,
                router_ip: args.router_ip,
                plan: args.plan,
                status: args.status,
                ..Default::default()
            };
            let reply = update_customer(ctx, &args.id, &payload).await?;
            print_json_response(&reply)?;
        }
        CustomerCommand::Delete(args) => {
            delete_customer(ctx, &args.id).await?;
            println!("Customer deleted");
        }
        CustomerCommand::Health(args) => {
            let reply = customer_health(ctx, &args.account_number).await?;
            print_json_response(&reply)?;
        }
    }
    Ok(())
}

fn print_customers(reply: &Value, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json_response(reply);
    }
    let customers: Vec<Customer> = serde_json::from_value(reply.clone())?;
    let rows: Vec<Vec<String>> = customers
        .iter()
        .map(|customer| {
            vec![
                cell(customer.account_number.as_deref()),
                cell(customer.name.as_deref()),
                cell(customer.status.as_deref()),
                cell(customer.plan.as_ref().and_then(|plan| plan.name())),
                cell(customer.expiry_date.as_deref()),
            ]
        })
        .collect();
    print_table(&["ACCOUNT", "NAME", "STATUS", "PLAN", "EXPIRES"], &rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_async, CredentialStore};
    use crate::modules::system::gateway::Gateway;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use tempfile::tempdir;

    fn build_gateway(url: &str, dir: &std::path::Path) -> Gateway {
        let store = CredentialStore::at(dir);
        store
            .set_session("token", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        Gateway::new(reqwest::Client::new(), url, store)
    }

    #[tokio::test]
    async fn list_sends_tenant_scoped_request() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/customers")
            .match_header("authorization", "Bearer token")
            .match_header("x-isp-id", "isp-1")
            .with_status(200)
            .with_body(
                json!([{
                    "_id": "c1",
                    "name": "Asha",
                    "accountNumber": "ACC-001",
                    "status": "active",
                    "plan": {"_id": "p1", "name": "Home 10", "price": 1500.0},
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let gateway = build_gateway(&server.url(), dir.path());
        let ctx = CommandContext { gateway: &gateway };
        let args = CustomerArgs {
            command: CustomerCommand::List(CustomerListArgs {
                disabled: false,
                format: OutputFormat::Table,
            }),
        };
        handle_customer(args, &ctx).await.expect("list ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_requires_profile_for_pppoe() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let gateway = build_gateway("http://127.0.0.1:1", dir.path());
        let ctx = CommandContext { gateway: &gateway };
        let args = CustomerArgs {
            command: CustomerCommand::Create(CustomerCreateArgs {
                name: "Asha".to_string(),
                email: None,
                phone: None,
                address: None,
                plan: "p1".to_string(),
                connection_type: "pppoe".to_string(),
                router_ip: None,
                profile: None,
                local_address: None,
            }),
        };
        let err = handle_customer(args, &ctx).await.expect_err("missing profile");
        assert!(err.to_string().contains("--profile"));
    }

    #[tokio::test]
    async fn create_sends_nested_pppoe_config() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/customers")
            .match_body(Matcher::PartialJson(json!({
                "name": "Asha",
                "plan": "p1",
                "connectionType": "pppoe",
                "pppoeConfig": {"profile": "default"},
            })))
            .with_status(201)
            .with_body(
                json!({"message": "Customer created successfully", "customer": {"_id": "c1"}})
                    .to_string(),
            )
            .create_async()
            .await;

        let gateway = build_gateway(&server.url(), dir.path());
        let ctx = CommandContext { gateway: &gateway };
        let args = CustomerArgs {
            command: CustomerCommand::Create(CustomerCreateArgs {
                name: "Asha".to_string(),
                email: None,
                phone: None,
                address: None,
                plan: "p1".to_string(),
                connection_type: "pppoe".to_string(),
                router_ip: None,
                profile: Some("default".to_string()),
                local_address: None,
            }),
        };
        handle_customer(args, &ctx).await.expect("create ok");
        mock.assert_async().await;
    }
}
