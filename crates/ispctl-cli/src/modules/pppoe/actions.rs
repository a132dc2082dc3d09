use ispctl_core::api::pppoe::{ProvisionPppoeRequest, UpdatePppoeRequest};

use super::http::{
    active_sessions, disable_account, enable_account, list_profiles, provision_user, remove_user,
    update_user,
};
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;
use crate::prompt_password;

pub(crate) async fn handle_pppoe(args: PppoeArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        PppoeCommand::Active => {
            let reply = active_sessions(ctx).await?;
            print_json_response(&reply)?;
        }
        PppoeCommand::Profiles => {
            let reply = list_profiles(ctx).await?;
            print_json_response(&reply)?;
        }
        PppoeCommand::Provision(args) => {
            let password = match args.password {
                Some(password) => password,
                None => prompt_password("PPPoE password: ")?,
            };
            let payload = ProvisionPppoeRequest {
                username: args.username,
                password,
                profile: args.profile,
                local_address: args.local_address,
                rate_limit: args.rate_limit,
            };
            let reply = provision_user(ctx, &payload).await?;
            print_json_response(&reply)?;
        }
        PppoeCommand::Update(args) => {
            let payload = UpdatePppoeRequest {
                password: args.password,
                profile: args.profile,
                rate_limit: args.rate_limit,
                disabled: args.disabled,
            };
            let reply = update_user(ctx, &args.username, &payload).await?;
            print_json_response(&reply)?;
        }
        PppoeCommand::Remove(args) => {
            remove_user(ctx, &args.username).await?;
            println!("PPPoE user removed");
        }
        PppoeCommand::Enable(args) => {
            enable_account(ctx, &args.account_number).await?;
            println!("Connection enabled");
        }
        PppoeCommand::Disable(args) => {
            disable_account(ctx, &args.account_number).await?;
            println!("Connection disabled");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_async, CredentialStore};
    use crate::modules::system::gateway::Gateway;
    use mockito::Server;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn account_numbers_are_encoded_in_paths() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("token", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/pppoe/ACC%2F001/disable")
            .with_status(200)
            .with_body(json!({"ok": true}).to_string())
            .create_async()
            .await;

        let gateway = Gateway::new(reqwest::Client::new(), &server.url(), store);
        let ctx = CommandContext { gateway: &gateway };
        let args = PppoeArgs {
            command: PppoeCommand::Disable(PppoeAccountArgs {
                account_number: "ACC/001".to_string(),
            }),
        };
        handle_pppoe(args, &ctx).await.expect("disable ok");
        mock.assert_async().await;
    }
}
