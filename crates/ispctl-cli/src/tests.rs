use crate::cli_args::*;
use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_async, CredentialStore};
use crate::modules::auth::{handle_login_command, handle_logout_command};
use crate::modules::system::gateway::Gateway;
use crate::modules::system::{handle_config_command, CliConfig, CommandContext};
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn config_commands_manage_url_and_router() {
    let mut config = CliConfig::default();

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::SetUrl(ConfigSetUrlArgs {
                url: "https://billing.example.net/api".to_string(),
            }),
        },
        &mut config,
    )
    .expect("set-url");
    assert_eq!(
        config.api_url.as_deref(),
        Some("https://billing.example.net/api")
    );

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::UseRouter(ConfigUseRouterArgs {
                id: "router-1".to_string(),
            }),
        },
        &mut config,
    )
    .expect("use-router");
    assert_eq!(config.router_id.as_deref(), Some("router-1"));

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::Show,
        },
        &mut config,
    )
    .expect("show");

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::ClearRouter,
        },
        &mut config,
    )
    .expect("clear-router");
    assert!(config.router_id.is_none());
}

#[tokio::test]
async fn login_command_stores_the_session() {
    let _guard = lock_keyring_tests_async().await;
    clear_keyring_mock();
    let dir = tempdir().expect("tempdir");
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "admin@example.net",
            "password": "hunter2",
        })))
        .with_body(
            json!({
                "ok": true,
                "user": {"id": "u1", "email": "admin@example.net", "displayName": "Admin"},
                "ispId": "isp-1",
                "accessToken": "access-1",
                "refreshToken": "refresh-1",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let store = CredentialStore::at(dir.path());
    let gateway = Gateway::new(reqwest::Client::new(), &server.url(), store);
    let ctx = CommandContext { gateway: &gateway };
    handle_login_command(
        LoginArgs {
            email: "admin@example.net".to_string(),
            password: Some("hunter2".to_string()),
            tenant: None,
        },
        &ctx,
    )
    .await
    .expect("login ok");

    let store = gateway.store();
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(store.tenant_id().as_deref(), Some("isp-1"));
    assert_eq!(
        store.user().and_then(|user| user.email),
        Some("admin@example.net".to_string())
    );
}

#[tokio::test]
async fn logout_command_clears_the_session() {
    let _guard = lock_keyring_tests_async().await;
    clear_keyring_mock();
    let dir = tempdir().expect("tempdir");
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/logout")
        .match_body(Matcher::PartialJson(json!({"refreshToken": "refresh-9"})))
        .with_body(json!({"ok": true}).to_string())
        .create_async()
        .await;

    let store = CredentialStore::at(dir.path());
    store
        .set_session("access-9", "refresh-9", Some("isp-9"), None)
        .expect("seed session");
    let gateway = Gateway::new(reqwest::Client::new(), &server.url(), store);
    let ctx = CommandContext { gateway: &gateway };
    handle_logout_command(&ctx).await.expect("logout ok");

    let store = gateway.store();
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
    assert_eq!(store.tenant_id(), None);
    assert_eq!(store.user(), None);
}
