//! Session lifecycle: establishing credentials at login, refreshing them
//! when the access token goes stale, and tearing them down on logout.

use std::time::Duration;

use reqwest::{Client, Method};
use tracing::{debug, warn};

use ispctl_core::api::auth::{
    AuthResponse, LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest,
};
use ispctl_core::jwt;

use crate::modules::auth::store::CredentialStore;
use crate::modules::system::gateway::{error_message, Gateway, GatewayError};
use crate::REFRESH_SKEW_SECONDS;

pub(crate) async fn login(gateway: &Gateway, request: &LoginRequest) -> anyhow::Result<()> {
    let body = serde_json::to_value(request)?;
    let reply = gateway.call(Method::POST, "/auth/login", Some(body)).await?;
    let response: AuthResponse = serde_json::from_value(reply)?;
    apply_session(gateway.store(), &response)
}

pub(crate) async fn register(gateway: &Gateway, request: &RegisterRequest) -> anyhow::Result<()> {
    let body = serde_json::to_value(request)?;
    let reply = gateway
        .call(Method::POST, "/auth/register", Some(body))
        .await?;
    let response: AuthResponse = serde_json::from_value(reply)?;
    apply_session(gateway.store(), &response)
}

/// Persists a login or register reply as the active session. The tenant id
/// and user profile fall back to the access token claims when the reply
/// omits them.
fn apply_session(store: &CredentialStore, response: &AuthResponse) -> anyhow::Result<()> {
    if !response.ok {
        let reason = response
            .error
            .as_deref()
            .unwrap_or("authentication rejected");
        anyhow::bail!("{reason}");
    }
    let (Some(access), Some(refresh)) = (&response.access_token, &response.refresh_token) else {
        anyhow::bail!("server reply is missing session tokens");
    };
    let claims = jwt::decode_claims(access);
    let tenant = response
        .isp_id
        .clone()
        .or_else(|| claims.and_then(|claims| claims.isp_id));
    let user = response
        .user
        .clone()
        .or_else(|| jwt::profile_from_token(access));
    store.set_session(access, refresh, tenant.as_deref(), user.as_ref())?;
    debug!("session established");
    Ok(())
}

/// Exchanges the stored refresh token for a new access token, bypassing the
/// gateway so a failing refresh can never recurse into another refresh.
/// Every failure maps to [`GatewayError::RefreshFailed`].
pub(crate) async fn refresh_access_token(
    http: &Client,
    base_url: &str,
    store: &CredentialStore,
    timeout: Duration,
) -> Result<String, GatewayError> {
    let Some(refresh_token) = store.refresh_token() else {
        return Err(GatewayError::RefreshFailed {
            reason: "no refresh token is stored".to_string(),
        });
    };
    let url = format!("{base_url}/auth/refresh");
    debug!(url = %url, "refreshing access token");
    let response = http
        .post(&url)
        .timeout(timeout)
        .json(&RefreshRequest { refresh_token })
        .send()
        .await
        .map_err(|err| refresh_transport_error(err, timeout))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| refresh_transport_error(err, timeout))?;
    if !status.is_success() {
        return Err(GatewayError::RefreshFailed {
            reason: format!("[{}] {}", status.as_u16(), error_message(status, &body)),
        });
    }
    let reply: AuthResponse = serde_json::from_str(&body).map_err(|err| {
        GatewayError::RefreshFailed {
            reason: format!("malformed refresh reply: {err}"),
        }
    })?;
    let Some(access) = reply.access_token else {
        return Err(GatewayError::RefreshFailed {
            reason: reply
                .error
                .unwrap_or_else(|| "reply is missing an access token".to_string()),
        });
    };
    store.set_access_token(Some(&access)).map_err(persist_error)?;
    if let Some(rotated) = &reply.refresh_token {
        store.set_refresh_token(Some(rotated)).map_err(persist_error)?;
    }
    if let Some(isp_id) = &reply.isp_id {
        store.set_tenant_id(Some(isp_id)).map_err(persist_error)?;
    }
    if let Some(user) = &reply.user {
        store.set_user(Some(user)).map_err(persist_error)?;
    }
    debug!("access token refreshed");
    Ok(access)
}

fn refresh_transport_error(err: reqwest::Error, timeout: Duration) -> GatewayError {
    if err.is_timeout() {
        GatewayError::RefreshFailed {
            reason: format!("refresh timed out after {timeout:?}"),
        }
    } else {
        GatewayError::RefreshFailed {
            reason: err.to_string(),
        }
    }
}

fn persist_error(err: anyhow::Error) -> GatewayError {
    GatewayError::RefreshFailed {
        reason: format!("failed to persist refreshed session: {err}"),
    }
}

/// Revokes the refresh token server side, then clears local credentials.
/// The local clear happens even when the revoke call fails.
pub(crate) async fn logout(gateway: &Gateway) -> anyhow::Result<()> {
    if let Some(refresh_token) = gateway.store().refresh_token() {
        let body = serde_json::to_value(LogoutRequest { refresh_token })?;
        if let Err(err) = gateway.call(Method::POST, "/auth/logout", Some(body)).await {
            debug!(error = %err, "server-side logout failed; clearing local session anyway");
        }
    }
    gateway.store().clear_all();
    debug!("cleared local session");
    Ok(())
}

/// Invoked when a refresh fails: whatever credentials remain are unusable.
pub(crate) fn force_logout(store: &CredentialStore) {
    store.clear_all();
    warn!("session expired; run `ispctl login` to reauthenticate");
}

/// Refreshes ahead of expiry so most commands never see a 401 at all.
/// Best effort: a failure here leaves the 401 recovery path to deal with it.
pub(crate) async fn ensure_fresh(gateway: &Gateway) {
    if gateway.has_token_override() {
        return;
    }
    let store = gateway.store();
    let Some(access) = store.access_token() else {
        return;
    };
    if !jwt::is_expired(&access, REFRESH_SKEW_SECONDS) {
        return;
    }
    if store.refresh_token().is_none() {
        return;
    }
    if let Err(err) = refresh_access_token(
        gateway.http(),
        gateway.base_url(),
        store,
        gateway.refresh_timeout(),
    )
    .await
    {
        debug!(error = %err, "proactive refresh failed; continuing with stored token");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_async};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use tempfile::tempdir;

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(json!({"alg": "HS256", "typ": "JWT"}).to_string());
        let payload = URL_SAFE_NO_PAD.encode(
            json!({
                "sub": "u-1",
                "email": "admin@example.com",
                "ispId": "isp-1",
                "exp": exp,
            })
            .to_string(),
        );
        format!("{header}.{payload}.sig")
    }

    fn gateway_for(url: &str, store: CredentialStore) -> Gateway {
        Gateway::new(reqwest::Client::new(), url, store)
    }

    #[tokio::test]
    async fn login_persists_full_session() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::PartialJson(json!({
                "email": "admin@example.com",
                "password": "hunter2",
            })))
            .with_status(200)
            .with_body(
                json!({
                    "ok": true,
                    "user": {"id": "u-1", "email": "admin@example.com", "displayName": "Admin"},
                    "ispId": "isp-1",
                    "accessToken": "access-1",
                    "refreshToken": "refresh-1",
                })
                .to_string(),
            )
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), CredentialStore::at(dir.path()));
        let request = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
            isp_id: None,
        };
        login(&gateway, &request).await.expect("login ok");

        let store = gateway.store();
        assert_eq!(store.access_token().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
        assert_eq!(store.tenant_id().as_deref(), Some("isp-1"));
        assert_eq!(
            store.user().and_then(|user| user.display_name),
            Some("Admin".to_string())
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_login_leaves_store_empty() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(json!({"ok": false, "error": "Invalid credentials"}).to_string())
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), CredentialStore::at(dir.path()));
        let request = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "wrong".to_string(),
            isp_id: None,
        };
        let err = login(&gateway, &request).await.expect_err("login fails");
        assert!(err.to_string().contains("Invalid credentials"));
        assert_eq!(gateway.store().access_token(), None);
        assert_eq!(gateway.store().refresh_token(), None);
    }

    #[tokio::test]
    async fn tenant_and_profile_fall_back_to_token_claims() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let mut server = Server::new_async().await;
        let access = token_with_exp(4_102_444_800);
        server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_body(
                json!({"ok": true, "accessToken": access, "refreshToken": "refresh-1"}).to_string(),
            )
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), CredentialStore::at(dir.path()));
        let request = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
            isp_id: None,
        };
        login(&gateway, &request).await.expect("login ok");

        let store = gateway.store();
        assert_eq!(store.tenant_id().as_deref(), Some("isp-1"));
        assert_eq!(
            store.user().and_then(|user| user.email),
            Some("admin@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn refresh_updates_access_token_and_keeps_refresh_token() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("stale", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/refresh")
            .match_body(Matcher::PartialJson(json!({"refreshToken": "refresh-1"})))
            .with_status(200)
            .with_body(json!({"ok": true, "accessToken": "fresh"}).to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let access = refresh_access_token(&client, &server.url(), &store, Duration::from_secs(5))
            .await
            .expect("refresh ok");
        assert_eq!(access, "fresh");
        assert_eq!(store.access_token().as_deref(), Some("fresh"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rotated_refresh_token_is_persisted() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("stale", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/refresh")
            .with_status(200)
            .with_body(
                json!({"ok": true, "accessToken": "fresh", "refreshToken": "refresh-2"})
                    .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        refresh_access_token(&client, &server.url(), &store, Duration::from_secs(5))
            .await
            .expect("refresh ok");
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
    }

    #[tokio::test]
    async fn refresh_without_stored_token_fails_fast() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        let client = reqwest::Client::new();
        let err = refresh_access_token(&client, "http://127.0.0.1:1", &store, Duration::from_secs(5))
            .await
            .expect_err("no token to refresh");
        assert!(err.to_string().contains("no refresh token"), "message: {err}");
    }

    #[tokio::test]
    async fn logout_revokes_and_clears() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("access-1", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/logout")
            .match_body(Matcher::PartialJson(json!({"refreshToken": "refresh-1"})))
            .with_status(200)
            .with_body(json!({"ok": true}).to_string())
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), store);
        logout(&gateway).await.expect("logout ok");
        assert_eq!(gateway.store().access_token(), None);
        assert_eq!(gateway.store().refresh_token(), None);
        assert_eq!(gateway.store().tenant_id(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn logout_clears_even_when_revoke_fails() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session("access-1", "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/logout")
            .with_status(500)
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), store);
        logout(&gateway).await.expect("logout still ok");
        assert_eq!(gateway.store().access_token(), None);
        assert_eq!(gateway.store().refresh_token(), None);
    }

    #[tokio::test]
    async fn ensure_fresh_refreshes_an_expired_token() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        store
            .set_session(&token_with_exp(1_000_000), "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/refresh")
            .with_status(200)
            .with_body(json!({"ok": true, "accessToken": "fresh-token"}).to_string())
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), store);
        ensure_fresh(&gateway).await;
        assert_eq!(
            gateway.store().access_token().as_deref(),
            Some("fresh-token")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn ensure_fresh_leaves_live_tokens_alone() {
        let _guard = lock_keyring_tests_async().await;
        clear_keyring_mock();
        let dir = tempdir().expect("tempdir");
        let store = CredentialStore::at(dir.path());
        let live = token_with_exp(chrono::Utc::now().timestamp() + 3_600);
        store
            .set_session(&live, "refresh-1", Some("isp-1"), None)
            .expect("seed session");
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/refresh")
            .expect(0)
            .create_async()
            .await;

        let gateway = gateway_for(&server.url(), store);
        ensure_fresh(&gateway).await;
        assert_eq!(gateway.store().access_token().as_deref(), Some(live.as_str()));
        mock.assert_async().await;
    }
}
