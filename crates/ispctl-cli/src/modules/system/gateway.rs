//! Authenticated request gateway. Every console call to the billing API goes
//! through [`Gateway::call`], which attaches the stored bearer token and
//! tenant header, and recovers from a 401 by refreshing the session once and
//! replaying the rejected request. Concurrent 401s share a single refresh;
//! the extra callers queue and are replayed in arrival order.

use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, info, warn};

use crate::modules::auth::session;
use crate::modules::auth::store::CredentialStore;

pub(crate) const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(20);
pub(crate) const REFRESH_TIMEOUT: Duration = Duration::from_secs(15);
/// Endpoints that proxy live RouterOS commands run well past the default
/// deadline, so router-facing calls get a longer one.
pub(crate) const ROUTER_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Endpoints whose 401 means the credentials themselves were rejected.
/// Refreshing and retrying these would loop.
const AUTH_PATHS: [&str; 3] = ["/auth/login", "/auth/refresh", "/auth/logout"];

#[derive(Debug, Error)]
pub(crate) enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("[{status}] {message}")]
    Auth { status: u16, message: String },
    #[error("[{status}] {message}")]
    Validation { status: u16, message: String },
    #[error("[{status}] {message}")]
    Server { status: u16, message: String },
    #[error("session refresh failed: {reason}; run `ispctl login` to reauthenticate")]
    RefreshFailed { reason: String },
}

type CallOutcome = Result<Value, GatewayError>;

#[derive(Clone, Default)]
pub(crate) struct CallOptions {
    pub(crate) timeout: Option<Duration>,
    pub(crate) router: Option<String>,
}

impl CallOptions {
    pub(crate) fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    /// Targets one saved MikroTik server for this call only.
    pub(crate) fn router(mut self, router: Option<String>) -> Self {
        self.router = router;
        self
    }
}

#[derive(Clone)]
struct RequestPlan {
    method: Method,
    path: String,
    body: Option<Value>,
    router: Option<String>,
    timeout: Duration,
    retried: bool,
}

/// A call parked while a refresh is in flight. Its plan is replayed by the
/// refresh leader and the outcome handed back through the channel.
struct PendingCall {
    plan: RequestPlan,
    tx: oneshot::Sender<CallOutcome>,
}

#[derive(Default)]
struct RefreshState {
    refreshing: bool,
    queue: Vec<PendingCall>,
}

enum RecoverRole {
    Waiter(oneshot::Receiver<CallOutcome>),
    Leader(RequestPlan),
}

pub(crate) struct Gateway {
    http: Client,
    base_url: String,
    store: CredentialStore,
    token_override: Option<String>,
    tenant_override: Option<String>,
    router_id: Option<String>,
    call_timeout: Duration,
    refresh_timeout: Duration,
    state: Mutex<RefreshState>,
}

impl Gateway {
    pub(crate) fn new(http: Client, base_url: &str, store: CredentialStore) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            token_override: None,
            tenant_override: None,
            router_id: None,
            call_timeout: DEFAULT_CALL_TIMEOUT,
            refresh_timeout: REFRESH_TIMEOUT,
            state: Mutex::new(RefreshState::default()),
        }
    }

    /// A token passed on the command line is used verbatim and is never
    /// refreshed; a 401 then surfaces directly.
    pub(crate) fn with_token_override(mut self, token: Option<String>) -> Self {
        self.token_override = token;
        self
    }

    pub(crate) fn with_tenant_override(mut self, tenant: Option<String>) -> Self {
        self.tenant_override = tenant;
        self
    }

    pub(crate) fn with_router(mut self, router_id: Option<String>) -> Self {
        self.router_id = router_id;
        self
    }

    pub(crate) fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = timeout;
        self
    }

    pub(crate) fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn has_token_override(&self) -> bool {
        self.token_override.is_some()
    }

    pub(crate) fn refresh_timeout(&self) -> Duration {
        self.refresh_timeout
    }

    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> CallOutcome {
        self.call_with(method, path, body, CallOptions::default())
            .await
    }

    pub(crate) async fn call_with(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: CallOptions,
    ) -> CallOutcome {
        let plan = RequestPlan {
            method,
            path: path.to_string(),
            body,
            router: options.router,
            timeout: options.timeout.unwrap_or(self.call_timeout),
            retried: false,
        };
        let response = self.dispatch(&plan).await?;
        if self.should_recover(response.status(), &plan) {
            return self.recover(plan).await;
        }
        let timeout = plan.timeout;
        self.finish(response, timeout).await
    }

    fn should_recover(&self, status: StatusCode, plan: &RequestPlan) -> bool {
        status == StatusCode::UNAUTHORIZED
            && !plan.retried
            && self.token_override.is_none()
            && !is_auth_path(&plan.path)
    }

    /// 401 recovery. The first rejected call becomes the refresh leader;
    /// later ones park in the queue until the leader finishes. On success the
    /// leader replays the queue in order, then its own call. On failure every
    /// parked call is rejected and the stored session is cleared.
    async fn recover(&self, plan: RequestPlan) -> CallOutcome {
        let role = {
            let mut state = self.state.lock().await;
            if state.refreshing {
                let (tx, rx) = oneshot::channel();
                state.queue.push(PendingCall { plan, tx });
                RecoverRole::Waiter(rx)
            } else {
                state.refreshing = true;
                RecoverRole::Leader(plan)
            }
        };

        let plan = match role {
            RecoverRole::Waiter(rx) => {
                return match rx.await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(GatewayError::RefreshFailed {
                        reason: "refresh abandoned before completion".to_string(),
                    }),
                };
            }
            RecoverRole::Leader(plan) => plan,
        };

        info!("access token rejected; refreshing session");
        match self.refresh_session().await {
            Ok(()) => {
                let queued = self.take_queue().await;
                for pending in queued {
                    let outcome = self.replay(pending.plan).await;
                    let _ = pending.tx.send(outcome);
                }
                self.replay(plan).await
            }
            Err(err) => {
                let queued = self.take_queue().await;
                let reason = match &err {
                    GatewayError::RefreshFailed { reason } => reason.clone(),
                    other => other.to_string(),
                };
                warn!(
                    reason = %reason,
                    queued = queued.len(),
                    "session refresh failed; rejecting queued requests"
                );
                for pending in queued {
                    let _ = pending.tx.send(Err(GatewayError::RefreshFailed {
                        reason: reason.clone(),
                    }));
                }
                session::force_logout(&self.store);
                Err(err)
            }
        }
    }

    /// Clears the in-flight flag and drains the queue in one lock so no
    /// waiter can slip in between.
    async fn take_queue(&self) -> Vec<PendingCall> {
        let mut state = self.state.lock().await;
        state.refreshing = false;
        std::mem::take(&mut state.queue)
    }

    async fn replay(&self, mut plan: RequestPlan) -> CallOutcome {
        plan.retried = true;
        let response = self.dispatch(&plan).await?;
        let timeout = plan.timeout;
        self.finish(response, timeout).await
    }

    async fn refresh_session(&self) -> Result<(), GatewayError> {
        session::refresh_access_token(&self.http, &self.base_url, &self.store, self.refresh_timeout)
            .await
            .map(|_| ())
    }

    /// Credentials are read from the store at send time, so a replay after a
    /// refresh picks up the new token without any plumbing.
    async fn dispatch(&self, plan: &RequestPlan) -> Result<Response, GatewayError> {
        let url = format!("{}{}", self.base_url, plan.path);
        let mut request = self
            .http
            .request(plan.method.clone(), &url)
            .timeout(plan.timeout);
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(tenant) = self.tenant_id() {
            request = request.header("x-isp-id", tenant);
        }
        if let Some(router) = plan.router.as_ref().or(self.router_id.as_ref()) {
            request = request.header("x-isp-server", router);
        }
        if let Some(body) = &plan.body {
            request = request.json(body);
        }
        debug!(method = %plan.method, url = %url, "http request");
        let start = std::time::Instant::now();
        let response = request
            .send()
            .await
            .map_err(|err| transport_error(err, plan.timeout))?;
        debug!(
            method = %plan.method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    async fn finish(&self, response: Response, timeout: Duration) -> CallOutcome {
        let status = response.status();
        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|err| transport_error(err, timeout))?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return match serde_json::from_str(&text) {
                Ok(value) => Ok(value),
                Err(_) => Ok(Value::String(text)),
            };
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    fn bearer_token(&self) -> Option<String> {
        if let Some(token) = &self.token_override {
            return Some(token.clone());
        }
        self.store.access_token()
    }

    fn tenant_id(&self) -> Option<String> {
        if let Some(tenant) = &self.tenant_override {
            return Some(tenant.clone());
        }
        self.store.tenant_id()
    }
}

fn is_auth_path(path: &str) -> bool {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    AUTH_PATHS.contains(&path)
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout(timeout)
    } else {
        GatewayError::Network(err.to_string())
    }
}

/// Pulls a human message out of an API error body. The server replies with
/// `{"error": ...}` on most routes and `{"message": ...}` on a few older
/// ones.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

fn status_error(status: StatusCode, body: &str) -> GatewayError {
    let message = error_message(status, body);
    let code = status.as_u16();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        GatewayError::Auth {
            status: code,
            message,
        }
    } else if status.is_client_error() {
        GatewayError::Validation {
            status: code,
            message,
        }
    } else {
        GatewayError::Server {
            status: code,
            message,
        }
    }
}
