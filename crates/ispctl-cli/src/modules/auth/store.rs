//! Credential store: access/refresh tokens in the OS keyring, tenant id and
//! user profile in `session.json` under the config directory.
//!
//! Getters never fail: an absent or unreadable value reads as `None`.
//! Setters with `None` remove the key instead of persisting a literal null.

#[cfg(test)]
use std::collections::HashMap;
use std::fs;
#[cfg(test)]
use std::path::Path;
use std::path::PathBuf;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
use tracing::{debug, warn};

use ispctl_core::api::auth::UserProfile;

use crate::modules::system::config_dir;

pub(crate) const KEYRING_SERVICE: &str = "ispctl";
const SESSION_FILE: &str = "session.json";

const KIND_ACCESS: &str = "access";
const KIND_REFRESH: &str = "refresh";

#[derive(Serialize, Deserialize, Default)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<UserProfile>,
}

#[derive(Clone)]
pub(crate) struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub(crate) fn open() -> anyhow::Result<Self> {
        Ok(Self { dir: config_dir()? })
    }

    #[cfg(test)]
    pub(crate) fn at(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub(crate) fn access_token(&self) -> Option<String> {
        read_keyring_value(KIND_ACCESS)
    }

    pub(crate) fn refresh_token(&self) -> Option<String> {
        read_keyring_value(KIND_REFRESH)
    }

    pub(crate) fn tenant_id(&self) -> Option<String> {
        self.read_session().tenant_id
    }

    pub(crate) fn user(&self) -> Option<UserProfile> {
        self.read_session().user
    }

    pub(crate) fn set_access_token(&self, token: Option<&str>) -> anyhow::Result<()> {
        match token {
            Some(token) => {
                keyring_set(KIND_ACCESS, token)?;
                debug!("stored access token in keyring");
            }
            None => keyring_delete(KIND_ACCESS)?,
        }
        Ok(())
    }

    pub(crate) fn set_refresh_token(&self, token: Option<&str>) -> anyhow::Result<()> {
        match token {
            Some(token) => {
                keyring_set(KIND_REFRESH, token)?;
                debug!("stored refresh token in keyring");
            }
            None => keyring_delete(KIND_REFRESH)?,
        }
        Ok(())
    }

    pub(crate) fn set_tenant_id(&self, tenant: Option<&str>) -> anyhow::Result<()> {
        let mut session = self.read_session();
        session.tenant_id = tenant.map(str::to_string);
        self.write_session(&session)
    }

    pub(crate) fn set_user(&self, user: Option<&UserProfile>) -> anyhow::Result<()> {
        let mut session = self.read_session();
        session.user = user.cloned();
        self.write_session(&session)
    }

    /// Persists all four keys together; used on login and register.
    pub(crate) fn set_session(
        &self,
        access_token: &str,
        refresh_token: &str,
        tenant_id: Option<&str>,
        user: Option<&UserProfile>,
    ) -> anyhow::Result<()> {
        keyring_set(KIND_ACCESS, access_token)?;
        keyring_set(KIND_REFRESH, refresh_token)?;
        self.write_session(&SessionFile {
            tenant_id: tenant_id.map(str::to_string),
            user: user.cloned(),
        })
    }

    /// Removes every key. Failures are logged, not surfaced: after this call
    /// the store must read as logged out no matter what.
    pub(crate) fn clear_all(&self) {
        if let Err(err) = keyring_delete(KIND_ACCESS) {
            warn!(error = %err, "failed to delete access token from keyring");
        }
        if let Err(err) = keyring_delete(KIND_REFRESH) {
            warn!(error = %err, "failed to delete refresh token from keyring");
        }
        let path = self.session_path();
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %err, "failed to remove session file");
            }
        }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn read_session(&self) -> SessionFile {
        let Ok(contents) = fs::read_to_string(self.session_path()) else {
            return SessionFile::default();
        };
        match serde_json::from_str(&contents) {
            Ok(session) => session,
            Err(err) => {
                debug!(error = %err, "session file is malformed; treating as empty");
                SessionFile::default()
            }
        }
    }

    fn write_session(&self, session: &SessionFile) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string_pretty(session)?;
        fs::write(self.session_path(), contents)?;
        Ok(())
    }
}

fn read_keyring_value(kind: &str) -> Option<String> {
    match keyring_get(kind) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "failed to read {kind} token from keyring");
            None
        }
    }
}

#[cfg(not(test))]
fn keyring_entry(kind: &str) -> anyhow::Result<keyring::Entry> {
    keyring::Entry::new(KEYRING_SERVICE, kind)
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(kind: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(kind)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store {kind} token: {err}"))
}

#[cfg(not(test))]
fn keyring_get(kind: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(kind)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load {kind} token from keychain: {err}"
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(kind: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(kind)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => {
            warn!("failed to delete {kind} token: {err}");
            Ok(())
        }
    }
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
pub(crate) fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(test)]
pub(crate) async fn lock_keyring_tests_async() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .lock()
        .await
}

#[cfg(test)]
fn keyring_set(kind: &str, value: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(kind.to_string(), value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(kind: &str) -> anyhow::Result<Option<String>> {
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(kind).cloned())
}

#[cfg(test)]
fn keyring_delete(kind: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(kind);
    Ok(())
}

#[cfg(test)]
pub(crate) fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}
