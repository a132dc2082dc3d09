use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouterServer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "_id", default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub tls: Option<bool>,
    #[serde(default)]
    pub primary: Option<bool>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub last_verified_at: Option<String>,
}

impl RouterServer {
    pub fn server_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.doc_id.as_deref())
    }
}

/// The servers endpoint has returned both a bare array and a wrapped
/// object across platform versions; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RouterServerList {
    Wrapped { servers: Vec<RouterServer> },
    Plain(Vec<RouterServer>),
}

impl RouterServerList {
    pub fn into_vec(self) -> Vec<RouterServer> {
        match self {
            RouterServerList::Wrapped { servers } => servers,
            RouterServerList::Plain(servers) => servers,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouterRequest {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub tls: bool,
    pub primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_plain_and_wrapped_server_lists() {
        let plain: RouterServerList =
            serde_json::from_value(json!([{"_id": "r1", "name": "core"}])).unwrap();
        assert_eq!(plain.into_vec()[0].server_id(), Some("r1"));

        let wrapped: RouterServerList =
            serde_json::from_value(json!({"servers": [{"id": "r2", "host": "10.0.0.1"}]}))
                .unwrap();
        let servers = wrapped.into_vec();
        assert_eq!(servers[0].server_id(), Some("r2"));
        assert_eq!(servers[0].host.as_deref(), Some("10.0.0.1"));
    }
}
