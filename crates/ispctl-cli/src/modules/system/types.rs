use serde::{Deserialize, Serialize};

use super::gateway::Gateway;

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub router_id: Option<String>,
}

pub struct CommandContext<'a> {
    pub gateway: &'a Gateway,
}
