mod actions;
pub(crate) mod args;
pub(crate) mod config;
pub(crate) mod gateway;
pub(crate) mod http;
pub(crate) mod types;

pub(crate) use actions::{handle_health, handle_stats};
pub(crate) use config::{
    config_dir, ensure_secure_addr, handle_config_command, load_config, resolve_api_url,
    save_config,
};
pub(crate) use types::{CliConfig, CommandContext};
