use std::fs;
use std::path::{Path, PathBuf};

use super::types::CliConfig;
use crate::cli_args::{ConfigArgs, ConfigCommand};
use crate::DEFAULT_API_URL;

/// Directory holding `config.json` and `session.json`. Overridable through
/// `ISPCTL_CONFIG_DIR` so tests never touch the real home directory.
pub(crate) fn config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var("ISPCTL_CONFIG_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".ispctl"))
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Flag and environment values win via clap; after those, the saved config,
/// then the built-in default.
pub(crate) fn resolve_api_url(arg: Option<String>, config: &CliConfig) -> String {
    arg.or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommand::SetUrl(args) => {
            config.api_url = Some(args.url);
        }
        ConfigCommand::UseRouter(args) => {
            config.router_id = Some(args.id);
        }
        ConfigCommand::ClearRouter => {
            config.router_id = None;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_api_url_prefers_flag_then_config() {
        let config = CliConfig {
            api_url: Some("https://cfg.example/api".to_string()),
            router_id: None,
        };
        assert_eq!(
            resolve_api_url(Some("https://flag.example/api".to_string()), &config),
            "https://flag.example/api"
        );
        assert_eq!(resolve_api_url(None, &config), "https://cfg.example/api");
        assert_eq!(
            resolve_api_url(None, &CliConfig::default()),
            DEFAULT_API_URL
        );
    }

    #[test]
    fn plain_http_requires_insecure_flag() {
        assert!(ensure_secure_addr("http://10.0.0.2:5000/api", false).is_err());
        assert!(ensure_secure_addr("http://10.0.0.2:5000/api", true).is_ok());
        assert!(ensure_secure_addr("https://billing.example/api", false).is_ok());
    }
}
