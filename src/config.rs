use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/board.json";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATS_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Seconds between statistics log lines; 0 turns them off.
    #[serde(default = "default_stats_interval_secs")]
    pub stats_interval_secs: u64,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_stats_interval_secs() -> u64 {
    DEFAULT_STATS_INTERVAL_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            stats_interval_secs: default_stats_interval_secs(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => {
                log::info!(
                    "Loaded board config from {}: listen on {}, statistics every {}s",
                    path.display(),
                    config.listen_addr,
                    config.stats_interval_secs
                );
                config
            }
            Err(err) => {
                log::warn!(
                    "Failed to parse board config {}: {err}; listening on {DEFAULT_LISTEN_ADDR}",
                    path.display()
                );
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Board config {} not readable ({err}); listening on {DEFAULT_LISTEN_ADDR}",
                path.display()
            );
            AppConfig::default()
        }
    }
}

/// Write `config` as pretty JSON with a trailing newline, creating missing
/// parent directories.
pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    let path = Path::new(path);
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    fs::write(path, json)?;
    log::debug!(
        "Saved board config to {} (listen on {})",
        path.display(),
        config.listen_addr
    );
    Ok(())
}
