// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use eventdesk_api::ApiConfig;
use eventdesk_core::APP_NAME;
use tokio::fs;

const EVENTDESK_CONFIG_ENV: &str = "EVENTDESK_CONFIG";

/// Loads the configuration.
///
/// The file is taken from `path`, then from `EVENTDESK_CONFIG`, then from the
/// user config directory. Only the last one may be missing, in which case the
/// defaults are used. `base_url` overrides whatever the file says.
#[tracing::instrument]
pub async fn parse_config(
    path: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(EVENTDESK_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if config.exists() {
            Some(config)
        } else {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            None
        }
    };

    let mut config = match path {
        Some(path) => fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
            .parse::<Config>()
            .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e))?,
        None => Config::default(),
    };

    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
    }
    Ok(config)
}

/// Configuration for eventdesk.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Where the events backend lives and how to talk to it.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log file for interactive sessions, nothing is logged there when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
