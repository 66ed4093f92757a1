// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use icsweek_core::{APP_NAME, Config as CoreConfig, FetchConfig};

const ICSWEEK_CONFIG_ENV: &str = "ICSWEEK_CONFIG";

/// Load the configuration.
///
/// Lookup order: the explicit path, then `$ICSWEEK_CONFIG`, then the user
/// config directory. Only a missing file in the user config directory falls
/// back to the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(ICSWEEK_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the command-line interface.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Calendar source and time interpretation.
    #[serde(default)]
    pub core: CoreConfig,

    /// Retrieval settings.
    #[serde(default)]
    pub fetch: FetchConfig,
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
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
