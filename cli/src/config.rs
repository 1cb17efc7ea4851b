// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use takwim_core::{APP_NAME, Config as CoreConfig, get_config_dir};
use tokio::fs;

const TAKWIM_CONFIG_ENV: &str = "TAKWIM_CONFIG";
const TAKWIM_DEV_ENV: &str = "TAKWIM_DEV";

const TAKWIM_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const TAKWIM_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration from, in order: the given path, `$TAKWIM_CONFIG`,
/// then the default location. A missing default file yields the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TAKWIM_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({TAKWIM_DEV_ENV} is set): config must be explicitly specified via --config or {TAKWIM_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::info!(path = %config.display(), "no config file, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e).into())
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(TAKWIM_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if TAKWIM_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if TAKWIM_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            TAKWIM_DEV_ENV,
            val,
            TAKWIM_DEV_VALID_TRUE.join(", "),
            TAKWIM_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
