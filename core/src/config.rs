// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use takwim_aladhan::AladhanConfig;

use crate::occasion::LabelOptions;

/// The name of the Takwim application.
pub const APP_NAME: &str = "takwim";

/// Configuration for the Takwim application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion API settings.
    pub api: AladhanConfig,

    /// Hours a fetched month or date stays cached in memory.
    pub cache_ttl_hours: u64,

    /// Label Mondays and Thursdays as voluntary fasting days.
    pub weekday_fasting: bool,

    /// Label 9 Muharram (Tasu'a).
    pub tasua: bool,

    /// Directory where exports land when no output path is given.
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: AladhanConfig::default(),
            cache_ttl_hours: 6,
            weekday_fasting: true,
            tasua: true,
            export_dir: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = &self.export_dir {
            let dir = expand_path(dir)
                .map_err(|e| format!("Failed to expand export directory path: {e}"))?;
            self.export_dir = Some(dir);
        }

        if self.api.base_url.trim().is_empty() {
            return Err("api.base_url must not be empty".into());
        }
        Ok(())
    }

    /// Cache lifetime as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.saturating_mul(60 * 60))
    }

    /// Labeling switches derived from the configuration.
    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            weekday_fasting: self.weekday_fasting,
            tasua: self.tasua,
        }
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

/// User-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
