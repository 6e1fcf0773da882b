// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration: defaults, JSON files and environment overrides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable overriding [`EngineConfig::app_name`].
pub const ENV_APP_NAME: &str = "KESTREL_APP_NAME";
/// Environment variable overriding [`EngineConfig::window_width`].
pub const ENV_WINDOW_WIDTH: &str = "KESTREL_WINDOW_WIDTH";
/// Environment variable overriding [`EngineConfig::window_height`].
pub const ENV_WINDOW_HEIGHT: &str = "KESTREL_WINDOW_HEIGHT";
/// Environment variable overriding [`EngineConfig::tick_rate_hz`].
pub const ENV_TICK_RATE: &str = "KESTREL_TICK_RATE";
/// Environment variable overriding [`EngineConfig::max_frames`].
pub const ENV_MAX_FRAMES: &str = "KESTREL_MAX_FRAMES";

/// Settings read by [`Engine`](crate::Engine) before the run-loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// A display name for the application, used in log output.
    pub app_name: String,
    /// The initial window width in physical pixels.
    pub window_width: u32,
    /// The initial window height in physical pixels.
    pub window_height: u32,
    /// Target frames per second. `0` runs the loop unthrottled.
    pub tick_rate_hz: u32,
    /// Stop after this many frames. `None` runs until the application exits.
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Kestrel Application".to_string(),
            window_width: 1280,
            window_height: 720,
            tick_rate_hz: 60,
            max_frames: None,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON. Missing fields keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded engine configuration from '{}'.", path.display());
        Ok(config)
    }

    /// Builds the default configuration with the `KESTREL_*` environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides found through `lookup`, keyed by the `ENV_*` variable names.
    ///
    /// An empty `KESTREL_MAX_FRAMES` clears the frame limit.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_APP_NAME) {
            self.app_name = name;
        }
        if let Some(raw) = lookup(ENV_WINDOW_WIDTH) {
            self.window_width = parse_value(ENV_WINDOW_WIDTH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_WINDOW_HEIGHT) {
            self.window_height = parse_value(ENV_WINDOW_HEIGHT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TICK_RATE) {
            self.tick_rate_hz = parse_value(ENV_TICK_RATE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_FRAMES) {
            self.max_frames = if raw.trim().is_empty() {
                None
            } else {
                Some(parse_value(ENV_MAX_FRAMES, &raw)?)
            };
        }
        Ok(self)
    }

    /// Rejects settings the run-loop cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "window_width",
                value: self.window_width.to_string(),
            });
        }
        if self.window_height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "window_height",
                value: self.window_height.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// An error raised while loading or validating an [`EngineConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration is not valid JSON, or has unknown or mistyped fields.
    Parse(serde_json::Error),
    /// A setting holds a value the engine cannot use.
    InvalidValue {
        /// The setting or environment variable name.
        key: &'static str,
        /// The rejected value, as given.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(
                f,
                "Failed to read config file '{}': {source}",
                path.display()
            ),
            ConfigError::Parse(err) => write!(f, "Failed to parse config: {err}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{value}' for '{key}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}
