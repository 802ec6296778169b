// Copyright 2025 ecsctl Authors.
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

//! ecsctl configuration file

use crate::infrastructure::constants::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE_NAME};
use crate::shared::error::{EcsctlError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

// ============================================================================
// Main configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcsctlConf {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub output: OutputConf,
}

impl EcsctlConf {
    /// Load configuration from TOML file
    pub fn from<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            EcsctlError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }

    /// Resolve and load the configuration file.
    ///
    /// An explicit path must exist. Otherwise `ECSCTL_CONFIG` is consulted,
    /// then `$HOME/.ecsctl.toml`; when neither exists the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from(env_path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Command-line values win over file values
    pub fn merge_cli(&mut self, region: Option<String>, profile: Option<String>) {
        if region.is_some() {
            self.region = region;
        }
        if profile.is_some() {
            self.profile = profile;
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE_NAME))
}

// ============================================================================
// Output configuration
// ============================================================================

/// Rendering options for followed log events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConf {
    /// Pretty-print JSON messages with a 4-space indent
    pub expand: bool,
    /// Print messages verbatim, never as JSON
    pub raw: bool,
    /// Do not quote string values inside JSON messages
    pub raw_string: bool,
    pub hide_stream_name: bool,
    pub hide_date: bool,
    /// Render JSON keys in a de-emphasized color
    pub invert: bool,
    pub no_color: bool,
}

impl OutputConf {
    /// Flags set on either side stay set
    pub fn union(self, other: OutputConf) -> OutputConf {
        OutputConf {
            expand: self.expand || other.expand,
            raw: self.raw || other.raw,
            raw_string: self.raw_string || other.raw_string,
            hide_stream_name: self.hide_stream_name || other.hide_stream_name,
            hide_date: self.hide_date || other.hide_date,
            invert: self.invert || other.invert,
            no_color: self.no_color || other.no_color,
        }
    }
}
