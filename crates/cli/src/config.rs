// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading.
//!
//! The file is TOML with a `[jira]` table holding the connection settings
//! and an optional `[parsing]` table overriding the built-in extraction rules.
//! It is looked up in this order:
//! - `--config <path>`
//! - `JIRA_QA_CONFIG`
//! - `./configs/config.toml`
//! - `<config dir>/jira-qa/config.toml`

use jq_core::ParsingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const LOCAL_CONFIG_PATH: &str = "configs/config.toml";
const APP_DIR_NAME: &str = "jira-qa";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jira: JiraConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    /// File this config was read from; empty for the built-in default.
    #[serde(skip)]
    pub path: PathBuf,
}

/// The `[jira]` table. Fields are checked by [`Config::credentials`], so
/// offline commands work with an incomplete table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub token: String,
}

/// Validated connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub username: String,
    pub token: String,
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config: Config = toml::from_str(&content)?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// Load the first config found in lookup order, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        match locate(explicit) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Config::load(&path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Like [`Config::discover`], falling back to the built-in parsing rules
    /// and an empty `[jira]` table.
    pub fn discover_or_default(explicit: Option<&Path>) -> Result<Self> {
        Ok(Config::discover(explicit)?.unwrap_or_default())
    }

    /// Like [`Config::discover`], but a missing file is an error.
    pub fn require(explicit: Option<&Path>) -> Result<Self> {
        Config::discover(explicit)?.ok_or(Error::ConfigNotFound)
    }

    /// Check the `[jira]` table and normalize the base URL.
    pub fn credentials(&self) -> Result<Credentials> {
        let required = |field: &'static str, value: &str| {
            if value.trim().is_empty() {
                Err(Error::FieldRequired {
                    field,
                    path: self.path.display().to_string(),
                })
            } else {
                Ok(value.trim().to_string())
            }
        };

        let base_url = required("base_url", &self.jira.base_url)?;
        let username = required("username", &self.jira.username)?;
        let token = required("token", &self.jira.token)?;

        Ok(Credentials {
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            token,
        })
    }
}

/// Resolve the config path. An explicit or environment path is returned even
/// if it does not exist, so that a typo is reported rather than skipped.
pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::config_path() {
        return Some(path);
    }
    let local = PathBuf::from(LOCAL_CONFIG_PATH);
    if local.is_file() {
        return Some(local);
    }
    user_config_path().filter(|path| path.is_file())
}

/// `<config dir>/jira-qa/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
