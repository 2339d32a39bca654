// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the jira-qa CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no config file found\n  hint: pass --config <path>, set JIRA_QA_CONFIG, or create ./configs/config.toml")]
    ConfigNotFound,

    #[error("{field} is required\n  hint: set '{field}' under [jira] in {path}")]
    FieldRequired { field: &'static str, path: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("no tickets provided\n  hint: pass ticket keys as arguments or list them under 'tickets:' in the tickets file")]
    NoTickets,

    #[error("invalid date: {reason}")]
    InvalidDate { reason: String },

    #[error("issue not found: {0}")]
    TicketNotFound(String),

    #[error("authentication failed\n  hint: check 'username' and 'token' in the config file; prefix the token with 'bearer ' for personal access tokens")]
    Unauthorized,

    #[error("jira api error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Core(#[from] jq_core::Error),
}

/// A specialized Result type for jira-qa operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
