// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jq-core operations.

use thiserror::Error;

/// All possible errors that can occur in jq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue key cannot be empty")]
    EmptyIssueKey,

    #[error("invalid {field} pattern '{pattern}': {source}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("{field} pattern '{pattern}' has no capture group\n  hint: wrap the value to extract in parentheses, e.g. 'Result:\\s*(.+)'")]
    MissingCaptureGroup { field: &'static str, pattern: String },

    #[error("unreadable comment body: {0}")]
    UnreadableBody(String),

    #[error("failed to get comments for issue {key}: {message}")]
    Source { key: String, message: String },
}

impl Error {
    /// Wraps a ticket source failure for the given issue key.
    pub fn ticket_source(key: &str, err: impl std::fmt::Display) -> Self {
        Error::Source {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for jq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
