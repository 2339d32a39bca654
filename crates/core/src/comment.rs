// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured QA records produced from ticket comments.

use serde::{Deserialize, Serialize};

/// A QA verification record extracted from one ticket comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct QaComment {
    /// Software version the tester checked, e.g. "v1.2.3".
    pub software_version: String,
    /// Canonical test result ("Fixed", "Not Fixed", ...), or empty.
    pub test_result: String,
    /// Free-text note left by the tester.
    pub note: String,
    /// Comment creation timestamp as supplied by the ticket system.
    pub created: String,
    /// Identity of the comment author (usually an email address).
    pub author: String,
}

impl QaComment {
    /// True if at least one extracted field is non-empty.
    ///
    /// Records without content are noise and are never returned by the
    /// aggregator.
    pub fn has_content(&self) -> bool {
        !self.software_version.is_empty() || !self.test_result.is_empty() || !self.note.is_empty()
    }
}

/// A ticket together with its QA records, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Issue {
    /// Ticket key, e.g. "PRJ-123".
    pub key: String,
    /// Ticket summary line; empty when it could not be fetched.
    pub summary: String,
    /// Identity of the assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Author of the most recent QA record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa_owner: Option<String>,
    /// QA records in original comment order.
    pub comments: Vec<QaComment>,
}

/// Results for a batch of tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IssuesList {
    pub issues: Vec<Issue>,
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
