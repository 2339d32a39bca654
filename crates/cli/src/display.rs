// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of QA records.

use chrono::{DateTime, FixedOffset};
use jq_core::{Issue, QaComment};

use crate::colors;

/// Timestamp layouts Jira is known to return, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.3f%z", "%Y-%m-%dT%H:%M:%S%z"];

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator printed between tickets in last-comment output.
pub const TICKET_SEPARATOR: &str = "------------------------------";

/// Parse a comment timestamp, e.g. `2025-08-12T16:35:38.514+0300`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
}

/// `YYYY-MM-DD HH:MM:SS` in the timestamp's own offset, or `None` when the
/// value cannot be parsed.
pub fn format_timestamp(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|ts| ts.format(DISPLAY_FORMAT).to_string())
}

/// Timestamp for display, falling back to the raw value.
pub fn display_timestamp(raw: &str) -> String {
    format_timestamp(raw).unwrap_or_else(|| raw.to_string())
}

/// Render one issue with all of its QA records.
pub fn format_issue(issue: &Issue, color: bool) -> String {
    let mut out = String::new();
    if issue.summary.is_empty() {
        out.push_str(&format!("{}\n", issue.key));
    } else {
        out.push_str(&format!("{}: {}\n", issue.key, issue.summary));
    }
    if let Some(assignee) = &issue.assignee {
        out.push_str(&format!("Assigned: {assignee}\n"));
    }
    if let Some(owner) = &issue.qa_owner {
        out.push_str(&format!("QA Owner: {owner}\n"));
    }
    out.push_str(&format!("Found {} QA comments:\n", issue.comments.len()));

    for (i, comment) in issue.comments.iter().enumerate() {
        out.push('\n');
        out.push_str(&comment_header(i + 1, comment));
        out.push('\n');
        out.push_str(&format!("  Version: {}\n", comment.software_version));
        let result_line = format!("  Result: {}", comment.test_result);
        out.push_str(&colors::result(&result_line, &comment.test_result, color));
        out.push('\n');
        if !comment.note.is_empty() {
            out.push_str(&format!("  Comment: {}\n", comment.note));
        }
    }
    out
}

fn comment_header(number: usize, comment: &QaComment) -> String {
    let mut header = format!("Comment #{number}");
    if let Some(time) = format_timestamp(&comment.created) {
        header.push_str(&format!(" ({time})"));
    }
    if !comment.author.is_empty() {
        header.push_str(&format!(" from {}", comment.author));
    }
    header.push(':');
    header
}

/// Render the most recent QA record of a ticket.
pub fn format_last_comment(key: &str, comment: Option<&QaComment>, color: bool) -> String {
    let Some(comment) = comment else {
        return format!("Last QA comment for {key}:\nNo QA comments found\n");
    };

    let mut out = format!("Last QA comment on {key}");
    if !comment.author.is_empty() {
        out.push_str(&format!(" by {}", comment.author));
    }
    if let Some(time) = format_timestamp(&comment.created) {
        out.push_str(&format!(" ({time})"));
    }
    out.push('\n');

    if !comment.software_version.is_empty() {
        out.push_str(&format!("Version: {}\n", comment.software_version));
    }
    let result_line = format!("Result: {}", comment.test_result);
    out.push_str(&colors::result(&result_line, &comment.test_result, color));
    out.push('\n');
    if !comment.note.is_empty() {
        out.push_str(&format!("Comment: {}\n", comment.note));
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
