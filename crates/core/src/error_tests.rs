// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    empty_key = { Error::EmptyIssueKey, "cannot be empty" },
    unreadable = { Error::UnreadableBody("table".into()), "table" },
    missing_group = {
        Error::MissingCaptureGroup { field: "result", pattern: "Result:".into() },
        "no capture group"
    },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn source_error_names_issue() {
    let err = Error::ticket_source("PRJ-1", "connection refused");
    let msg = err.to_string();
    assert!(msg.contains("PRJ-1"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn invalid_pattern_keeps_regex_error() {
    let regex_err = regex::Regex::new("(unclosed").unwrap_err();
    let err = Error::InvalidPattern {
        field: "version",
        pattern: "(unclosed".into(),
        source: Box::new(regex_err),
    };
    assert!(err.to_string().contains("version"));
    assert!(std::error::Error::source(&err).is_some());
}
