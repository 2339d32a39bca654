// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn record(version: &str, result: &str, note: &str, created: &str, author: &str) -> QaComment {
    QaComment {
        software_version: version.into(),
        test_result: result.into(),
        note: note.into(),
        created: created.into(),
        author: author.into(),
    }
}

#[parameterized(
    jira = { "2025-08-12T16:35:38.514+0300", Some("2025-08-12 16:35:38") },
    rfc3339 = { "2025-08-12T16:35:38Z", Some("2025-08-12 16:35:38") },
    rfc3339_offset = { "2025-08-12T16:35:38+02:00", Some("2025-08-12 16:35:38") },
    no_millis = { "2025-08-12T16:35:38+0300", Some("2025-08-12 16:35:38") },
    garbage = { "yesterday", None },
    empty = { "", None },
)]
fn timestamps(raw: &str, expected: Option<&str>) {
    assert_eq!(format_timestamp(raw).as_deref(), expected);
}

#[test]
fn display_timestamp_falls_back_to_raw() {
    assert_eq!(display_timestamp("sometime"), "sometime");
}

#[test]
fn issue_text_layout() {
    let issue = Issue {
        key: "PRJ-1".into(),
        summary: "Login fails".into(),
        assignee: Some("dev@example.com".into()),
        qa_owner: Some("qa@example.com".into()),
        comments: vec![record(
            "v1.2.3",
            "Fixed",
            "works",
            "2025-08-12T16:35:38.514+0300",
            "qa@example.com",
        )],
    };
    assert_eq!(
        format_issue(&issue, false),
        "PRJ-1: Login fails\n\
         Assigned: dev@example.com\n\
         QA Owner: qa@example.com\n\
         Found 1 QA comments:\n\
         \n\
         Comment #1 (2025-08-12 16:35:38) from qa@example.com:\n  \
         Version: v1.2.3\n  \
         Result: Fixed\n  \
         Comment: works\n"
    );
}

#[test]
fn issue_without_summary_or_people() {
    let issue = Issue {
        key: "PRJ-2".into(),
        ..Issue::default()
    };
    assert_eq!(format_issue(&issue, false), "PRJ-2\nFound 0 QA comments:\n");
}

#[parameterized(
    both = { "2025-08-12T16:35:38Z", "qa@x", "Comment #3 (2025-08-12 16:35:38) from qa@x:" },
    no_author = { "2025-08-12T16:35:38Z", "", "Comment #3 (2025-08-12 16:35:38):" },
    bad_time = { "soon", "qa@x", "Comment #3 from qa@x:" },
    neither = { "", "", "Comment #3:" },
)]
fn comment_headers(created: &str, author: &str, expected: &str) {
    let comment = record("", "Fixed", "", created, author);
    assert_eq!(comment_header(3, &comment), expected);
}

#[test]
fn colored_result_line() {
    let issue = Issue {
        key: "PRJ-1".into(),
        comments: vec![record("v1", "Not Fixed", "", "", "")],
        ..Issue::default()
    };
    assert!(format_issue(&issue, true).contains("\x1b[31m  Result: Not Fixed\x1b[0m"));
}

#[test]
fn last_comment_layout() {
    let comment = record("v2.0", "Fixed", "ok now", "2025-08-12T16:35:38Z", "qa@x");
    assert_eq!(
        format_last_comment("PRJ-1", Some(&comment), false),
        "Last QA comment on PRJ-1 by qa@x (2025-08-12 16:35:38)\n\
         Version: v2.0\n\
         Result: Fixed\n\
         Comment: ok now\n"
    );
}

#[test]
fn last_comment_minimal() {
    let comment = record("", "Could not test", "", "", "");
    assert_eq!(
        format_last_comment("PRJ-1", Some(&comment), false),
        "Last QA comment on PRJ-1\nResult: Could not test\n"
    );
}

#[test]
fn last_comment_missing() {
    assert_eq!(
        format_last_comment("PRJ-1", None, false),
        "Last QA comment for PRJ-1:\nNo QA comments found\n"
    );
}
