// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    plain = { "Fixed", "Fixed" },
    tags = { "<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;" },
    ampersand_first = { "a &lt; b", "a &amp;lt; b" },
    quotes = { "say \"hi\" 'x'", "say &quot;hi&quot; &#39;x&#39;" },
)]
fn escaping(input: &str, expected: &str) {
    assert_eq!(escape(input), expected);
}

fn sample() -> IssuesList {
    IssuesList {
        issues: vec![Issue {
            key: "PRJ-1".into(),
            summary: "Crash on <save>".into(),
            assignee: Some("dev@example.com".into()),
            qa_owner: None,
            comments: vec![
                QaComment {
                    software_version: "v1.0".into(),
                    test_result: "Not Fixed".into(),
                    note: "still <b>broken</b>".into(),
                    created: "2025-08-12T16:35:38.514+0300".into(),
                    author: "qa@example.com".into(),
                },
                QaComment {
                    software_version: "v1.1".into(),
                    test_result: "N/A".into(),
                    ..QaComment::default()
                },
            ],
        }],
    }
}

#[test]
fn report_is_self_contained() {
    let html = render(&sample());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("http"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn report_escapes_ticket_text() {
    let html = render(&sample());
    assert!(html.contains("Crash on &lt;save&gt;"));
    assert!(html.contains("still &lt;b&gt;broken&lt;/b&gt;"));
    assert!(!html.contains("<b>broken"));
}

#[test]
fn report_lists_issue_details() {
    let html = render(&sample());
    assert!(html.contains("<div class=\"issue-key\">PRJ-1</div>"));
    assert!(html.contains("<strong>Assigned:</strong> dev@example.com"));
    assert!(!html.contains("QA Owner:"));
    assert!(html.contains("Found 2 QA comments:"));
    assert!(html.contains("Comment #1 (2025-08-12 16:35:38) from qa@example.com"));
    assert!(html.contains("Comment #2</div>"));
}

#[test]
fn result_class_follows_tone() {
    let html = render(&sample());
    assert!(html.contains("<span class=\"comment-value result-not-fixed\">Not Fixed</span>"));
    assert!(html.contains("<span class=\"comment-value\">N/A</span>"));
}

#[test]
fn note_only_when_present() {
    let html = render(&sample());
    assert_eq!(html.matches("Note:").count(), 1);
}

#[test]
fn empty_list_renders_shell() {
    let html = render(&IssuesList::default());
    assert!(html.contains("<h1>QA Comments Report</h1>"));
    assert!(!html.contains("class=\"issue\""));
}
