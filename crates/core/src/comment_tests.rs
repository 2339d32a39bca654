// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn comment(version: &str, result: &str, note: &str) -> QaComment {
    QaComment {
        software_version: version.into(),
        test_result: result.into(),
        note: note.into(),
        created: "2025-08-12T16:35:38.514+0300".into(),
        author: "qa@example.com".into(),
    }
}

#[parameterized(
    all_empty = { "", "", "", false },
    version_only = { "v1.0", "", "", true },
    result_only = { "", "Fixed", "", true },
    note_only = { "", "", "looks fine", true },
    everything = { "v1.0", "Fixed", "ok", true },
)]
fn has_content(version: &str, result: &str, note: &str, expected: bool) {
    assert_eq!(comment(version, result, note).has_content(), expected);
}

#[test]
fn metadata_alone_is_not_content() {
    let record = QaComment {
        created: "2025-01-01T00:00:00Z".into(),
        author: "someone".into(),
        ..Default::default()
    };
    assert!(!record.has_content());
}

#[test]
fn issue_json_omits_missing_people() {
    let issue = Issue {
        key: "PRJ-1".into(),
        summary: String::new(),
        assignee: None,
        qa_owner: None,
        comments: vec![comment("v1.0", "Fixed", "")],
    };
    let json = serde_json::to_value(&issue).unwrap();
    assert!(json.get("assignee").is_none());
    assert!(json.get("qa_owner").is_none());
    assert_eq!(json["comments"][0]["test_result"], "Fixed");
}

#[test]
fn issue_json_roundtrips_people() {
    let issue = Issue {
        key: "PRJ-2".into(),
        summary: "Login fails".into(),
        assignee: Some("dev@example.com".into()),
        qa_owner: Some("qa@example.com".into()),
        comments: Vec::new(),
    };
    let json = serde_json::to_string(&issue).unwrap();
    let back: Issue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, issue);
}
