// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn to_json(cmd: SchemaCommand) -> serde_json::Value {
    serde_json::to_value(schema(cmd)).unwrap()
}

#[parameterized(
    export = { SchemaCommand::Export, "IssuesList" },
    issue = { SchemaCommand::Issue, "Issue" },
)]
fn titles(cmd: SchemaCommand, title: &str) {
    assert_eq!(to_json(cmd)["title"], title);
}

#[test]
fn issue_schema_requires_core_fields() {
    let json = to_json(SchemaCommand::Issue);
    let required: Vec<&str> = json["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(required.contains(&"key"));
    assert!(required.contains(&"comments"));
    assert!(!required.contains(&"assignee"));
}

#[test]
fn export_schema_defines_comment() {
    let json = to_json(SchemaCommand::Export);
    let comment = &json["definitions"]["QaComment"]["properties"];
    for field in ["software_version", "test_result", "note", "created", "author"] {
        assert!(comment.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn last_comment_schema_is_array() {
    let json = to_json(SchemaCommand::LastComment);
    assert_eq!(json["type"], "array");
}
