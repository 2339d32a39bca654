// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Atlassian Document Format flattening.

use serde_json::Value;

/// Node types that end a line.
const BLOCK_NODES: &[&str] = &[
    "paragraph",
    "heading",
    "blockquote",
    "codeBlock",
    "listItem",
    "panel",
    "rule",
    "tableRow",
    "mediaSingle",
    "expand",
];

/// True if `value` is an ADF document root.
pub fn is_document(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some("doc")
}

/// Flatten a document to plain text.
///
/// Text nodes are concatenated, block nodes end a line, `hardBreak` is a
/// newline, and mentions are dropped.
pub fn to_text(doc: &Value) -> String {
    let mut out = String::new();
    write_node(doc, &mut out);
    out.trim().to_string()
}

fn write_node(node: &Value, out: &mut String) {
    let kind = node.get("type").and_then(Value::as_str).unwrap_or_default();
    match kind {
        "text" => {
            if let Some(text) = node.get("text").and_then(Value::as_str) {
                out.push_str(text);
            }
        }
        "hardBreak" => out.push('\n'),
        "mention" => {}
        _ => {
            if let Some(children) = node.get("content").and_then(Value::as_array) {
                for child in children {
                    write_node(child, out);
                }
            }
            if BLOCK_NODES.contains(&kind) && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
#[path = "adf_tests.rs"]
mod tests;
