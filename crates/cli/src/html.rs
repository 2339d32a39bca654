// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-contained HTML report of QA records.
//!
//! One file, inline CSS, no scripts. All ticket text is escaped.

use jq_core::{Issue, IssuesList, QaComment};

use crate::colors::ResultTone;
use crate::display::display_timestamp;

const TITLE: &str = "QA Comments Report";

const INLINE_CSS: &str = "\
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 20px; background-color: #f9f9f9; }
.container { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
h1 { color: #333; border-bottom: 2px solid #007acc; padding-bottom: 10px; }
.issue { border: 1px solid #ddd; margin: 20px 0; padding: 20px; border-radius: 8px; }
.issue-key { font-weight: bold; font-size: 1.4em; color: #007acc; margin-bottom: 10px; }
.issue-summary { color: #666; margin: 10px 0; font-style: italic; }
.issue-info { display: flex; gap: 20px; margin: 10px 0; color: #555; }
.comment { margin: 15px 0; padding: 15px; background-color: #f9f9f9; border-left: 4px solid #007acc; border-radius: 0 4px 4px 0; }
.comment-header { font-weight: bold; margin-bottom: 8px; color: #333; }
.comment-field { display: flex; margin-bottom: 8px; }
.comment-label { font-weight: bold; color: #555; min-width: 80px; }
.comment-value { color: #333; flex: 1; white-space: pre-wrap; }
.result-fixed { color: green; }
.result-not-fixed { color: red; }
.result-partially-fixed { color: orange; }
.result-could-not-test { color: blue; }
";

/// Escape text for use in HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the whole report.
pub fn render(list: &IssuesList) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(INLINE_CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str(&format!("<h1>{TITLE}</h1>\n"));

    for issue in &list.issues {
        render_issue(&mut html, issue);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_issue(html: &mut String, issue: &Issue) {
    html.push_str("<div class=\"issue\">\n");
    html.push_str(&format!("<div class=\"issue-key\">{}</div>\n", escape(&issue.key)));
    if !issue.summary.is_empty() {
        html.push_str(&format!(
            "<div class=\"issue-summary\">{}</div>\n",
            escape(&issue.summary)
        ));
    }

    if issue.assignee.is_some() || issue.qa_owner.is_some() {
        html.push_str("<div class=\"issue-info\">");
        if let Some(assignee) = &issue.assignee {
            html.push_str(&format!("<div><strong>Assigned:</strong> {}</div>", escape(assignee)));
        }
        if let Some(owner) = &issue.qa_owner {
            html.push_str(&format!("<div><strong>QA Owner:</strong> {}</div>", escape(owner)));
        }
        html.push_str("</div>\n");
    }

    html.push_str(&format!(
        "<div><strong>Found {} QA comments:</strong></div>\n",
        issue.comments.len()
    ));
    for (i, comment) in issue.comments.iter().enumerate() {
        render_comment(html, i + 1, comment);
    }
    html.push_str("</div>\n");
}

fn render_comment(html: &mut String, number: usize, comment: &QaComment) {
    let mut header = format!("Comment #{number}");
    if !comment.created.is_empty() {
        header.push_str(&format!(" ({})", display_timestamp(&comment.created)));
    }
    if !comment.author.is_empty() {
        header.push_str(&format!(" from {}", comment.author));
    }

    html.push_str("<div class=\"comment\">\n");
    html.push_str(&format!("<div class=\"comment-header\">{}</div>\n", escape(&header)));
    field(html, "Version", &comment.software_version, None);
    field(
        html,
        "Result",
        &comment.test_result,
        ResultTone::of(&comment.test_result).map(ResultTone::css_class),
    );
    if !comment.note.is_empty() {
        field(html, "Note", &comment.note, None);
    }
    html.push_str("</div>\n");
}

fn field(html: &mut String, label: &str, value: &str, class: Option<&str>) {
    let class = match class {
        Some(extra) => format!("comment-value {extra}"),
        None => "comment-value".to_string(),
    };
    html.push_str(&format!(
        "<div class=\"comment-field\"><span class=\"comment-label\">{label}:</span><span class=\"{class}\">{}</span></div>\n",
        escape(value)
    ));
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
