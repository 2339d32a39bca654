// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types for the Jira REST API v2.

use jq_core::SourceComment;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

use super::adf;

/// A Jira user as embedded in comments and issues.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl JiraUser {
    /// Email address, else display name, else login name.
    pub fn identity(&self) -> String {
        [&self.email_address, &self.display_name, &self.name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

/// One comment from `/issue/{key}/comment`.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraComment {
    /// Wiki markup string, or an ADF document on instances that return one.
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub author: Option<JiraUser>,
    #[serde(default)]
    pub created: String,
    #[serde(skip)]
    author_identity: String,
}

impl JiraComment {
    /// Resolve the author identity once after deserializing.
    pub(crate) fn resolved(mut self) -> Self {
        self.author_identity = self
            .author
            .as_ref()
            .map(JiraUser::identity)
            .unwrap_or_default();
        self
    }
}

impl SourceComment for JiraComment {
    fn body(&self) -> jq_core::Result<Cow<'_, str>> {
        match &self.body {
            Value::String(text) => Ok(Cow::Borrowed(text)),
            Value::Null => Ok(Cow::Borrowed("")),
            doc if adf::is_document(doc) => Ok(Cow::Owned(adf::to_text(doc))),
            other => Err(jq_core::Error::UnreadableBody(format!(
                "unsupported body of type {}",
                value_kind(other)
            ))),
        }
    }

    fn author(&self) -> &str {
        &self.author_identity
    }

    fn created(&self) -> &str {
        &self.created
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A page of `/issue/{key}/comment`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default)]
    pub start_at: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub comments: Vec<JiraComment>,
}

impl CommentPage {
    /// Offset of the next page, or `None` when this page is the last.
    pub fn next_start(&self) -> Option<usize> {
        let next = self.start_at + self.comments.len();
        (!self.comments.is_empty() && next < self.total).then_some(next)
    }
}

/// `/issue/{key}?fields=summary,assignee`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueResponse {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
