// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket-level operations over a [`TicketSource`].

use crate::comment::{Issue, IssuesList, QaComment};
use crate::error::{Error, Result};
use crate::parser::QaParser;
use crate::source::{TicketInfo, TicketSource};

/// Fetches ticket comments and turns them into QA records.
pub struct CommentService<S> {
    source: S,
    parser: QaParser,
}

impl<S: TicketSource> CommentService<S> {
    pub fn new(source: S, parser: QaParser) -> Self {
        CommentService { source, parser }
    }

    pub fn parser(&self) -> &QaParser {
        &self.parser
    }

    /// All QA records of one ticket plus its summary and people.
    ///
    /// A failing comment fetch is an error. A failing info fetch only costs
    /// the summary and assignee.
    pub fn parse_issue(&self, key: &str) -> Result<Issue> {
        let key = validate_key(key)?;
        tracing::info!(key, "parsing comments");

        let comments = self
            .source
            .comments(key)
            .map_err(|e| Error::ticket_source(key, e))?;
        let records = self.parser.collect_all(&comments);

        let info = self.source.info(key).unwrap_or_else(|e| {
            tracing::warn!(key, "could not get issue info: {}", e);
            TicketInfo {
                key: key.to_string(),
                ..TicketInfo::default()
            }
        });

        let qa_owner = records
            .iter()
            .rev()
            .find(|record| !record.author.is_empty())
            .map(|record| record.author.clone());

        tracing::info!(
            key,
            total = comments.len(),
            qa = records.len(),
            "parsed comments"
        );
        Ok(Issue {
            key: if info.key.is_empty() {
                key.to_string()
            } else {
                info.key
            },
            summary: info.summary,
            assignee: info.assignee,
            qa_owner,
            comments: records,
        })
    }

    /// Parse several tickets in order. A ticket that fails is logged and left
    /// out; the rest are still processed.
    pub fn parse_many<K: AsRef<str>>(&self, keys: &[K]) -> IssuesList {
        let issues = keys
            .iter()
            .filter_map(|key| match self.parse_issue(key.as_ref()) {
                Ok(issue) => Some(issue),
                Err(e) => {
                    tracing::warn!(key = key.as_ref(), "skipping ticket: {}", e);
                    None
                }
            })
            .collect();
        IssuesList { issues }
    }

    /// The most recent QA record of one ticket, if any.
    pub fn last_comment(&self, key: &str) -> Result<Option<QaComment>> {
        let key = validate_key(key)?;
        tracing::info!(key, "getting last QA comment");

        let comments = self
            .source
            .comments(key)
            .map_err(|e| Error::ticket_source(key, e))?;
        let last = self.parser.find_last(&comments);
        match &last {
            Some(record) => tracing::info!(key, result = %record.test_result, "found last QA comment"),
            None => tracing::info!(key, "no QA comment found"),
        }
        Ok(last)
    }
}

fn validate_key(key: &str) -> Result<&str> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::EmptyIssueKey);
    }
    Ok(key)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
