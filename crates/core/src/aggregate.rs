// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comment aggregation over a ticket's comment history.

use crate::comment::QaComment;
use crate::error::Result;
use crate::parser::QaParser;
use crate::source::SourceComment;

impl QaParser {
    /// Run one source comment through the pipeline and attach its metadata.
    ///
    /// `Ok(None)` means the comment is not a QA comment or carries no field.
    ///
    /// # Errors
    ///
    /// Propagates the comment's body error.
    pub fn process<C: SourceComment>(&self, comment: &C) -> Result<Option<QaComment>> {
        let body = comment.body()?;
        Ok(self.parse(&body).map(|mut record| {
            record.created = comment.created().to_string();
            record.author = comment.author().to_string();
            record
        }))
    }

    /// All QA records of a comment history, in original order.
    ///
    /// A comment whose body cannot be read is logged and skipped.
    pub fn collect_all<C: SourceComment>(&self, comments: &[C]) -> Vec<QaComment> {
        comments
            .iter()
            .enumerate()
            .filter_map(|(index, comment)| self.process_or_skip(index, comment))
            .collect()
    }

    /// The most recent QA record, scanning newest to oldest and stopping at
    /// the first comment that yields one.
    pub fn find_last<C: SourceComment>(&self, comments: &[C]) -> Option<QaComment> {
        comments
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, comment)| self.process_or_skip(index, comment))
    }

    fn process_or_skip<C: SourceComment>(&self, index: usize, comment: &C) -> Option<QaComment> {
        match self.process(comment) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    index,
                    author = comment.author(),
                    created = comment.created(),
                    "skipping comment: {}",
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
