// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-extraction filters on QA records.

use chrono::NaiveDate;
use jq_core::{Issue, QaComment};

use crate::display::parse_timestamp;
use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` command-line date.
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{s}': expected YYYY-MM-DD"))
}

/// Result and creation-date constraints. Empty constraints keep everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    result: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl CommentFilter {
    /// Build a filter; both date bounds are inclusive calendar days.
    pub fn new(result: Option<String>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(Error::InvalidDate {
                    reason: format!("--date-from {from} is after --date-to {to}"),
                });
            }
        }
        Ok(CommentFilter {
            result: result.filter(|r| !r.is_empty()),
            from,
            to,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_none() && self.from.is_none() && self.to.is_none()
    }

    /// True if the record passes every constraint.
    ///
    /// A record whose timestamp cannot be parsed passes the date bounds.
    pub fn matches(&self, comment: &QaComment) -> bool {
        if let Some(result) = &self.result {
            if comment.test_result != *result {
                return false;
            }
        }
        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        let Some(created) = parse_timestamp(&comment.created) else {
            tracing::warn!(created = %comment.created, "could not parse comment date, keeping it");
            return true;
        };
        let day = created.date_naive();
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    /// Drop the records of `issue` that do not match.
    pub fn apply(&self, issue: &mut Issue) {
        if self.is_empty() {
            return;
        }
        issue.comments.retain(|comment| self.matches(comment));
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
