// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `parse`: all QA comments of one ticket.

use jq_core::{CommentService, Issue, TicketSource};
use std::path::Path;

use crate::cli::{FilterArgs, OutputFormat};
use crate::display;
use crate::error::Result;
use crate::filter::CommentFilter;

use super::{open_service, print_json, use_color};

pub fn run(config_path: Option<&Path>, key: &str, filter: &FilterArgs, output: OutputFormat) -> Result<()> {
    let filter = filter.to_filter()?;
    let service = open_service(config_path)?;
    let issue = issue(&service, key, &filter)?;

    match output {
        OutputFormat::Json => print_json(&issue),
        OutputFormat::Text => {
            print!("{}", display::format_issue(&issue, use_color(output)));
            Ok(())
        }
    }
}

/// Parse one ticket and drop the records outside `filter`.
pub fn issue<S: TicketSource>(
    service: &CommentService<S>,
    key: &str,
    filter: &CommentFilter,
) -> Result<Issue> {
    let mut issue = service.parse_issue(key)?;
    filter.apply(&mut issue);
    Ok(issue)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
