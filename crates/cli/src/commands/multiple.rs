// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `parse-multiple`: QA comments of several tickets.

use jq_core::{CommentService, IssuesList, TicketSource};
use std::path::Path;

use crate::cli::{FilterArgs, OutputFormat, TicketArgs};
use crate::display;
use crate::error::Result;
use crate::filter::CommentFilter;
use crate::tickets;

use super::{open_service, print_json, use_color};

pub fn run(
    config_path: Option<&Path>,
    tickets: TicketArgs,
    filter: &FilterArgs,
    output: OutputFormat,
) -> Result<()> {
    let filter = filter.to_filter()?;
    let keys = tickets::resolve(tickets.keys, tickets.tickets_file.as_deref())?;
    let service = open_service(config_path)?;
    let list = issues(&service, &keys, &filter);

    match output {
        OutputFormat::Json => print_json(&list),
        OutputFormat::Text => {
            print!("{}", format_list(&list, use_color(output)));
            Ok(())
        }
    }
}

/// Parse every ticket, skipping failures, then filter each one.
pub fn issues<S: TicketSource>(
    service: &CommentService<S>,
    keys: &[String],
    filter: &CommentFilter,
) -> IssuesList {
    let mut list = service.parse_many(keys);
    for issue in &mut list.issues {
        filter.apply(issue);
    }
    list
}

/// Issues separated by a blank line.
pub fn format_list(list: &IssuesList, color: bool) -> String {
    list.issues
        .iter()
        .map(|issue| display::format_issue(issue, color))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "multiple_tests.rs"]
mod tests;
