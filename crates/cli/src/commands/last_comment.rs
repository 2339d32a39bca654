// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `last-comment`: the most recent QA record of each ticket.

use jq_core::{CommentService, QaComment, TicketSource};
use schemars::JsonSchema;
use serde::Serialize;
use std::path::Path;

use crate::cli::{OutputFormat, TicketArgs};
use crate::display;
use crate::error::Result;
use crate::tickets;

use super::{open_service, print_json, use_color};

/// JSON entry for one ticket.
#[derive(Debug, Serialize, JsonSchema)]
pub struct LastCommentJson {
    /// Ticket key.
    pub key: String,
    /// Most recent QA record; absent when the ticket has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<QaComment>,
    /// Why the ticket could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(config_path: Option<&Path>, tickets: TicketArgs, output: OutputFormat) -> Result<()> {
    let keys = tickets::resolve(tickets.keys, tickets.tickets_file.as_deref())?;
    let service = open_service(config_path)?;
    let entries = entries(&service, &keys);

    match output {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            for entry in &entries {
                if let Some(error) = &entry.error {
                    eprintln!("warning: failed to get last comment for {}: {}", entry.key, error);
                }
            }
            print!("{}", format_entries(&entries, use_color(output)));
            Ok(())
        }
    }
}

/// One entry per key, in order. A ticket that fails is recorded with its
/// error and the remaining tickets are still processed.
pub fn entries<S: TicketSource>(service: &CommentService<S>, keys: &[String]) -> Vec<LastCommentJson> {
    keys.iter()
        .map(|key| match service.last_comment(key) {
            Ok(comment) => LastCommentJson {
                key: key.clone(),
                comment,
                error: None,
            },
            Err(e) => {
                tracing::warn!(key = %key, "failed to get last comment: {}", e);
                LastCommentJson {
                    key: key.clone(),
                    comment: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

/// Text blocks for the readable entries, each followed by a separator.
pub fn format_entries(entries: &[LastCommentJson], color: bool) -> String {
    entries
        .iter()
        .filter(|entry| entry.error.is_none())
        .map(|entry| {
            format!(
                "{}{}\n",
                display::format_last_comment(&entry.key, entry.comment.as_ref(), color),
                display::TICKET_SEPARATOR
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "last_comment_tests.rs"]
mod tests;
