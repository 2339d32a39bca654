// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod docs;
pub mod export;
pub mod extract;
pub mod last_comment;
pub mod multiple;
pub mod parse;
pub mod schema;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::Path;

use jq_core::{CommentService, QaParser};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::jira::JiraClient;

/// Compile the parsing rules and connect to Jira.
///
/// The rules are compiled first so a bad pattern is reported without a
/// network round trip.
pub fn open_service(config_path: Option<&Path>) -> Result<CommentService<JiraClient>> {
    let config = Config::require(config_path)?;
    let parser = QaParser::new(&config.parsing)?;
    let credentials = config.credentials()?;
    let client = JiraClient::connect(&credentials)?;
    Ok(CommentService::new(client, parser))
}

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// True when text output should be colored.
pub fn use_color(output: OutputFormat) -> bool {
    output == OutputFormat::Text && crate::colors::should_colorize()
}
