// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `export`: write QA comments of several tickets to a timestamped file.

use chrono::{Local, NaiveDateTime};
use jq_core::IssuesList;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{ExportFormat, TicketArgs};
use crate::error::Result;
use crate::filter::CommentFilter;
use crate::html;
use crate::tickets;

use super::open_service;

/// Base name when tickets come from the command line.
const DEFAULT_BASE_NAME: &str = "export";

const STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub fn run(
    config_path: Option<&Path>,
    tickets: TicketArgs,
    format: ExportFormat,
    pretty: bool,
    output_dir: &Path,
) -> Result<()> {
    let base = base_name(tickets.tickets_file.as_deref());
    let keys = tickets::resolve(tickets.keys, tickets.tickets_file.as_deref())?;
    let service = open_service(config_path)?;
    let list = super::multiple::issues(&service, &keys, &CommentFilter::default());

    let path = write(&list, output_dir, &base, format, pretty, Local::now().naive_local())?;
    println!("Exported results to {}", path.display());
    Ok(())
}

/// The tickets file stem, or `export`.
pub fn base_name(tickets_file: Option<&Path>) -> String {
    tickets_file
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_BASE_NAME)
        .to_string()
}

/// `<dir>/<base>_<YYYY-MM-DD_HH-MM-SS>.<ext>`
pub fn file_path(dir: &Path, base: &str, format: ExportFormat, at: NaiveDateTime) -> PathBuf {
    dir.join(format!(
        "{base}_{}.{}",
        at.format(STAMP_FORMAT),
        format.extension()
    ))
}

/// Serialized file contents.
pub fn render(list: &IssuesList, format: ExportFormat, pretty: bool) -> Result<String> {
    Ok(match format {
        ExportFormat::Html => html::render(list),
        ExportFormat::Json if pretty => serde_json::to_string_pretty(list)?,
        ExportFormat::Json => serde_json::to_string(list)?,
    })
}

/// Create `dir` if needed and write the export file into it.
pub fn write(
    list: &IssuesList,
    dir: &Path,
    base: &str,
    format: ExportFormat,
    pretty: bool,
    at: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = file_path(dir, base, format, at);
    fs::write(&path, render(list, format, pretty)?)?;
    tracing::info!(path = %path.display(), issues = list.issues.len(), "export written");
    Ok(path)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
