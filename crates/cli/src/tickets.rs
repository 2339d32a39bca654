// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket list files.
//!
//! A tickets file lists keys under `tickets`. `.toml` files are read as TOML,
//! anything else as YAML:
//!
//! ```yaml
//! tickets:
//!   - PRJ-101
//!   - PRJ-102
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Tickets file used when neither keys nor `--tickets-file` are given.
pub const DEFAULT_TICKETS_FILE: &str = "configs/tickets.yaml";

#[derive(Debug, Default, Deserialize)]
struct TicketsFile {
    #[serde(default)]
    tickets: Vec<String>,
}

/// Read the ticket keys from a tickets file, dropping blank entries.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read tickets file {}: {}", path.display(), e)))?;
    let file: TicketsFile = if is_toml(path) {
        toml::from_str(&content)?
    } else if content.trim().is_empty() {
        TicketsFile::default()
    } else {
        serde_yml::from_str(&content)?
    };
    Ok(file
        .tickets
        .into_iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect())
}

/// Keys given on the command line win; otherwise they come from the tickets
/// file (or the default one). An empty result is an error.
pub fn resolve(keys: Vec<String>, tickets_file: Option<&Path>) -> Result<Vec<String>> {
    let keys = if keys.is_empty() {
        let path = tickets_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TICKETS_FILE));
        tracing::debug!(path = %path.display(), "reading tickets file");
        load(&path)?
    } else {
        keys
    };

    if keys.is_empty() {
        return Err(Error::NoTickets);
    }
    Ok(keys)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
