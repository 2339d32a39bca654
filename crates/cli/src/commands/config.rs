// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `config`: inspect the effective configuration.

use jq_core::QaParser;
use std::path::Path;

use crate::config::{self, Config};
use crate::error::Result;

/// Print the parsing rules as TOML after checking that they compile.
pub fn parsing(config_path: Option<&Path>) -> Result<()> {
    print!("{}", parsing_toml(config_path)?);
    Ok(())
}

pub fn parsing_toml(config_path: Option<&Path>) -> Result<String> {
    let config = Config::discover_or_default(config_path)?;
    QaParser::new(&config.parsing)?;
    Ok(toml::to_string_pretty(&config.parsing)?)
}

/// Print the config file that would be used.
pub fn path(config_path: Option<&Path>) -> Result<()> {
    match config::locate(config_path) {
        Some(path) => println!("{}", path.display()),
        None => println!("(none; built-in parsing rules)"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
