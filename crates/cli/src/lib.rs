// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jqrs - QA comment extraction for Jira tickets.
//!
//! This crate provides the `jira-qa` CLI on top of [`jq_core`]:
//!
//! - [`config`] - TOML configuration with Jira credentials and parsing rules
//! - [`jira`] - Jira REST client implementing [`jq_core::TicketSource`]
//! - [`tickets`] - YAML/TOML ticket lists
//! - [`filter`] - result and date filters applied after extraction
//! - [`display`] and [`html`] - text and HTML renderings of parsed tickets
//!
//! # Example
//!
//! ```rust,ignore
//! use jqrs::{config::Config, jira::JiraClient};
//! use jq_core::{CommentService, QaParser};
//!
//! let config = Config::require(None)?;
//! let client = JiraClient::connect(&config.credentials()?)?;
//! let service = CommentService::new(client, QaParser::new(&config.parsing)?);
//! let issue = service.parse_issue("PRJ-123")?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod display;
pub mod env;
pub mod error;
pub mod filter;
pub mod help;
pub mod html;
pub mod jira;
pub mod logging;
pub mod tickets;

pub use cli::{
    Cli, Command, ConfigCommand, DocsFormat, ExportFormat, FilterArgs, OutputFormat, SchemaCommand, TicketArgs,
};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Parse {
            key,
            filter,
            output,
        } => commands::parse::run(config_path, &key, &filter, output),
        Command::ParseMultiple {
            tickets,
            filter,
            output,
        } => commands::multiple::run(config_path, tickets, &filter, output),
        Command::LastComment { tickets, output } => {
            commands::last_comment::run(config_path, tickets, output)
        }
        Command::Export {
            tickets,
            format,
            pretty,
            output_dir,
        } => commands::export::run(config_path, tickets, format, pretty, &output_dir),
        Command::Extract { file, output } => {
            commands::extract::run(config_path, file.as_deref(), output)
        }
        Command::Config(cmd) => match cmd {
            ConfigCommand::Parsing => commands::config::parsing(config_path),
            ConfigCommand::Path => commands::config::path(config_path),
        },
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Docs { format, output } => commands::docs::run(format, &output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jira-qa", &mut std::io::stdout());
            Ok(())
        }
    }
}
