// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::{FilterArgs, TicketArgs};

/// Output format for commands printing QA records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// File format for `export`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

/// Format for `docs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DocsFormat {
    /// One Markdown reference page
    #[default]
    Markdown,
    /// Plain-text help of every command
    OfflineHelp,
}

impl DocsFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            DocsFormat::Markdown => "jira-qa.md",
            DocsFormat::OfflineHelp => "jira-qa-help.txt",
        }
    }
}

#[derive(Parser)]
#[command(name = "jira-qa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Extract structured QA verification records from Jira ticket comments")]
#[command(
    long_about = "Extract structured QA verification records from Jira ticket comments.\n\n\
    Finds the comments where testers report on a build, pulls out the tested version, \
    the result and any note, and prints or exports them."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Config file [default: $JIRA_QA_CONFIG, ./configs/config.toml, <config dir>/jira-qa/config.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr (JIRA_QA_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse all QA comments of one ticket
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  jira-qa parse PRJ-123                            All QA comments
  jira-qa parse PRJ-123 --result Fixed             Only comments reporting Fixed
  jira-qa parse PRJ-123 -d 2025-01-01 -t 2025-06-30    Comments in a date range
  jira-qa parse PRJ-123 -o json                    Output as JSON")
    )]
    Parse {
        /// Ticket key, e.g. PRJ-123
        key: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Parse QA comments of several tickets
    #[command(after_help = colors::examples("\
Examples:
  jira-qa parse-multiple PRJ-1 PRJ-2              Tickets from arguments
  jira-qa parse-multiple -f ./my-tickets.yaml     Tickets from a file
  jira-qa parse-multiple --result \"Not Fixed\"     Failing records from the default file"))]
    ParseMultiple {
        #[command(flatten)]
        tickets: TicketArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the most recent QA comment of each ticket
    #[command(after_help = colors::examples("\
Examples:
  jira-qa last-comment PRJ-1 PRJ-2              Latest record per ticket
  jira-qa last-comment -f ./my-tickets.yaml     Tickets from a file"))]
    LastComment {
        #[command(flatten)]
        tickets: TicketArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Export QA comments of several tickets to a JSON or HTML file
    #[command(after_help = colors::examples("\
Examples:
  jira-qa export PRJ-1 --pretty                       Pretty JSON into ./QA_comments
  jira-qa export -f ./release.yaml -F html -O ./reports    HTML report for a ticket list"))]
    Export {
        #[command(flatten)]
        tickets: TicketArgs,

        /// File format
        #[arg(long, short = 'F', value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON
        #[arg(long, short = 'p')]
        pretty: bool,

        /// Output directory
        #[arg(long, short = 'O', value_name = "DIR", default_value = "./QA_comments")]
        output_dir: PathBuf,
    },

    /// Run the extractor on one comment body (no Jira access)
    #[command(after_help = colors::examples("\
Examples:
  jira-qa extract comment.txt               Extract from a file
  pbpaste | jira-qa extract -o json         Extract from stdin"))]
    Extract {
        /// File holding the comment body; stdin when omitted or '-'
        file: Option<PathBuf>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  jira-qa schema export    Schema of 'jira-qa export -F json' files
  jira-qa schema issue     Schema of 'jira-qa parse <KEY> -o json'")
    )]
    Schema(SchemaCommand),

    /// Write the command reference to a directory
    #[command(after_help = colors::examples("\
Examples:
  jira-qa docs                           Markdown reference in ./docs
  jira-qa docs -F offline-help -o ./out    Plain-text help of every command"))]
    Docs {
        /// Documentation format
        #[arg(long, short = 'F', value_enum, default_value = "markdown")]
        format: DocsFormat,

        /// Output directory
        #[arg(long, short = 'o', value_name = "DIR", default_value = "./docs")]
        output: PathBuf,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  jira-qa completion bash > ~/.local/share/bash-completion/completions/jira-qa
  jira-qa completion zsh > ~/.zfunc/_jira-qa"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective parsing rules as TOML
    Parsing,
    /// Print which config file would be used
    Path,
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for export files and 'parse-multiple -o json'
    Export,
    /// Output JSON Schema for 'parse <KEY> -o json'
    Issue,
    /// Output JSON Schema for 'last-comment -o json'
    LastComment,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
