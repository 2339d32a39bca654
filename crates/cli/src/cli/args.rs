// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by the commands that
//! take the same filters or ticket sources.

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

use crate::error::Result;
use crate::filter::{parse_date, CommentFilter};

/// Result and date filters applied after extraction.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Keep only comments with this test result (e.g. "Fixed", "Not Fixed")
    #[arg(long, short = 'r')]
    pub result: Option<String>,

    /// Keep only comments created on or after this date (YYYY-MM-DD)
    #[arg(long, short = 'd', value_name = "DATE", value_parser = parse_date)]
    pub date_from: Option<NaiveDate>,

    /// Keep only comments created on or before this date (YYYY-MM-DD)
    #[arg(long, short = 't', value_name = "DATE", value_parser = parse_date)]
    pub date_to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<CommentFilter> {
        CommentFilter::new(self.result.clone(), self.date_from, self.date_to)
    }
}

/// Ticket keys from the command line or a tickets file.
#[derive(Args, Clone, Debug, Default)]
pub struct TicketArgs {
    /// Ticket keys; read from the tickets file when omitted
    pub keys: Vec<String>,

    /// YAML or TOML file listing tickets [default: ./configs/tickets.yaml]
    #[arg(long, short = 'f', value_name = "FILE")]
    pub tickets_file: Option<PathBuf>,
}
