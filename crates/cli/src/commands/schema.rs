// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use jq_core::{Issue, IssuesList};
use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;

use super::last_comment::LastCommentJson;

pub fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Export => schema_for!(IssuesList),
        SchemaCommand::Issue => schema_for!(Issue),
        SchemaCommand::LastComment => schema_for!(Vec<LastCommentJson>),
    }
}

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
