// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `extract`: run the parser over one comment body without Jira.

use jq_core::{normalize, QaComment, QaParser};
use schemars::JsonSchema;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::error::Result;

use super::{print_json, use_color};

/// What the parser made of one body.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ExtractReport {
    /// Body after wiki markup removal.
    pub normalized: String,
    /// Whether the body reads as a QA comment.
    pub is_qa_comment: bool,
    /// Extracted record; absent when not a QA comment or nothing was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<QaComment>,
}

pub fn run(config_path: Option<&Path>, file: Option<&Path>, output: OutputFormat) -> Result<()> {
    let config = Config::discover_or_default(config_path)?;
    let parser = QaParser::new(&config.parsing)?;
    let body = read_body(file)?;
    let report = report(&parser, &body);

    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print!("{}", format_report(&report, use_color(output)));
            Ok(())
        }
    }
}

fn read_body(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

pub fn report(parser: &QaParser, body: &str) -> ExtractReport {
    let normalized = normalize(body);
    let is_qa_comment = parser.is_qa_comment(&normalized);
    let record = if is_qa_comment {
        Some(parser.extractor().extract(&normalized)).filter(QaComment::has_content)
    } else {
        None
    };
    ExtractReport {
        normalized,
        is_qa_comment,
        record,
    }
}

pub fn format_report(report: &ExtractReport, color: bool) -> String {
    if !report.is_qa_comment {
        return "Not a QA comment\n".to_string();
    }
    match &report.record {
        None => "QA comment without extractable fields\n".to_string(),
        Some(record) => {
            let mut out = format!("QA comment\nVersion: {}\n", record.software_version);
            out.push_str(&colors::result(
                &format!("Result: {}", record.test_result),
                &record.test_result,
                color,
            ));
            out.push('\n');
            if !record.note.is_empty() {
                out.push_str(&format!("Comment: {}\n", record.note));
            }
            out
        }
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
