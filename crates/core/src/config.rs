// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing configuration: pattern lists, QA indicators and the result
//! normalization table.
//!
//! A [`ParsingConfig`] is plain data. It is compiled once into a
//! [`QaParser`](crate::QaParser), which validates every pattern up front and
//! never mutates the configuration afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical label for comments stating the build could not be tested.
pub const COULD_NOT_TEST: &str = "Could not test";

/// Pattern lists and lookup table driving comment extraction.
///
/// Every field falls back to its built-in default when omitted from a
/// configuration file, so operators can override a single list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Software version patterns, first captured group wins.
    #[serde(default = "default_version_patterns")]
    pub version_patterns: Vec<String>,
    /// Test result patterns, first captured group wins.
    #[serde(default = "default_result_patterns")]
    pub result_patterns: Vec<String>,
    /// Free-text note patterns, first captured group wins.
    #[serde(default = "default_note_patterns", alias = "comment_patterns")]
    pub note_patterns: Vec<String>,
    /// Substrings (or `.*` wildcard patterns) marking a QA comment.
    #[serde(default = "default_qa_indicators")]
    pub qa_indicators: Vec<String>,
    /// Raw result token (matched lower-cased) to canonical label.
    #[serde(default = "default_result_normalization")]
    pub result_normalization: BTreeMap<String, String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            version_patterns: default_version_patterns(),
            result_patterns: default_result_patterns(),
            note_patterns: default_note_patterns(),
            qa_indicators: default_qa_indicators(),
            result_normalization: default_result_normalization(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_version_patterns() -> Vec<String> {
    strings(&[
        r"(?i)Tested on (?:SW )?(v?[\d.]+(?:-[\w.]+)?)",
        r"(?i)version.*?(v?[\d.]+(?:-[\w.]+)?)",
        r"(?i)sw.*?(v?[\d.]+(?:-[\w.]+)?)",
    ])
}

fn default_result_patterns() -> Vec<String> {
    strings(&[
        r"(?i)Result:\s*([^\n\r]+)",
        r"(?i)Status:\s*([^\n\r]+)",
        r"(?i)(Fixed|Not Fixed|Partially Fixed|Could not test|Passed|Failed|Blocked|Resolved|Verified|Re-?Test|Pending|In Progress|N/A)",
    ])
}

fn default_note_patterns() -> Vec<String> {
    strings(&[
        r"(?i)Comment:\s*(.+)",
        r"(?i)Notes?:\s*(.+)",
        r"(?i)Observations?:\s*(.+)",
    ])
}

fn default_qa_indicators() -> Vec<String> {
    strings(&[
        "tested on",
        "could not test on sw",
        "qa comment",
        "qa verification",
        "qa tested",
        "test.*result",
        "test.*passed",
        "test.*failed",
        "test.*status",
    ])
}

fn default_result_normalization() -> BTreeMap<String, String> {
    [
        ("fixed", "Fixed"),
        ("not fixed", "Not Fixed"),
        ("partially fixed", "Partially Fixed"),
        ("could not test", COULD_NOT_TEST),
        ("passed", "Fixed"),
        ("verified", "Fixed"),
        ("resolved", "Fixed"),
        ("re-test", "Fixed"),
        ("retest", "Fixed"),
        ("failed", "Not Fixed"),
        ("blocked", "Not Fixed"),
        ("pending", "Not Fixed"),
        ("in progress", "Not Fixed"),
        ("n/a", "N/A"),
        ("not applicable", "N/A"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
