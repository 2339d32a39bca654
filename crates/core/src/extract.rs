// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field extraction from normalized QA comment text.
//!
//! Extraction is a small program: an ordered list of [`Rule`]s run one after
//! another over the same text. Pattern rules stop at the first pattern that
//! captures. Result fallbacks only run while the result is still empty, and
//! the program ends by canonicalizing whatever result was found.

use regex::Regex;
use std::sync::LazyLock;

use crate::comment::QaComment;
use crate::config::{ParsingConfig, COULD_NOT_TEST};
use crate::error::{Error, Result};
use crate::result::ResultTable;

/// Phrase that makes the tester's statement about the build authoritative.
const COULD_NOT_TEST_ON_BUILD: &str = "could not test on sw";

/// Weaker form of the above, used as a result fallback only.
const COULD_NOT_TEST_PHRASE: &str = "could not test";

static COULD_NOT_TEST_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)could not test on sw (v?[\d.]+(?:-[\w.]+)?)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Last-resort result keywords, compound phrases before the words they contain.
const RESULT_KEYWORDS: &[&str] = &[
    "not fixed",
    "partially fixed",
    "fixed",
    "passed",
    "failed",
    "could not test",
    "verified",
    "resolved",
    "blocked",
    "pending",
];

/// One step of the extraction program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// First capture of the version patterns.
    Version,
    /// "could not test on SW vX": overrides the version, sets the result.
    CouldNotTestOnBuild,
    /// First capture of the result patterns, canonicalized.
    Result,
    /// First capture of the note patterns, trimmed.
    Note,
    /// "could not test" anywhere in the text.
    CouldNotTestPhrase,
    /// Longest normalization table key found in the text.
    TableScan,
    /// Fixed keyword list, see [`RESULT_KEYWORDS`].
    Keywords,
    /// Map the final result through the normalization table.
    Canonicalize,
}

/// The extraction program run by [`Extractor::extract`].
pub const PROGRAM: &[Rule] = &[
    Rule::Version,
    Rule::CouldNotTestOnBuild,
    Rule::Result,
    Rule::Note,
    Rule::CouldNotTestPhrase,
    Rule::TableScan,
    Rule::Keywords,
    Rule::Canonicalize,
];

/// Ordered patterns for one field; the first one that captures wins.
#[derive(Debug, Clone)]
struct PatternList {
    patterns: Vec<Regex>,
}

impl PatternList {
    fn compile(field: &'static str, raw: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(raw.len());
        for pattern in raw {
            let re = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
                field,
                pattern: pattern.clone(),
                source: Box::new(e),
            })?;
            // captures_len counts the implicit whole-match group
            if re.captures_len() < 2 {
                return Err(Error::MissingCaptureGroup {
                    field,
                    pattern: pattern.clone(),
                });
            }
            patterns.push(re);
        }
        Ok(PatternList { patterns })
    }

    fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.patterns
            .iter()
            .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
            .map(|m| m.as_str())
    }
}

/// Text under extraction, with its lower-cased form computed once.
struct Scan<'t> {
    text: &'t str,
    lower: String,
}

/// Compiled extraction rules for one parsing configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    versions: PatternList,
    results: PatternList,
    notes: PatternList,
    table: ResultTable,
}

impl Extractor {
    /// Compile the pattern lists of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for a pattern that is not a valid
    /// regex and [`Error::MissingCaptureGroup`] for one without a group.
    pub fn new(config: &ParsingConfig) -> Result<Self> {
        Ok(Extractor {
            versions: PatternList::compile("version", &config.version_patterns)?,
            results: PatternList::compile("result", &config.result_patterns)?,
            notes: PatternList::compile("note", &config.note_patterns)?,
            table: ResultTable::new(&config.result_normalization),
        })
    }

    /// The normalization table used by the result rules.
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// Extract version, result and note from markup-free text.
    ///
    /// `created` and `author` are left empty for the caller to fill in.
    pub fn extract(&self, normalized: &str) -> QaComment {
        self.run(PROGRAM, normalized)
    }

    /// Run an arbitrary rule sequence; [`extract`](Self::extract) runs [`PROGRAM`].
    pub fn run(&self, program: &[Rule], normalized: &str) -> QaComment {
        let scan = Scan {
            text: normalized,
            lower: normalized.to_lowercase(),
        };
        let mut record = QaComment::default();
        for rule in program {
            if self.apply(*rule, &scan, &mut record) {
                tracing::trace!(?rule, "extraction rule applied");
            }
        }
        record
    }

    /// Apply one rule, returning whether it changed the record.
    fn apply(&self, rule: Rule, scan: &Scan<'_>, record: &mut QaComment) -> bool {
        match rule {
            Rule::Version => match self.versions.first_capture(scan.text) {
                Some(version) => {
                    record.software_version = version.to_string();
                    true
                }
                None => false,
            },
            Rule::CouldNotTestOnBuild => {
                if !scan.lower.contains(COULD_NOT_TEST_ON_BUILD) {
                    return false;
                }
                if let Some(version) = COULD_NOT_TEST_VERSION_RE
                    .captures(scan.text)
                    .and_then(|caps| caps.get(1))
                {
                    record.software_version = version.as_str().to_string();
                }
                record.test_result = COULD_NOT_TEST.to_string();
                true
            }
            Rule::Result => {
                if !record.test_result.is_empty() {
                    return false;
                }
                match self.results.first_capture(scan.text) {
                    Some(raw) => {
                        record.test_result = self.table.canonicalize(raw.trim());
                        true
                    }
                    None => false,
                }
            }
            Rule::Note => match self.notes.first_capture(scan.text) {
                Some(note) => {
                    record.note = note.trim().to_string();
                    true
                }
                None => false,
            },
            Rule::CouldNotTestPhrase => {
                if !record.test_result.is_empty() || !scan.lower.contains(COULD_NOT_TEST_PHRASE) {
                    return false;
                }
                record.test_result = COULD_NOT_TEST.to_string();
                true
            }
            Rule::TableScan => {
                if !record.test_result.is_empty() {
                    return false;
                }
                match self.table.scan(&scan.lower) {
                    Some(canonical) => {
                        record.test_result = canonical.to_string();
                        true
                    }
                    None => false,
                }
            }
            Rule::Keywords => {
                if !record.test_result.is_empty() {
                    return false;
                }
                match RESULT_KEYWORDS
                    .iter()
                    .find(|keyword| scan.lower.contains(*keyword))
                {
                    Some(keyword) => {
                        record.test_result = keyword.to_string();
                        true
                    }
                    None => false,
                }
            }
            Rule::Canonicalize => {
                if record.test_result.is_empty() {
                    return false;
                }
                let canonical = self.table.canonicalize(&record.test_result);
                if canonical == record.test_result {
                    return false;
                }
                record.test_result = canonical;
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
