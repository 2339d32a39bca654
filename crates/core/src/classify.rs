// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! QA comment detection.
//!
//! An indicator is either a literal phrase ("tested on") or, when it contains
//! the `.*` wildcard, a case-insensitive regex ("test.*result"). Wildcard
//! indicators are also tried with every space widened to `.*`, so
//! "qa .*passed" still matches "QA smoke run: all cases passed".

use regex::Regex;

use crate::error::{Error, Result};

/// Marks an indicator as a pattern rather than a literal phrase.
const WILDCARD: &str = ".*";

#[derive(Debug, Clone)]
struct Indicator {
    literal: String,
    patterns: Vec<Regex>,
}

impl Indicator {
    fn compile(raw: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        if raw.contains(WILDCARD) {
            patterns.push(compile_indicator(raw, raw)?);
            if raw.contains(' ') {
                patterns.push(compile_indicator(raw, &raw.replace(' ', WILDCARD))?);
            }
        }
        Ok(Indicator {
            literal: raw.to_lowercase(),
            patterns,
        })
    }

    fn matches(&self, normalized: &str, lowered: &str) -> bool {
        lowered.contains(&self.literal) || self.patterns.iter().any(|re| re.is_match(normalized))
    }
}

fn compile_indicator(raw: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("(?is){}", pattern)).map_err(|e| Error::InvalidPattern {
        field: "qa indicator",
        pattern: raw.to_string(),
        source: Box::new(e),
    })
}

/// Recall-biased QA comment classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    indicators: Vec<Indicator>,
}

impl Classifier {
    /// Compile the configured indicators. Blank indicators are ignored, since
    /// an empty phrase would match every comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for a wildcard indicator that is not a
    /// valid regex.
    pub fn new(indicators: &[String]) -> Result<Self> {
        let indicators = indicators
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| Indicator::compile(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Classifier { indicators })
    }

    /// True when any indicator matches the markup-free comment text.
    pub fn is_qa_comment(&self, normalized: &str) -> bool {
        let lowered = normalized.to_lowercase();
        self.indicators
            .iter()
            .any(|indicator| indicator.matches(normalized, &lowered))
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
