// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The QA comment parser: markup removal, classification and extraction
//! compiled from one [`ParsingConfig`].

use crate::classify::Classifier;
use crate::comment::QaComment;
use crate::config::ParsingConfig;
use crate::error::Result;
use crate::extract::Extractor;
use crate::markup;

/// Immutable, compiled parsing session.
///
/// Holds no mutable state, so one parser can be shared by reference across
/// threads parsing independent tickets.
#[derive(Debug, Clone)]
pub struct QaParser {
    classifier: Classifier,
    extractor: Extractor,
}

impl QaParser {
    /// Compile `config`, rejecting invalid patterns before any comment is seen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) or
    /// [`Error::MissingCaptureGroup`](crate::Error::MissingCaptureGroup).
    pub fn new(config: &ParsingConfig) -> Result<Self> {
        Ok(QaParser {
            classifier: Classifier::new(&config.qa_indicators)?,
            extractor: Extractor::new(config)?,
        })
    }

    /// Parser for the built-in default configuration.
    pub fn with_defaults() -> Self {
        match QaParser::new(&ParsingConfig::default()) {
            Ok(parser) => parser,
            Err(_) => unreachable!("built-in parsing config"),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Classify markup-free text.
    pub fn is_qa_comment(&self, normalized: &str) -> bool {
        self.classifier.is_qa_comment(normalized)
    }

    /// Run the whole pipeline over one raw body.
    ///
    /// Returns `None` when the body is not a QA comment or yields no field.
    /// The returned record has empty `created` and `author`.
    pub fn parse(&self, raw_body: &str) -> Option<QaComment> {
        let normalized = markup::normalize(raw_body);
        if !self.classifier.is_qa_comment(&normalized) {
            return None;
        }
        let record = self.extractor.extract(&normalized);
        record.has_content().then_some(record)
    }
}

impl Default for QaParser {
    fn default() -> Self {
        QaParser::with_defaults()
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
