// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for the comment pipeline.

#![allow(clippy::unwrap_used)]

use jq_core::{normalize, ParsingConfig, QaParser, ResultTable};
use proptest::prelude::*;

/// Text mixing wiki markup fragments with ordinary words.
fn markup_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("{color:red}".to_string()),
        Just("{color}".to_string()),
        Just("{code:java}".to_string()),
        Just("{code}".to_string()),
        Just("{panel:bgcolor=#fff}".to_string()),
        Just("{panel}".to_string()),
        Just("{quote}".to_string()),
        Just("{noformat}".to_string()),
        Just("{{".to_string()),
        Just("}}".to_string()),
        Just("*".to_string()),
        Just("_".to_string()),
        Just("-".to_string()),
        Just("??".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
        Just("|".to_string()),
        Just("!".to_string()),
        Just("[~".to_string()),
        Just("\n".to_string()),
        Just(" ".to_string()),
        "[a-zA-Z0-9.:]{1,8}",
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

fn parser() -> QaParser {
    QaParser::with_defaults()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in markup_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_never_grows(text in markup_text()) {
        prop_assert!(normalize(&text).len() <= text.len());
    }

    #[test]
    fn normalized_text_is_trimmed(text in markup_text()) {
        let out = normalize(&text);
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn adding_an_indicator_never_declassifies(text in markup_text(), extra in "[a-z]{1,6}") {
        let config = ParsingConfig::default();
        let base = QaParser::new(&config).unwrap();
        let mut wider = config.clone();
        wider.qa_indicators.push(extra);
        let wider = QaParser::new(&wider).unwrap();

        let normalized = normalize(&text);
        if base.is_qa_comment(&normalized) {
            prop_assert!(wider.is_qa_comment(&normalized));
        }
    }

    #[test]
    fn appending_text_never_declassifies(text in markup_text(), tail in "[a-zA-Z0-9 .,:|\n-]{0,40}") {
        let parser = parser();
        let normalized = normalize(&text);
        if parser.is_qa_comment(&normalized) {
            let joined = format!("{normalized}{tail}");
            let spaced = format!("{normalized} {tail}");
            prop_assert!(parser.is_qa_comment(&joined));
            prop_assert!(parser.is_qa_comment(&spaced));
        }
    }

    #[test]
    fn qa_comments_stay_qa_comments_with_trailing_text(
        head in "(Tested on|QA verification|Could not test on SW|test run result)",
        tail in "[a-zA-Z0-9 .,:\n]{0,40}",
    ) {
        let parser = parser();
        prop_assert!(parser.is_qa_comment(&head));
        let joined = format!("{head}{tail}");
        prop_assert!(parser.is_qa_comment(&joined));
    }

    #[test]
    fn parsed_records_always_have_content(text in markup_text()) {
        if let Some(record) = parser().parse(&text) {
            prop_assert!(record.has_content());
        }
    }

    #[test]
    fn non_qa_text_yields_nothing(text in "[a-z ]{0,40}") {
        let parser = parser();
        if !parser.is_qa_comment(&normalize(&text)) {
            prop_assert!(parser.parse(&text).is_none());
        }
    }

    #[test]
    fn canonicalization_is_idempotent(raw in "[a-zA-Z /-]{0,16}") {
        let config = ParsingConfig::default();
        let table = ResultTable::new(&config.result_normalization);
        let once = table.canonicalize(&raw);
        prop_assert_eq!(table.canonicalize(&once), once);
    }
}
