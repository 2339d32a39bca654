// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    fixed = { "Fixed", Some(ResultTone::Pass) },
    ok = { "OK", Some(ResultTone::Pass) },
    verified = { "Verified", Some(ResultTone::Pass) },
    not_fixed = { "Not Fixed", Some(ResultTone::Fail) },
    blocked = { "Blocked", Some(ResultTone::Fail) },
    partially = { "Partially Fixed", Some(ResultTone::Partial) },
    could_not_test = { "Could not test", Some(ResultTone::Untested) },
    pending = { "Pending", Some(ResultTone::Untested) },
    na = { "N/A", None },
    empty = { "", None },
    lowercase = { "fixed", None },
)]
fn tone_buckets(label: &str, expected: Option<ResultTone>) {
    assert_eq!(ResultTone::of(label), expected);
}

#[test]
fn result_colors_known_labels() {
    assert_eq!(
        result("Result: Fixed", "Fixed", true),
        "\x1b[32mResult: Fixed\x1b[0m"
    );
    assert_eq!(
        result("Result: Not Fixed", "Not Fixed", true),
        "\x1b[31mResult: Not Fixed\x1b[0m"
    );
}

#[test]
fn result_plain_when_disabled_or_unknown() {
    assert_eq!(result("Result: Fixed", "Fixed", false), "Result: Fixed");
    assert_eq!(result("Result: N/A", "N/A", true), "Result: N/A");
}

#[test]
fn help_colors_use_256_palette() {
    assert_eq!(header("Commands:"), "\x1b[38;5;74mCommands:\x1b[0m");
    assert_eq!(literal("parse"), "\x1b[38;5;250mparse\x1b[0m");
    assert_eq!(context("<KEY>"), "\x1b[38;5;245m<KEY>\x1b[0m");
}

#[test]
fn command_marks_placeholders_as_context() {
    let out = command("jira-qa parse <KEY>");
    assert!(out.contains(&literal("parse")));
    assert!(out.contains(&context("<KEY>")));
}

#[test]
fn css_classes_match_tones() {
    assert_eq!(ResultTone::Pass.css_class(), "result-fixed");
    assert_eq!(ResultTone::Fail.css_class(), "result-not-fixed");
    assert_eq!(ResultTone::Partial.css_class(), "result-partially-fixed");
    assert_eq!(ResultTone::Untested.css_class(), "result-could-not-test");
}
