// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn basic(password: &str) -> Auth {
    Auth::Basic {
        username: "qa@example.com".into(),
        password: password.into(),
    }
}

#[parameterized(
    bearer = { "bearer abc123", Auth::Bearer("abc123".into()) },
    bearer_upper = { "Bearer abc123", Auth::Bearer("abc123".into()) },
    bearer_shouting = { "BEARER abc123", Auth::Bearer("abc123".into()) },
    basic_prefix = { "basic s3cret", basic("s3cret") },
    basic_mixed = { "Basic s3cret", basic("s3cret") },
    bare_token = { "ATATT3xFfGF0", basic("ATATT3xFfGF0") },
    bearer_without_space = { "bearerabc", basic("bearerabc") },
    short = { "bea", basic("bea") },
)]
fn token_schemes(token: &str, expected: Auth) {
    assert_eq!(Auth::from_token("qa@example.com", token), expected);
}

#[test]
fn non_ascii_token_is_basic() {
    assert_eq!(
        Auth::from_token("qa@example.com", "пароль-длинный"),
        basic("пароль-длинный")
    );
}

#[test]
fn debug_hides_secrets() {
    let shown = format!("{:?}", Auth::from_token("qa", "bearer top-secret"));
    assert!(!shown.contains("top-secret"));
    let shown = format!("{:?}", Auth::from_token("qa", "hunter2"));
    assert!(!shown.contains("hunter2"));
    assert!(shown.contains("qa"));
}
