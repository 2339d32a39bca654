// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

const FULL: &str = r#"
[jira]
base_url = "https://jira.example.com/"
username = "qa@example.com"
token = "bearer abc"
"#;

#[test]
fn load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, FULL);
    let config = Config::load(&path).unwrap();
    assert_eq!(config.path, path);
    assert_eq!(config.parsing, ParsingConfig::default());

    let creds = config.credentials().unwrap();
    assert_eq!(creds.base_url, "https://jira.example.com");
    assert_eq!(creds.username, "qa@example.com");
    assert_eq!(creds.token, "bearer abc");
}

#[test]
fn parsing_overrides_keep_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[parsing]
qa_indicators = ["verified by qa"]

[parsing.result_normalization]
ok = "Fixed"
"#,
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(config.parsing.qa_indicators, vec!["verified by qa"]);
    assert_eq!(
        config.parsing.version_patterns,
        ParsingConfig::default().version_patterns
    );
    assert_eq!(config.parsing.result_normalization.len(), 1);
}

#[parameterized(
    base_url = { "", "u", "t", "base_url" },
    username = { "https://x", " ", "t", "username" },
    token = { "https://x", "u", "", "token" },
)]
fn missing_field_is_reported(base_url: &str, username: &str, token: &str, field: &str) {
    let config = Config {
        jira: JiraConfig {
            base_url: base_url.into(),
            username: username.into(),
            token: token.into(),
        },
        ..Config::default()
    };
    let err = config.credentials().unwrap_err();
    assert!(
        err.to_string().starts_with(&format!("{field} is required")),
        "{err}"
    );
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::discover(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[jira\nbase_url = ");
    assert!(matches!(Config::load(&path), Err(Error::Toml(_))));
}

#[test]
fn locate_prefers_explicit_path() {
    let path = PathBuf::from("/tmp/explicit.toml");
    assert_eq!(locate(Some(&path)), Some(path));
}

#[test]
fn user_config_path_ends_with_app_file() {
    if let Some(path) = user_config_path() {
        assert!(path.ends_with("jira-qa/config.toml"));
    }
}
