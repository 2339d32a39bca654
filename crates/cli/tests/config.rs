// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn path_reports_builtin_defaults() {
    let temp = TempDir::new().unwrap();
    jira_qa(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn path_finds_local_config() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "configs/config.toml", UNREACHABLE_CONFIG);
    jira_qa(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn env_var_overrides_local_config() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "configs/config.toml", UNREACHABLE_CONFIG);
    let other = write_file(&temp, "other.toml", "");
    jira_qa(&temp)
        .env("JIRA_QA_CONFIG", &other)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other.toml"));
}

#[test]
fn parsing_prints_defaults() {
    let temp = TempDir::new().unwrap();
    jira_qa(&temp)
        .args(["config", "parsing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qa_indicators"))
        .stdout(predicate::str::contains("could not test on sw"))
        .stdout(predicate::str::contains("[result_normalization]"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    jira_qa(&temp)
        .args(["--config", "nope.toml", "config", "parsing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read nope.toml"));
}

#[test]
fn malformed_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "configs/config.toml", "[jira\n");
    jira_qa(&temp)
        .args(["config", "parsing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("toml error"));
}
