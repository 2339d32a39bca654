// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jq-core: QA comment extraction for Jira tickets
//!
//! This crate turns free-form ticket comments into structured QA records:
//! markup normalization, QA classification, field extraction and result
//! canonicalization, plus the ticket-level service used by the jira-qa CLI.

pub mod aggregate;
pub mod classify;
pub mod comment;
pub mod config;
pub mod error;
pub mod extract;
pub mod markup;
pub mod parser;
pub mod result;
pub mod service;
pub mod source;

pub use classify::Classifier;
pub use comment::{Issue, IssuesList, QaComment};
pub use config::{ParsingConfig, COULD_NOT_TEST};
pub use error::{Error, Result};
pub use extract::{Extractor, Rule, PROGRAM};
pub use markup::normalize;
pub use parser::QaParser;
pub use result::ResultTable;
pub use service::CommentService;
pub use source::{RawComment, SourceComment, TicketInfo, TicketSource};
