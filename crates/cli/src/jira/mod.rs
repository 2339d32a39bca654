// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira REST API v2 ticket source.

mod adf;
mod auth;
mod client;
mod model;

pub use adf::to_text as adf_to_text;
pub use auth::Auth;
pub use client::{status_error, JiraClient, PAGE_SIZE};
pub use model::{CommentPage, JiraComment, JiraUser};
