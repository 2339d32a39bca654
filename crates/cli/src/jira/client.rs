// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP client for the Jira REST API v2.

use jq_core::{TicketInfo, TicketSource};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::auth::Auth;
use super::model::{CommentPage, IssueResponse, JiraComment};
use crate::config::Credentials;
use crate::error::{Error, Result};

/// Comments requested per page.
pub const PAGE_SIZE: usize = 100;

const API_PATH: [&str; 3] = ["rest", "api", "2"];
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated connection to one Jira instance.
#[derive(Debug)]
pub struct JiraClient {
    http: Client,
    base_url: Url,
    auth: Auth,
}

impl JiraClient {
    /// Build a client without contacting the server.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let base_url = Url::parse(&credentials.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| Error::Config(format!("invalid base_url '{}'", credentials.base_url)))?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("jira-qa/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(JiraClient {
            http,
            base_url,
            auth: Auth::from_token(&credentials.username, &credentials.token),
        })
    }

    /// Build a client and check the credentials against `/myself`.
    pub fn connect(credentials: &Credentials) -> Result<Self> {
        let client = JiraClient::new(credentials)?;
        client.validate()?;
        Ok(client)
    }

    /// Fails with [`Error::Unauthorized`] when the server rejects the token.
    pub fn validate(&self) -> Result<()> {
        let _: serde_json::Value = self.get_json(&["myself"], &[], None)?;
        tracing::debug!(base_url = %self.base_url, "credentials accepted");
        Ok(())
    }

    /// API URL for `segments`, each percent-encoded as a single path segment
    /// so a ticket key can never address another endpoint.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PATH).extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        key: Option<&str>,
    ) -> Result<T> {
        let url = self.endpoint(segments);
        tracing::debug!(%url, "GET");
        let request = self.auth.apply(self.http.get(url).query(query));
        let response = request.send()?;
        parse_json_response(response, key)
    }

    fn fetch_comments(&self, key: &str) -> Result<Vec<JiraComment>> {
        let mut comments = Vec::new();
        let mut start_at = 0;
        loop {
            let query = [
                ("startAt", start_at.to_string()),
                ("maxResults", PAGE_SIZE.to_string()),
                ("orderBy", "created".to_string()),
            ];
            let page: CommentPage = self.get_json(&["issue", key, "comment"], &query, Some(key))?;
            let next = page.next_start();
            comments.extend(page.comments.into_iter().map(JiraComment::resolved));
            match next {
                Some(next) => start_at = next,
                None => break,
            }
        }
        tracing::debug!(key, count = comments.len(), "fetched comments");
        Ok(comments)
    }

    fn fetch_info(&self, key: &str) -> Result<TicketInfo> {
        let query = [("fields", "summary,assignee".to_string())];
        let issue: IssueResponse = self.get_json(&["issue", key], &query, Some(key))?;
        Ok(TicketInfo {
            key: if issue.key.is_empty() {
                key.to_string()
            } else {
                issue.key
            },
            summary: issue.fields.summary.unwrap_or_default(),
            assignee: issue
                .fields
                .assignee
                .map(|user| user.identity())
                .filter(|identity| !identity.is_empty()),
        })
    }
}

impl TicketSource for JiraClient {
    type Comment = JiraComment;
    type Error = Error;

    fn comments(&self, key: &str) -> Result<Vec<JiraComment>> {
        self.fetch_comments(key)
    }

    fn info(&self, key: &str) -> Result<TicketInfo> {
        self.fetch_info(key)
    }
}

fn parse_json_response<T: DeserializeOwned>(response: Response, key: Option<&str>) -> Result<T> {
    let status = response.status();
    let body = response.text()?;
    if let Some(err) = status_error(status, &body, key) {
        return Err(err);
    }
    Ok(serde_json::from_str(&body)?)
}

/// Error for a non-success status, `None` on success.
pub fn status_error(status: StatusCode, body: &str, key: Option<&str>) -> Option<Error> {
    if status.is_success() {
        return None;
    }
    Some(match (status, key) {
        (StatusCode::NOT_FOUND, Some(key)) => Error::TicketNotFound(key.to_string()),
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => Error::Unauthorized,
        _ => Error::Api {
            status: status.as_u16(),
            body: body.chars().take(500).collect(),
        },
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
