// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Authentication scheme chosen from the configured token.

use reqwest::blocking::RequestBuilder;
use std::fmt;

const BEARER_PREFIX: &str = "bearer ";
const BASIC_PREFIX: &str = "basic ";

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// `Authorization: Bearer <token>`, for personal access tokens.
    Bearer(String),
    /// HTTP basic auth with the configured username.
    Basic { username: String, password: String },
}

impl Auth {
    /// `bearer <t>` selects bearer auth and `basic <p>` selects basic auth
    /// with password `p` (prefixes match case-insensitively). Anything else
    /// is a basic-auth password or API token.
    pub fn from_token(username: &str, token: &str) -> Self {
        if let Some(rest) = strip_prefix_ignore_case(token, BEARER_PREFIX) {
            return Auth::Bearer(rest.trim().to_string());
        }
        let password = strip_prefix_ignore_case(token, BASIC_PREFIX).unwrap_or(token);
        Auth::Basic {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Auth::Bearer(token) => request.bearer_auth(token),
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Bearer(_) => f.write_str("Bearer(***)"),
            Auth::Basic { username, .. } => write!(f, "Basic({username}, ***)"),
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
