// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator seams: where raw comments and ticket metadata come from.

use std::borrow::Cow;
use std::fmt;

use crate::error::Result;

/// A comment as delivered by a ticket system.
pub trait SourceComment {
    /// Comment body as wiki-markup text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableBody`](crate::Error::UnreadableBody) when the
    /// body cannot be turned into text. Only this comment is skipped.
    fn body(&self) -> Result<Cow<'_, str>>;

    /// Opaque author identity, e.g. an email address. May be empty.
    fn author(&self) -> &str;

    /// Creation timestamp, passed through untouched.
    fn created(&self) -> &str;
}

/// An in-memory comment with a plain text body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawComment {
    pub body: String,
    pub author: String,
    pub created: String,
}

impl RawComment {
    pub fn new(body: impl Into<String>, author: impl Into<String>, created: impl Into<String>) -> Self {
        RawComment {
            body: body.into(),
            author: author.into(),
            created: created.into(),
        }
    }
}

impl SourceComment for RawComment {
    fn body(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(&self.body))
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn created(&self) -> &str {
        &self.created
    }
}

/// Ticket metadata shown alongside the QA records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketInfo {
    pub key: String,
    pub summary: String,
    pub assignee: Option<String>,
}

/// Supplies comments and metadata per ticket key.
///
/// Errors are surfaced to the caller; a failing source is never read as
/// "no comments".
pub trait TicketSource {
    type Comment: SourceComment;
    type Error: fmt::Display;

    /// All comments of the ticket, oldest first.
    fn comments(&self, key: &str) -> std::result::Result<Vec<Self::Comment>, Self::Error>;

    /// Summary and assignee of the ticket.
    fn info(&self, key: &str) -> std::result::Result<TicketInfo, Self::Error>;
}
