use std::fmt;

use dashscan_core::SearchResult;
use thiserror::Error;

pub type RunId = u64;

/// Coarse progress of one search run. Emitted at most once each, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Retrieving,
    Searching,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress {
        run_id: RunId,
        event: ProgressEvent,
    },
    SearchCompleted {
        run_id: RunId,
        result: Result<SearchResult, SearchError>,
    },
}

/// The only error a search surfaces to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("user {username:?} not found: {reason}")]
    UserNotFound { username: String, reason: String },
}

impl SearchError {
    pub(crate) fn user_not_found(username: &str, reason: impl Into<String>) -> Self {
        SearchError::UserNotFound {
            username: username.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure to obtain a single item. Never surfaced past the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// The platform answered `null`.
    Missing,
    Malformed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Missing => write!(f, "missing"),
            FailureKind::Malformed => write!(f, "malformed payload"),
        }
    }
}
