//! Store Errors
//!
//! Everything the remote table can report back, plus the local
//! rejections that happen before a request is sent.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Which store call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Insert,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreOperation::List => "list",
            StoreOperation::Insert => "insert",
            StoreOperation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The service (or the network in front of it) reported a failure
    #[error("{operation} failed: {message}")]
    Remote {
        operation: StoreOperation,
        message: String,
    },
    /// Rejected locally; no request was made
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("store configuration: {0}")]
    Config(String),
    /// The service answered but the body was not what we asked for
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn remote(operation: StoreOperation, message: impl Into<String>) -> Self {
        StoreError::Remote {
            operation,
            message: message.into(),
        }
    }

    /// Failures that originate on the far side of the wire
    pub fn is_remote(&self) -> bool {
        matches!(self, StoreError::Remote { .. } | StoreError::Decode(_))
    }
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
pub(crate) struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Build the message for a non-success response.
///
/// Uses the PostgREST error body when it parses, otherwise falls back
/// to the HTTP status line.
pub(crate) fn describe_failure(status: u16, reason: Option<&str>, body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let mut message = match err.code {
                Some(code) => format!("{} ({})", err.message, code),
                None => err.message,
            };
            if let Some(details) = err.details.filter(|d| !d.is_empty()) {
                message.push_str(": ");
                message.push_str(&details);
            }
            if let Some(hint) = err.hint.filter(|h| !h.is_empty()) {
                message.push_str(" [hint: ");
                message.push_str(&hint);
                message.push(']');
            }
            message
        }
        Err(_) => match reason {
            Some(reason) => format!("HTTP {} {}", status, reason),
            None => format!("HTTP {}", status),
        },
    }
}
