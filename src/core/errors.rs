// src/core/errors.rs

//! Defines the primary error type for the crate.

use std::sync::Arc;
use thiserror::Error;

/// Every failure a ReJSON call can surface.
///
/// `NoClientSet` is the only variant produced by the handler itself. All other
/// variants come from a backend and are returned to the caller untouched.
#[derive(Error, Debug)]
pub enum ReJsonError {
    #[error("no redis client is set")]
    NoClientSet,

    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Incomplete data in stream")]
    IncompleteData,

    #[error("Syntax error")]
    SyntaxError,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An error reply from the server, message kept verbatim.
    #[error("{0}")]
    Server(String),

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(String),
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
impl Clone for ReJsonError {
    fn clone(&self) -> Self {
        match self {
            ReJsonError::NoClientSet => ReJsonError::NoClientSet,
            ReJsonError::Io(e) => ReJsonError::Io(Arc::clone(e)),
            ReJsonError::IncompleteData => ReJsonError::IncompleteData,
            ReJsonError::SyntaxError => ReJsonError::SyntaxError,
            ReJsonError::InvalidRequest(s) => ReJsonError::InvalidRequest(s.clone()),
            ReJsonError::Server(s) => ReJsonError::Server(s.clone()),
            ReJsonError::UnexpectedReply(s) => ReJsonError::UnexpectedReply(s.clone()),
            ReJsonError::ConnectionClosed => ReJsonError::ConnectionClosed,
            ReJsonError::Timeout(s) => ReJsonError::Timeout(s.clone()),
            ReJsonError::Json(s) => ReJsonError::Json(s.clone()),
        }
    }
}

impl PartialEq for ReJsonError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ReJsonError::Io(e1), ReJsonError::Io(e2)) => e1.to_string() == e2.to_string(),
            (ReJsonError::InvalidRequest(s1), ReJsonError::InvalidRequest(s2)) => s1 == s2,
            (ReJsonError::Server(s1), ReJsonError::Server(s2)) => s1 == s2,
            (ReJsonError::UnexpectedReply(s1), ReJsonError::UnexpectedReply(s2)) => s1 == s2,
            (ReJsonError::Timeout(s1), ReJsonError::Timeout(s2)) => s1 == s2,
            (ReJsonError::Json(s1), ReJsonError::Json(s2)) => s1 == s2,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for ReJsonError {
    fn from(e: std::io::Error) -> Self {
        ReJsonError::Io(Arc::new(e))
    }
}

impl From<serde_json::Error> for ReJsonError {
    fn from(e: serde_json::Error) -> Self {
        ReJsonError::Json(e.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for ReJsonError {
    fn from(e: tokio::time::error::Elapsed) -> Self {
        ReJsonError::Timeout(e.to_string())
    }
}
