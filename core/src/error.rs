//! Error types for a single status probe.
//!
//! # Design
//! `get_status` collapses every variant into the `0` sentinel, so the split
//! only matters to callers of `StatusChecker::probe` and to the diagnostic
//! line. `Body` exists because a response whose status line arrived but whose
//! body could not be drained still counts as a failed transfer.

use std::fmt;

/// Errors returned by `StatusChecker::probe`.
#[derive(Debug)]
pub enum ProbeError {
    /// The HTTP client rejected the URL before opening a connection.
    InvalidUrl(String),

    /// DNS, connect, TLS or protocol failure before a response arrived.
    Transport(String),

    /// The response started but reading the body to the end failed.
    Body(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            ProbeError::Transport(msg) => write!(f, "request failed: {msg}"),
            ProbeError::Body(msg) => write!(f, "reading response body failed: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

impl From<ureq::Error> for ProbeError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::BadUri(msg) => ProbeError::InvalidUrl(msg),
            other => ProbeError::Transport(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Body(err.to_string())
    }
}
