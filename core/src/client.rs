//! Blocking single-shot status checker.
//!
//! # Design
//! `StatusChecker` carries no state between calls. Every call acquires its
//! own `ClientHandle`, performs one GET, drains the body and releases the
//! handle before returning. There is no retry and no connection reuse.
//!
//! `probe` keeps the failure cause; `get_status` logs it once at `error`
//! level and collapses it into `STATUS_UNAVAILABLE`.

use crate::error::ProbeError;
use crate::http::ClientHandle;
use crate::types::{ProbeResponse, STATUS_UNAVAILABLE};

/// Stateless, blocking HTTP status checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusChecker;

impl StatusChecker {
    pub fn new() -> Self {
        Self
    }

    /// GET `url`, read and discard the body, and return the detailed outcome.
    pub fn probe(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let handle = ClientHandle::acquire();
        let response = handle.get(url)?;
        tracing::debug!(
            url,
            status = response.status,
            body_bytes = response.body_bytes,
            "probe complete"
        );
        Ok(response)
    }

    /// GET `url` and return its status code, or `0` if the request failed.
    pub fn get_status(&self, url: &str) -> u16 {
        match self.probe(url) {
            Ok(response) => response.status,
            Err(err) => {
                tracing::error!(url, error = %err, "get_status failed");
                STATUS_UNAVAILABLE
            }
        }
    }
}

/// Shorthand for `StatusChecker::new().get_status(url)`.
pub fn get_status(url: &str) -> u16 {
    StatusChecker::new().get_status(url)
}
