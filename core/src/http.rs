//! Scoped HTTP client handle.
//!
//! # Design
//! A `ClientHandle` owns one `ureq::Agent` for exactly one request. It is
//! created at the start of a probe and dropped on every exit path, including
//! `?` returns and unwinding, so connections never outlive the call that
//! opened them. A process-wide counter tracks live handles so leaks are
//! observable from tests and from the C ABI.
//!
//! The agent reports 4xx/5xx as ordinary responses and does not follow
//! redirects: the status reported is always the one the server sent.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use ureq::Agent;

use crate::error::ProbeError;
use crate::types::ProbeResponse;

static OPEN_HANDLES: AtomicUsize = AtomicUsize::new(0);

/// Number of client handles currently alive in this process.
pub fn open_handles() -> usize {
    OPEN_HANDLES.load(Ordering::SeqCst)
}

/// One HTTP client, released on drop.
pub(crate) struct ClientHandle {
    agent: Agent,
}

impl ClientHandle {
    pub(crate) fn acquire() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .build()
            .new_agent();
        OPEN_HANDLES.fetch_add(1, Ordering::SeqCst);
        Self { agent }
    }

    /// Issue a GET and drain the body into a sink.
    pub(crate) fn get(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let mut response = self.agent.get(url).call()?;
        let status = response.status().as_u16();

        let mut reader = response.body_mut().as_reader();
        let body_bytes = io::copy(&mut reader, &mut io::sink())?;

        Ok(ProbeResponse { status, body_bytes })
    }
}

impl Drop for ClientHandle {
    fn drop(&mut self) {
        OPEN_HANDLES.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Other tests in this binary acquire handles concurrently, so only
    // relative movement while this handle is held is asserted.
    #[test]
    fn acquire_counts_a_live_handle() {
        let handle = ClientHandle::acquire();
        assert!(open_handles() >= 1);
        drop(handle);
    }

    // Release on this path is asserted in tests/handles.rs.
    #[test]
    fn malformed_url_is_an_error() {
        let handle = ClientHandle::acquire();
        assert!(handle.get("not a url").is_err());
    }
}
