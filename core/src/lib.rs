//! Blocking HTTP status checks.
//!
//! # Overview
//! `get_status(url)` performs one HTTP GET, reads the response body to the
//! end without keeping it, and returns the numeric status code. Any failure
//! (bad URL, DNS, connect, TLS, a broken body) yields `0` and one `error`
//! event on the `tracing` dispatcher.
//!
//! # Design
//! - `StatusChecker` is stateless; each call owns a fresh client handle that
//!   is released before the call returns.
//! - `StatusChecker::probe` exposes the failure cause and the drained body
//!   length for callers that want more than the sentinel.
//! - `open_handles` reports live handles so callers can check for leaks.
//! - The library never installs a subscriber. Binaries and the C ABI do.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{get_status, StatusChecker};
pub use error::ProbeError;
pub use http::open_handles;
pub use types::{ProbeResponse, STATUS_UNAVAILABLE};
