//! Types crossing the FFI boundary.
//!
//! # Design
//! Status codes cross as `c_long` so the entry points keep the shape of a
//! plain C `long http_get(const char *url)`. The checker itself is opaque:
//! C callers only ever hold a pointer to it.

use std::os::raw::c_long;

use status_core::StatusChecker;

/// Opaque handle to a `StatusChecker`. C callers receive a pointer to this
/// and pass it back into `status_checker_get`.
pub struct FfiStatusChecker {
    pub(crate) inner: StatusChecker,
}

/// Sentinel returned by every entry point when no status is available.
pub const FFI_STATUS_UNAVAILABLE: c_long = status_core::STATUS_UNAVAILABLE as c_long;
