//! C-ABI wrapper around `status-core`.
//!
//! # Overview
//! `status_get` is a drop-in for a C `long http_get(const char *url)`: one
//! blocking GET, body discarded, status code returned, `0` on failure with a
//! diagnostic line on stderr.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary; a caught panic reads as `0`.
//! - The first call installs a stderr `tracing` subscriber unless the host
//!   process already set a global one.
//! - `status_checker_new` / `status_checker_free` mirror the usual lifecycle
//!   pair for callers that prefer an explicit handle.

pub mod types;

use std::ffi::CStr;
use std::os::raw::{c_char, c_long};
use std::panic::catch_unwind;
use std::sync::Once;

use status_core::StatusChecker;
use tracing_subscriber::EnvFilter;

use types::*;

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Fails only when the host already installed a global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
}

/// Borrow `url` as `&str`, or `None` if it is null or not UTF-8.
///
/// # Safety
/// A non-null `url` must point to a NUL-terminated string that stays valid
/// for the returned lifetime.
unsafe fn url_arg<'a>(url: *const c_char) -> Option<&'a str> {
    if url.is_null() {
        tracing::error!("get_status failed: null url");
        return None;
    }
    match unsafe { CStr::from_ptr(url) }.to_str() {
        Ok(s) => Some(s),
        Err(err) => {
            tracing::error!(error = %err, "get_status failed: url is not valid UTF-8");
            None
        }
    }
}

fn checked_get(checker: &StatusChecker, url: *const c_char) -> c_long {
    init_logging();
    match unsafe { url_arg(url) } {
        Some(url) => c_long::from(checker.get_status(url)),
        None => FFI_STATUS_UNAVAILABLE,
    }
}

// ---------------------------------------------------------------------------
// One-shot entry point
// ---------------------------------------------------------------------------

/// GET `url`, discard the body, and return the HTTP status code.
///
/// Returns 0 if `url` is null or not UTF-8, if the request fails, or if an
/// internal panic occurs.
#[unsafe(no_mangle)]
pub extern "C" fn status_get(url: *const c_char) -> c_long {
    catch_unwind(|| checked_get(&StatusChecker::new(), url)).unwrap_or_else(|_| {
        tracing::error!("panic in status_get");
        FFI_STATUS_UNAVAILABLE
    })
}

// ---------------------------------------------------------------------------
// Checker lifecycle
// ---------------------------------------------------------------------------

/// Create a new checker. Returns null if an internal panic occurs.
/// The caller must free the returned pointer with `status_checker_free`.
#[unsafe(no_mangle)]
pub extern "C" fn status_checker_new() -> *mut FfiStatusChecker {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiStatusChecker {
            inner: StatusChecker::new(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// GET `url` through `checker`. Returns 0 if either argument is null or the
/// request fails.
#[unsafe(no_mangle)]
pub extern "C" fn status_checker_get(checker: *const FfiStatusChecker, url: *const c_char) -> c_long {
    catch_unwind(|| {
        if checker.is_null() {
            tracing::error!("get_status failed: null checker");
            return FFI_STATUS_UNAVAILABLE;
        }
        let checker = unsafe { &*checker };
        checked_get(&checker.inner, url)
    })
    .unwrap_or_else(|_| {
        tracing::error!("panic in status_checker_get");
        FFI_STATUS_UNAVAILABLE
    })
}

/// Free a checker created by `status_checker_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn status_checker_free(checker: *mut FfiStatusChecker) {
    if !checker.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(checker) });
        });
    }
}

/// Number of HTTP client handles currently alive in this process.
#[unsafe(no_mangle)]
pub extern "C" fn status_open_handles() -> usize {
    catch_unwind(status_core::open_handles).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
