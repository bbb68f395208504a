//! Values produced by a status probe.

/// Returned by `get_status` when no status code could be determined.
pub const STATUS_UNAVAILABLE: u16 = 0;

/// Outcome of a GET whose response was received and fully drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// Status code from the response's status line.
    pub status: u16,
    /// Body bytes read and discarded. Never affects `status`.
    pub body_bytes: u64,
}
