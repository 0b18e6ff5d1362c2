//! The single failure kind surfaced by remote operations.
//!
//! # Design
//! Callers never branch on why a remote call failed; the contract on failure
//! is simply "no state change occurred". Transport errors, non-2xx statuses
//! and malformed payloads therefore collapse into one opaque kind. The
//! detail string exists for `Display` output only.

use std::fmt;

/// A remote operation did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    detail: String,
}

impl RemoteError {
    /// Wrap a transport-level failure reported by the host executing the
    /// request (connection refused, timeout, DNS failure, ...).
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        Self {
            detail: format!("HTTP {status}: {body}"),
        }
    }

    pub(crate) fn payload(err: serde_json::Error) -> Self {
        Self {
            detail: format!("bad payload: {err}"),
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remote operation failed: {}", self.detail)
    }
}

impl std::error::Error for RemoteError {}
