//! Ledger error types
//!
//! Every variant belongs to the STORE_FAILURE category at the dispatch
//! boundary. The per-variant code is kept for diagnostics.

use thiserror::Error;

/// Result type for ledger operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the external ledger or one of its cursors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A get/put/delete/range-scan primitive failed
    #[error("ledger operation failed: {0}")]
    Backend(String),

    /// A range-scan cursor broke mid-enumeration
    #[error("range cursor failed: {0}")]
    CursorFailed(String),

    /// A cursor was used after it was released
    #[error("range cursor already closed")]
    CursorClosed,
}

impl StoreError {
    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a cursor failure
    pub fn cursor_failed(msg: impl Into<String>) -> Self {
        Self::CursorFailed(msg.into())
    }

    /// Get the error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Backend(_) => "STORE_BACKEND_FAILED",
            Self::CursorFailed(_) => "STORE_CURSOR_FAILED",
            Self::CursorClosed => "STORE_CURSOR_CLOSED",
        }
    }
}
