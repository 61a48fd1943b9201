//! Chaincode error types
//!
//! Every failure raised by a handler is one of these. The dispatcher turns
//! each into an error response carrying `code()` and the display message.

use thiserror::Error;

use crate::ledger::StoreError;
use crate::record::CodecError;

/// Result type for handlers and dispatch
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;

/// Chaincode errors
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// No handler registered under the requested name
    #[error("Received unknown function {0} invocation")]
    UnknownOperation(String),

    /// Wrong argument count for a known operation
    #[error("Incorrect number of arguments. Expecting {expected}.")]
    Arity { expected: usize, actual: usize },

    /// Read of an absent or empty key
    #[error("{0} does not exist")]
    NotFound(String),

    /// Ledger primitive or cursor failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Record could not be serialized
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Malformed invocation envelope
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Handler panicked; caught at the dispatch boundary
    #[error("Handler panicked: {0}")]
    HandlerPanicked(String),
}

impl ChaincodeError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    /// Create a not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    /// Get error code for responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",
            Self::Arity { .. } => "ARITY_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "STORE_FAILURE",
            Self::Codec(_) => "CODEC_FAILURE",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::HandlerPanicked(_) => "HANDLER_PANICKED",
        }
    }
}

/// Fail with [`ChaincodeError::Arity`] unless exactly `expected` args were passed
pub fn check_arity(args: &[String], expected: usize) -> ChaincodeResult<()> {
    if args.len() != expected {
        return Err(ChaincodeError::Arity {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}
