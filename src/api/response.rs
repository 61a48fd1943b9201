//! Invocation response types
//!
//! Every invocation produces exactly one of a success payload or an error
//! payload.

use super::errors::ChaincodeError;

/// Status carried by a success response
pub const STATUS_OK: u16 = 200;

/// Status carried by an error response
pub const STATUS_ERROR: u16 = 500;

/// Success response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
    pub status: u16,
    pub payload: Vec<u8>,
}

impl SuccessResponse {
    /// Create a new success response
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            status: STATUS_OK,
            payload,
        }
    }

    /// Create an empty success response
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Error response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create from a chaincode error
    pub fn from_error(err: &ChaincodeError) -> Self {
        Self {
            status: STATUS_ERROR,
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Unified response type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a success response
    pub fn success(payload: Vec<u8>) -> Self {
        Response::Success(SuccessResponse::new(payload))
    }

    /// Create an empty success response
    pub fn ok() -> Self {
        Response::Success(SuccessResponse::empty())
    }

    /// Create an error response
    pub fn error(err: &ChaincodeError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    pub fn status(&self) -> u16 {
        match self {
            Response::Success(r) => r.status,
            Response::Error(r) => r.status,
        }
    }

    /// Success payload, if any
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Response::Success(r) => Some(&r.payload),
            Response::Error(_) => None,
        }
    }

    /// Error code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.code),
        }
    }

    /// Error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.message),
        }
    }
}
