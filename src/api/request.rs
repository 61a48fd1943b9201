//! Invocation request parsing
//!
//! The platform delivers an invocation either as a flat argument vector whose
//! first element is the function name, or as a JSON document such as
//! `{"Args": ["queryStudent", "STUDENT1"]}`. Both are split into the function
//! name and its parameters here.

use serde::Deserialize;

use super::errors::{ChaincodeError, ChaincodeResult};

/// A function name plus its ordered parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub function: String,
    pub args: Vec<String>,
}

/// Raw request for parsing
#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    function: Option<String>,
    #[serde(rename = "Args", alias = "args", default)]
    args: Vec<String>,
}

impl InvocationRequest {
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }

    /// Split a flat argument vector into function name and parameters
    pub fn from_args(mut all: Vec<String>) -> ChaincodeResult<Self> {
        if all.is_empty() {
            return Err(ChaincodeError::invalid_request("Missing function name"));
        }
        let function = all.remove(0);
        Ok(Self {
            function,
            args: all,
        })
    }

    /// Parse a request from a JSON string.
    ///
    /// With an explicit `function` field, `Args` holds only the parameters.
    /// Without one, the first element of `Args` is the function name.
    pub fn parse(json: &str) -> ChaincodeResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ChaincodeError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.function {
            Some(function) => Ok(Self::new(function, raw.args)),
            None => Self::from_args(raw.args),
        }
    }
}
