//! Record codec
//!
//! The only place that converts between structured records and ledger
//! bytes. Encoding always produces JSON bytes. Decoding for listings tries a
//! structured parse first and falls back to the raw text.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::student::StudentRecord;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode record: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CodecError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Encode(_) => "CODEC_ENCODE_FAILED",
            Self::Decode(_) => "CODEC_DECODE_FAILED",
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Record value as presented in a listing
///
/// Serializes untagged: a parsed record appears as its JSON document, a
/// fallback appears as a JSON string holding the raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Parsed(Value),
    Raw(String),
}

impl RecordValue {
    /// Whether the structured parse failed
    pub fn is_raw(&self) -> bool {
        matches!(self, RecordValue::Raw(_))
    }
}

/// Stateless record codec
pub struct RecordCodec;

impl RecordCodec {
    /// Serialize a record to ledger bytes
    pub fn encode(record: &StudentRecord) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(record).map_err(CodecError::Encode)
    }

    /// Parse ledger bytes into a typed record
    pub fn decode(bytes: &[u8]) -> CodecResult<StudentRecord> {
        serde_json::from_slice(bytes).map_err(CodecError::Decode)
    }

    /// Parse ledger bytes for presentation.
    ///
    /// Any well-formed JSON document is accepted as structured, keeping its
    /// field order. Anything else is returned as text, with invalid UTF-8
    /// replaced by U+FFFD.
    pub fn decode_or_raw(bytes: &[u8]) -> RecordValue {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => RecordValue::Parsed(value),
            Err(_) => RecordValue::Raw(Self::as_text(bytes)),
        }
    }

    /// Text form of ledger bytes
    pub fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
