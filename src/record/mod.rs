//! Record model and codec
//!
//! Records are stored as JSON bytes. Readers must tolerate values that are
//! not valid record bytes; see [`RecordCodec::decode_or_raw`].

mod codec;
mod student;

pub use codec::{CodecError, CodecResult, RecordCodec, RecordValue};
pub use student::{StudentRecord, DOC_TYPE};
