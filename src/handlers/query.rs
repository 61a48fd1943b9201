//! `queryStudent`: read one stored value

use crate::api::{check_arity, ChaincodeError, ChaincodeResult, HandlerFuture, Invocation};
use crate::observability::{Event, Severity};
use crate::record::RecordCodec;

/// Handler for `queryStudent(key)`
pub fn query_student<'a>(inv: &'a Invocation<'a>) -> HandlerFuture<'a> {
    Box::pin(read_record(inv))
}

/// Returns the stored bytes unmodified. Absent and zero-length values are
/// both NOT_FOUND.
async fn read_record(inv: &Invocation<'_>) -> ChaincodeResult<Option<Vec<u8>>> {
    check_arity(inv.args, 1)?;

    let key = &inv.args[0];
    let bytes = match inv.stub.get_state(key).await? {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(ChaincodeError::not_found(key.as_str())),
    };

    if inv.logger.enabled(Severity::Trace) {
        let text = RecordCodec::as_text(&bytes);
        inv.log(
            Severity::Trace,
            Event::RecordRead,
            &[("key", key.as_str()), ("value", text.as_str())],
        );
    }
    Ok(Some(bytes))
}
