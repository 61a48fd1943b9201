//! `deleteStudent`: remove one key

use crate::api::{check_arity, ChaincodeResult, HandlerFuture, Invocation};
use crate::observability::{Event, Severity};

/// Handler for `deleteStudent(key)`
pub fn delete_student<'a>(inv: &'a Invocation<'a>) -> HandlerFuture<'a> {
    Box::pin(delete_record(inv))
}

/// The delete always targets the supplied key. The prior value is read only
/// to report whether anything was removed; a missing key is not an error.
async fn delete_record(inv: &Invocation<'_>) -> ChaincodeResult<Option<Vec<u8>>> {
    check_arity(inv.args, 1)?;

    let key = &inv.args[0];
    let existed = inv.stub.get_state(key).await?.is_some();

    inv.stub.delete_state(key).await?;

    if existed {
        inv.metrics.increment_records_deleted();
    }
    inv.log(
        Severity::Info,
        Event::RecordDeleted,
        &[
            ("key", key.as_str()),
            ("existed", if existed { "true" } else { "false" }),
        ],
    );
    Ok(None)
}
