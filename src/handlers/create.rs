//! `addStudent`: write one student under a caller-chosen key

use crate::api::{check_arity, ChaincodeResult, HandlerFuture, Invocation};
use crate::observability::{Event, Severity};
use crate::record::{RecordCodec, StudentRecord};

/// Handler for `addStudent(key, name, age, grade, year)`
pub fn add_student<'a>(inv: &'a Invocation<'a>) -> HandlerFuture<'a> {
    Box::pin(create_record(inv))
}

/// Last write wins: an existing value at the key is overwritten without a
/// read.
async fn create_record(inv: &Invocation<'_>) -> ChaincodeResult<Option<Vec<u8>>> {
    check_arity(inv.args, 5)?;

    let key = &inv.args[0];
    let record = StudentRecord::new(&inv.args[1], &inv.args[2], &inv.args[3], &inv.args[4]);
    let bytes = RecordCodec::encode(&record)?;

    inv.stub.put_state(key, bytes).await?;

    inv.metrics.add_records_written(1);
    inv.log(
        Severity::Info,
        Event::RecordWritten,
        &[("key", key.as_str()), ("name", record.name.as_str())],
    );
    Ok(None)
}
