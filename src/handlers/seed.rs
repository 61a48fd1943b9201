//! `initLedger`: write the four example students

use crate::api::{ChaincodeResult, HandlerFuture, Invocation};
use crate::observability::{Event, Severity};
use crate::record::{RecordCodec, StudentRecord};

use super::record_key;

/// Payloads written by `initLedger`, in key order: name, age, grade, year
const SEED_STUDENTS: [(&str, &str, &str, &str); 4] = [
    ("Emily", "16", "76", "2"),
    ("John", "17", "80", "3"),
    ("Ashley", "15", "89", "1"),
    ("Rohan", "18", "100", "4"),
];

/// The seed records, tagged with the record doc type
pub fn seed_records() -> Vec<StudentRecord> {
    SEED_STUDENTS
        .iter()
        .map(|(name, age, grade, year)| StudentRecord::new(*name, *age, *grade, *year))
        .collect()
}

/// Handler for `initLedger`. Arguments are ignored.
pub fn init_ledger<'a>(inv: &'a Invocation<'a>) -> HandlerFuture<'a> {
    Box::pin(seed_ledger(inv))
}

/// Writes are sequential. A failed write aborts the rest and the records
/// already written stay on the ledger.
async fn seed_ledger(inv: &Invocation<'_>) -> ChaincodeResult<Option<Vec<u8>>> {
    let records = seed_records();
    let total = records.len().to_string();
    inv.log(Severity::Info, Event::LedgerSeedBegin, &[("records", total.as_str())]);

    for (index, record) in records.iter().enumerate() {
        let key = record_key(index);
        let bytes = RecordCodec::encode(record)?;

        if let Err(e) = inv.stub.put_state(&key, bytes).await {
            let written = index.to_string();
            inv.log(
                Severity::Warn,
                Event::LedgerSeedAborted,
                &[("failed_key", key.as_str()), ("written", written.as_str())],
            );
            return Err(e.into());
        }

        inv.metrics.add_records_written(1);
        inv.log(
            Severity::Info,
            Event::RecordWritten,
            &[("key", key.as_str()), ("name", record.name.as_str())],
        );
    }

    inv.log(Severity::Info, Event::LedgerSeedComplete, &[("records", total.as_str())]);
    Ok(None)
}
