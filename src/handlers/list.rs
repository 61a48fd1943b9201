//! `queryAllStudents`: list every record in the fixed key window
//!
//! The window is `[STUDENT0, STUDENT999)` and is not configurable. Keys
//! outside it are invisible to this operation even when present.

use serde::Serialize;

use crate::api::{ChaincodeResult, HandlerFuture, Invocation};
use crate::ledger::RangeIterator;
use crate::observability::{Event, Severity};
use crate::record::{CodecError, RecordCodec, RecordValue};

use super::{SCAN_END_KEY, SCAN_START_KEY};

/// One element of the listing payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: RecordValue,
}

/// Handler for `queryAllStudents()`. Arguments are ignored.
pub fn query_all_students<'a>(inv: &'a Invocation<'a>) -> HandlerFuture<'a> {
    Box::pin(list_records(inv))
}

async fn list_records(inv: &Invocation<'_>) -> ChaincodeResult<Option<Vec<u8>>> {
    inv.log(
        Severity::Info,
        Event::RangeScanBegin,
        &[("start", SCAN_START_KEY), ("end", SCAN_END_KEY)],
    );

    let mut iter = RangeIterator::open(inv.stub, SCAN_START_KEY, SCAN_END_KEY).await?;

    // Release the cursor whether or not the scan succeeded
    let collected = collect_entries(inv, &mut iter).await;
    let closed = iter.close();
    let entries = collected?;
    closed?;

    let payload = serde_json::to_vec(&entries).map_err(CodecError::Encode)?;

    let count = entries.len().to_string();
    inv.log(Severity::Info, Event::RangeScanComplete, &[("entries", count.as_str())]);
    Ok(Some(payload))
}

/// Accumulate entries in scan order.
///
/// Empty values are skipped. A value that is not a record is kept as text;
/// only a cursor failure ends the scan early.
async fn collect_entries(
    inv: &Invocation<'_>,
    iter: &mut RangeIterator,
) -> ChaincodeResult<Vec<ListEntry>> {
    let mut entries = Vec::new();

    while let Some(kv) = iter.next().await? {
        if kv.value.is_empty() {
            continue;
        }

        let record = RecordCodec::decode_or_raw(&kv.value);
        if record.is_raw() {
            inv.metrics.increment_decode_fallbacks();
            inv.log(Severity::Warn, Event::DecodeFallback, &[("key", kv.key.as_str())]);
        }

        entries.push(ListEntry {
            key: kv.key,
            record,
        });
    }

    Ok(entries)
}
