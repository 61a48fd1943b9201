//! Range iterator
//!
//! Wraps a [`StateCursor`] as a lazy, finite, non-restartable sequence.
//! The cursor is released exactly once: by [`RangeIterator::close`] on the
//! normal path, or by `Drop` when the iterator is abandoned on an error or
//! panic path.

use super::errors::{StoreError, StoreResult};
use super::stub::{KeyValue, LedgerStub, StateCursor};

/// Pull-based iterator over one range scan
pub struct RangeIterator {
    /// `None` once released
    cursor: Option<Box<dyn StateCursor>>,
    /// Set on end-of-range
    exhausted: bool,
    /// First cursor error, replayed on every later pull
    failed: Option<StoreError>,
}

impl RangeIterator {
    /// Open a scan over `[start_key, end_key)`
    pub async fn open(
        stub: &dyn LedgerStub,
        start_key: &str,
        end_key: &str,
    ) -> StoreResult<Self> {
        let cursor = stub.get_state_by_range(start_key, end_key).await?;
        Ok(Self::from_cursor(cursor))
    }

    /// Wrap an already opened cursor
    pub fn from_cursor(cursor: Box<dyn StateCursor>) -> Self {
        Self {
            cursor: Some(cursor),
            exhausted: false,
            failed: None,
        }
    }

    /// Pull the next entry.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(kv))` for the next entry in key order
    /// - `Ok(None)` once the range is exhausted, and on every call after that
    /// - `Err(_)` if the cursor broke, and the same error on every call after
    ///   that; a broken scan never reads as a clean end of range
    pub async fn next(&mut self) -> StoreResult<Option<KeyValue>> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        if self.exhausted {
            return Ok(None);
        }

        let cursor = self.cursor.as_mut().ok_or(StoreError::CursorClosed)?;
        match cursor.next().await {
            Ok(Some(kv)) => Ok(Some(kv)),
            Ok(None) => {
                self.exhausted = true;
                Ok(None)
            }
            Err(e) => {
                self.failed = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Release the cursor
    pub fn close(mut self) -> StoreResult<()> {
        self.release()
    }

    fn release(&mut self) -> StoreResult<()> {
        match self.cursor.take() {
            Some(mut cursor) => cursor.close(),
            None => Ok(()),
        }
    }
}

impl Drop for RangeIterator {
    fn drop(&mut self) {
        // Close errors cannot be reported from drop
        let _ = self.release();
    }
}

impl std::fmt::Debug for RangeIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeIterator")
            .field("open", &self.cursor.is_some())
            .field("exhausted", &self.exhausted)
            .field("failed", &self.failed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{MemoryLedger, StoreFuture};

    /// Cursor that yields `entries` and then fails on every pull
    struct BreakingCursor {
        entries: Vec<KeyValue>,
    }

    impl StateCursor for BreakingCursor {
        fn next(&mut self) -> StoreFuture<'_, Option<KeyValue>> {
            Box::pin(async move {
                if self.entries.is_empty() {
                    return Err(StoreError::cursor_failed("connection reset"));
                }
                Ok(Some(self.entries.remove(0)))
            })
        }

        fn close(&mut self) -> StoreResult<()> {
            Ok(())
        }
    }

    async fn seeded(keys: &[&str]) -> MemoryLedger {
        let ledger = MemoryLedger::new();
        for key in keys {
            ledger.put_state(key, key.as_bytes().to_vec()).await.unwrap();
        }
        ledger
    }

    #[tokio::test]
    async fn test_iterates_in_order_then_stays_exhausted() {
        let ledger = seeded(&["K1", "K0", "K2"]).await;
        let mut iter = RangeIterator::open(&ledger, "K0", "K9").await.unwrap();

        let mut keys = Vec::new();
        while let Some(kv) = iter.next().await.unwrap() {
            keys.push(kv.key);
        }
        assert_eq!(keys, vec!["K0", "K1", "K2"]);

        // Not restartable
        assert_eq!(iter.next().await.unwrap(), None);

        iter.close().unwrap();
        assert_eq!(ledger.open_cursors(), 0);
    }

    #[tokio::test]
    async fn test_empty_values_are_not_skipped() {
        let ledger = MemoryLedger::new();
        ledger.put_state("K0", Vec::new()).await.unwrap();

        let mut iter = RangeIterator::open(&ledger, "K0", "K9").await.unwrap();
        let kv = iter.next().await.unwrap().unwrap();
        assert_eq!(kv.key, "K0");
        assert!(kv.value.is_empty());
        iter.close().unwrap();
    }

    #[tokio::test]
    async fn test_drop_releases_cursor() {
        let ledger = seeded(&["K0", "K1"]).await;
        {
            let mut iter = RangeIterator::open(&ledger, "K0", "K9").await.unwrap();
            let _ = iter.next().await.unwrap();
            assert_eq!(ledger.open_cursors(), 1);
        }
        assert_eq!(ledger.open_cursors(), 0);
    }

    #[tokio::test]
    async fn test_close_before_exhaustion() {
        let ledger = seeded(&["K0", "K1"]).await;
        let iter = RangeIterator::open(&ledger, "K0", "K9").await.unwrap();
        iter.close().unwrap();
        assert_eq!(ledger.open_cursors(), 0);
    }

    #[tokio::test]
    async fn test_failure_is_reported_on_every_later_pull() {
        let cursor = BreakingCursor {
            entries: vec![KeyValue::new("K0", "v0")],
        };
        let mut iter = RangeIterator::from_cursor(Box::new(cursor));

        assert_eq!(iter.next().await.unwrap().unwrap().key, "K0");

        let expected = StoreError::cursor_failed("connection reset");
        assert_eq!(iter.next().await, Err(expected.clone()));
        // A broken scan never turns into a clean end of range
        assert_eq!(iter.next().await, Err(expected.clone()));
        assert_eq!(iter.next().await, Err(expected));

        iter.close().unwrap();
    }

    #[tokio::test]
    async fn test_failed_cursor_is_not_pulled_again() {
        let ledger = seeded(&["K0"]).await;
        let mut iter = RangeIterator::open(&ledger, "K0", "K9").await.unwrap();
        iter.next().await.unwrap();
        iter.failed = Some(StoreError::cursor_failed("earlier failure"));

        // The replayed error wins over the entries still behind the cursor
        assert_eq!(
            iter.next().await.unwrap_err().code(),
            "STORE_CURSOR_FAILED"
        );
        iter.close().unwrap();
        assert_eq!(ledger.open_cursors(), 0);
    }
}
