//! In-memory ledger
//!
//! Reference implementation of [`LedgerStub`] over an ordered map. Range
//! scans snapshot the matching entries when the cursor is opened, so writes
//! made during an enumeration are not observed by it.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::stub::{KeyValue, LedgerStub, StateCursor, StoreFuture};

/// Ordered in-memory key-value ledger
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: RwLock<BTreeMap<String, Vec<u8>>>,
    open_cursors: Arc<AtomicUsize>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of range cursors opened and not yet closed
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of keys currently stored
    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }
}

impl LedgerStub for MemoryLedger {
    fn get_state<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>> {
        Box::pin(async move { Ok(self.state.read().await.get(key).cloned()) })
    }

    fn put_state<'a>(&'a self, key: &'a str, value: Vec<u8>) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.state.write().await.insert(key.to_string(), value);
            Ok(())
        })
    }

    fn delete_state<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.state.write().await.remove(key);
            Ok(())
        })
    }

    fn get_state_by_range<'a>(
        &'a self,
        start_key: &'a str,
        end_key: &'a str,
    ) -> StoreFuture<'a, Box<dyn StateCursor>> {
        Box::pin(async move {
            if start_key > end_key {
                return Err(StoreError::backend(format!(
                    "invalid range: start key {} is after end key {}",
                    start_key, end_key
                )));
            }

            let entries: VecDeque<KeyValue> = self
                .state
                .read()
                .await
                .range(start_key.to_string()..end_key.to_string())
                .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
                .collect();

            self.open_cursors.fetch_add(1, Ordering::SeqCst);
            let cursor: Box<dyn StateCursor> = Box::new(MemoryCursor {
                entries,
                open: true,
                open_cursors: Arc::clone(&self.open_cursors),
            });
            Ok(cursor)
        })
    }
}

/// Cursor over a snapshot taken at open time
struct MemoryCursor {
    entries: VecDeque<KeyValue>,
    open: bool,
    open_cursors: Arc<AtomicUsize>,
}

impl StateCursor for MemoryCursor {
    fn next(&mut self) -> StoreFuture<'_, Option<KeyValue>> {
        Box::pin(async move {
            if !self.open {
                return Err(StoreError::CursorClosed);
            }
            Ok(self.entries.pop_front())
        })
    }

    fn close(&mut self) -> StoreResult<()> {
        if !self.open {
            return Err(StoreError::CursorClosed);
        }
        self.open = false;
        self.entries.clear();
        self.open_cursors.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}
