//! Narrow interface over the external key-value ledger
//!
//! The ledger owns all state. Implementations are pass-throughs: the core
//! never caches, batches or reorders calls made through this trait.

use std::future::Future;
use std::pin::Pin;

use super::errors::StoreResult;

/// Boxed future returned by every ledger primitive
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// A single entry yielded by a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Cursor handed out by [`LedgerStub::get_state_by_range`]
///
/// Yields entries in ascending key order. `next` returns `Ok(None)` once the
/// end key is reached; a broken cursor must return `Err`, never `Ok(None)`.
pub trait StateCursor: Send {
    /// Pull the next entry
    fn next(&mut self) -> StoreFuture<'_, Option<KeyValue>>;

    /// Release the underlying cursor resource
    fn close(&mut self) -> StoreResult<()>;
}

/// Ledger primitives consumed by the operation handlers
pub trait LedgerStub: Send + Sync {
    /// Read the value stored at `key`
    fn get_state<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>>;

    /// Write `value` at `key`, replacing any existing value
    fn put_state<'a>(&'a self, key: &'a str, value: Vec<u8>) -> StoreFuture<'a, ()>;

    /// Remove `key`; removing an absent key succeeds
    fn delete_state<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()>;

    /// Open a cursor over `[start_key, end_key)`
    fn get_state_by_range<'a>(
        &'a self,
        start_key: &'a str,
        end_key: &'a str,
    ) -> StoreFuture<'a, Box<dyn StateCursor>>;
}
