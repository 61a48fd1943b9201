//! Shared helpers for integration tests
//!
//! `FaultyLedger` wraps the in-memory ledger and injects failures at
//! chosen points. Cursor opens and closes are counted.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rollbook::ledger::{KeyValue, StateCursor, StoreError, StoreFuture, StoreResult};
use rollbook::observability::{LogSink, MemorySink, Severity};
use rollbook::{Chaincode, LedgerStub, Logger, MemoryLedger};

// =============================================================================
// Test Utilities
// =============================================================================

/// Owned argument vector from string literals
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Chaincode that logs every severity into a captured sink
pub fn capturing_chaincode() -> (Chaincode, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let shared: Arc<dyn LogSink> = sink.clone();
    let chaincode = Chaincode::new(Logger::new(shared, Severity::Trace));
    (chaincode, sink)
}

/// Chaincode that drops all log output
pub fn quiet_chaincode() -> Chaincode {
    Chaincode::new(Logger::discard())
}

// =============================================================================
// Fault Injection
// =============================================================================

/// In-memory ledger with injectable failures
#[derive(Default)]
pub struct FaultyLedger {
    inner: MemoryLedger,
    fail_put_at: Option<usize>,
    fail_get: bool,
    fail_scan_open: bool,
    fail_scan_after: Option<usize>,
    puts: AtomicUsize,
    cursors_opened: Arc<AtomicUsize>,
    cursors_closed: Arc<AtomicUsize>,
}

impl FaultyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the put with this zero-based sequence number
    pub fn fail_put_at(mut self, index: usize) -> Self {
        self.fail_put_at = Some(index);
        self
    }

    /// Fail every get
    pub fn fail_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    /// Fail range-scan creation
    pub fn fail_scan_open(mut self) -> Self {
        self.fail_scan_open = true;
        self
    }

    /// Break cursors after yielding `count` entries
    pub fn fail_scan_after(mut self, count: usize) -> Self {
        self.fail_scan_after = Some(count);
        self
    }

    pub fn inner(&self) -> &MemoryLedger {
        &self.inner
    }

    pub fn cursors_opened(&self) -> usize {
        self.cursors_opened.load(Ordering::SeqCst)
    }

    pub fn cursors_closed(&self) -> usize {
        self.cursors_closed.load(Ordering::SeqCst)
    }

    /// Write directly, bypassing fault injection
    pub async fn seed_raw(&self, key: &str, value: &[u8]) {
        self.inner
            .put_state(key, value.to_vec())
            .await
            .expect("in-memory put");
    }
}

impl LedgerStub for FaultyLedger {
    fn get_state<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>> {
        if self.fail_get {
            return Box::pin(async {
                Err::<Option<Vec<u8>>, _>(StoreError::backend("injected get failure"))
            });
        }
        self.inner.get_state(key)
    }

    fn put_state<'a>(&'a self, key: &'a str, value: Vec<u8>) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let seq = self.puts.fetch_add(1, Ordering::SeqCst);
            if self.fail_put_at == Some(seq) {
                return Err(StoreError::backend(format!("injected put failure at {}", key)));
            }
            self.inner.put_state(key, value).await
        })
    }

    fn delete_state<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
        self.inner.delete_state(key)
    }

    fn get_state_by_range<'a>(
        &'a self,
        start_key: &'a str,
        end_key: &'a str,
    ) -> StoreFuture<'a, Box<dyn StateCursor>> {
        Box::pin(async move {
            if self.fail_scan_open {
                return Err(StoreError::backend("injected range failure"));
            }
            let inner = self.inner.get_state_by_range(start_key, end_key).await?;
            self.cursors_opened.fetch_add(1, Ordering::SeqCst);
            let cursor: Box<dyn StateCursor> = Box::new(FaultyCursor {
                inner,
                remaining: self.fail_scan_after,
                closes: Arc::clone(&self.cursors_closed),
            });
            Ok(cursor)
        })
    }
}

struct FaultyCursor {
    inner: Box<dyn StateCursor>,
    remaining: Option<usize>,
    closes: Arc<AtomicUsize>,
}

impl StateCursor for FaultyCursor {
    fn next(&mut self) -> StoreFuture<'_, Option<KeyValue>> {
        Box::pin(async move {
            match self.remaining.as_mut() {
                Some(0) => return Err(StoreError::cursor_failed("injected cursor failure")),
                Some(n) => *n -= 1,
                None => {}
            }
            self.inner.next().await
        })
    }

    fn close(&mut self) -> StoreResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        self.inner.close()
    }
}
