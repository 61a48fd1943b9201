//! Ledger boundary for rollbook
//!
//! The external key-value ledger is the sole source of truth. This module
//! defines the narrow interface the core calls through, the range iterator
//! built on top of it, and an in-memory reference ledger.
//!
//! # Primitives
//!
//! - `get_state(key)`
//! - `put_state(key, bytes)`
//! - `delete_state(key)`
//! - `get_state_by_range(start, end)` (end exclusive)

mod errors;
mod iterator;
mod memory;
mod stub;

pub use errors::{StoreError, StoreResult};
pub use iterator::RangeIterator;
pub use memory::MemoryLedger;
pub use stub::{KeyValue, LedgerStub, StateCursor, StoreFuture};
