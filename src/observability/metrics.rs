//! Invocation metrics
//!
//! Counters only. Monotonic, reset only on process start.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for dispatched invocations
///
/// Uses Relaxed ordering; counters are observational only.
#[derive(Debug, Default)]
pub struct InvocationMetrics {
    invocations: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    unknown_operations: AtomicU64,
    records_written: AtomicU64,
    records_deleted: AtomicU64,
    decode_fallbacks: AtomicU64,
}

impl InvocationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_invocations(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_succeeded(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_unknown_operations(&self) {
        self.unknown_operations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_records_written(&self, count: u64) {
        self.records_written.fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_records_deleted(&self) {
        self.records_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_decode_fallbacks(&self) {
        self.decode_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            invocations: self.invocations.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            unknown_operations: self.unknown_operations.load(Ordering::Relaxed),
            records_written: self.records_written.load(Ordering::Relaxed),
            records_deleted: self.records_deleted.load(Ordering::Relaxed),
            decode_fallbacks: self.decode_fallbacks.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`InvocationMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub invocations: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub unknown_operations: u64,
    pub records_written: u64,
    pub records_deleted: u64,
    pub decode_fallbacks: u64,
}
