//! Operation registry
//!
//! Explicit mapping from operation names to handler functions, built once
//! when the dispatcher is constructed. A name missing from the map is the
//! UNKNOWN_OPERATION condition.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use super::errors::{ChaincodeError, ChaincodeResult};
use super::invocation::Invocation;
use crate::handlers;

/// Future returned by a handler: an optional payload or an error
pub type HandlerFuture<'a> =
    Pin<Box<dyn Future<Output = ChaincodeResult<Option<Vec<u8>>>> + Send + 'a>>;

/// Handler function value
pub type Handler = for<'a> fn(&'a Invocation<'a>) -> HandlerFuture<'a>;

/// Registry of dispatchable operations
#[derive(Clone, Default)]
pub struct OperationRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl OperationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the five student operations
    pub fn standard() -> Self {
        Self::new()
            .with_operation(handlers::INIT_LEDGER, handlers::init_ledger)
            .with_operation(handlers::ADD_STUDENT, handlers::add_student)
            .with_operation(handlers::QUERY_STUDENT, handlers::query_student)
            .with_operation(handlers::QUERY_ALL_STUDENTS, handlers::query_all_students)
            .with_operation(handlers::DELETE_STUDENT, handlers::delete_student)
    }

    /// Register `handler` under `name`, replacing any previous entry
    pub fn with_operation(mut self, name: &'static str, handler: Handler) -> Self {
        self.handlers.insert(name, handler);
        self
    }

    /// Look up the handler for `name`
    pub fn resolve(&self, name: &str) -> ChaincodeResult<Handler> {
        self.handlers
            .get(name)
            .copied()
            .ok_or_else(|| ChaincodeError::UnknownOperation(name.to_string()))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.names())
            .finish()
    }
}
