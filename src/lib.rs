//! rollbook - A ledger-backed student record manager
//!
//! Operations are invoked by name with a list of string arguments and run
//! against an external key-value ledger supplied per call. The crate keeps
//! no state of its own between invocations.
//!
//! ```no_run
//! use rollbook::{Chaincode, Logger, MemoryLedger};
//!
//! # async fn demo() {
//! let ledger = MemoryLedger::new();
//! let chaincode = Chaincode::new(Logger::stdout());
//!
//! chaincode.invoke(&ledger, "initLedger", &[]).await;
//! let listing = chaincode.invoke(&ledger, "queryAllStudents", &[]).await;
//! assert!(listing.is_success());
//! # }
//! ```

pub mod api;
pub mod config;
pub mod handlers;
pub mod ledger;
pub mod observability;
pub mod record;

pub use api::{Chaincode, ChaincodeError, InvocationRequest, Response};
pub use config::ChaincodeConfig;
pub use ledger::{LedgerStub, MemoryLedger};
pub use observability::Logger;
