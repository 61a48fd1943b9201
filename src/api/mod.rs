//! API layer for rollbook
//!
//! The dispatcher is the only entry point. It resolves an operation name
//! through an explicit registry, runs the handler against the ledger it was
//! given, and converts the outcome into a response.
//!
//! # Design Principles
//!
//! - Name-to-handler map built once at construction
//! - Handlers are stateless; the ledger is the sole source of truth
//! - Every invocation yields exactly one success or error response
//! - Observability goes through the injected logger, never a global
//!
//! # Supported Operations
//!
//! - initLedger
//! - addStudent
//! - queryStudent
//! - queryAllStudents
//! - deleteStudent

mod dispatcher;
mod errors;
mod invocation;
mod registry;
mod request;
mod response;

pub use dispatcher::{Chaincode, DEFAULT_CHAINCODE_NAME};
pub use errors::{check_arity, ChaincodeError, ChaincodeResult};
pub use invocation::Invocation;
pub use registry::{Handler, HandlerFuture, OperationRegistry};
pub use request::InvocationRequest;
pub use response::{ErrorResponse, Response, SuccessResponse, STATUS_ERROR, STATUS_OK};
