//! Dispatcher for rollbook
//!
//! Single entry point for invocations. Resolves the operation name through
//! the registry, runs the handler, and converts every outcome (including a
//! handler panic) into a [`Response`].

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use uuid::Uuid;

use crate::config::ChaincodeConfig;
use crate::ledger::LedgerStub;
use crate::observability::{Event, InvocationMetrics, Logger, MetricsSnapshot, Severity};

use super::errors::ChaincodeError;
use super::invocation::Invocation;
use super::registry::OperationRegistry;
use super::request::InvocationRequest;
use super::response::Response;

/// Name used when no configuration is supplied
pub const DEFAULT_CHAINCODE_NAME: &str = "rollbook";

/// Student-record chaincode
pub struct Chaincode {
    name: String,
    registry: OperationRegistry,
    logger: Logger,
    metrics: InvocationMetrics,
    trace_arguments: bool,
}

impl Chaincode {
    /// Create a chaincode with the standard operations, logging to `logger`
    pub fn new(logger: Logger) -> Self {
        Self {
            name: DEFAULT_CHAINCODE_NAME.to_string(),
            registry: OperationRegistry::standard(),
            logger,
            metrics: InvocationMetrics::new(),
            trace_arguments: true,
        }
    }

    /// Create a chaincode from configuration
    pub fn from_config(config: &ChaincodeConfig) -> Self {
        Self {
            name: config.name.clone(),
            trace_arguments: config.trace_arguments,
            ..Self::new(config.logger())
        }
    }

    /// Replace the operation registry
    pub fn with_registry(mut self, registry: OperationRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered operation names, sorted
    pub fn operations(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Current invocation counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Instantiation hook. Performs no ledger writes.
    pub fn init(&self) -> Response {
        self.logger.event(
            Severity::Info,
            Event::ChaincodeInstantiated,
            &[("chaincode", self.name.as_str())],
        );
        Response::ok()
    }

    /// Dispatch a parsed request
    pub async fn invoke_request(
        &self,
        stub: &dyn LedgerStub,
        request: &InvocationRequest,
    ) -> Response {
        self.invoke(stub, &request.function, &request.args).await
    }

    /// Dispatch `function` with `args` against `stub`
    pub async fn invoke(&self, stub: &dyn LedgerStub, function: &str, args: &[String]) -> Response {
        let tx_id = Uuid::new_v4();
        let tx = tx_id.to_string();
        self.metrics.increment_invocations();
        self.trace_received(&tx, function, args);

        let handler = match self.registry.resolve(function) {
            Ok(handler) => handler,
            Err(err) => {
                self.metrics.increment_unknown_operations();
                self.metrics.increment_failed();
                self.logger.event(
                    Severity::Error,
                    Event::UnknownOperation,
                    &[("tx_id", tx.as_str()), ("function", function)],
                );
                return Response::error(&err);
            }
        };

        let invocation = Invocation {
            stub,
            args,
            tx_id,
            logger: &self.logger,
            metrics: &self.metrics,
        };

        let result = match AssertUnwindSafe(handler(&invocation)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(ChaincodeError::HandlerPanicked(panic_message(panic.as_ref()))),
        };

        match result {
            Ok(payload) => {
                let payload = payload.unwrap_or_default();
                let payload_bytes = payload.len().to_string();
                self.metrics.increment_succeeded();
                self.logger.event(
                    Severity::Info,
                    Event::InvokeSucceeded,
                    &[
                        ("tx_id", tx.as_str()),
                        ("function", function),
                        ("payload_bytes", payload_bytes.as_str()),
                    ],
                );
                Response::success(payload)
            }
            Err(err) => {
                let message = err.to_string();
                self.metrics.increment_failed();
                self.logger.event(
                    Severity::Error,
                    Event::InvokeFailed,
                    &[
                        ("tx_id", tx.as_str()),
                        ("function", function),
                        ("code", err.code()),
                        ("message", message.as_str()),
                    ],
                );
                Response::error(&err)
            }
        }
    }

    fn trace_received(&self, tx: &str, function: &str, args: &[String]) {
        if !self.logger.enabled(Severity::Info) {
            return;
        }
        let rendered = if self.trace_arguments {
            ("args", serde_json::to_string(args).unwrap_or_default())
        } else {
            ("arg_count", args.len().to_string())
        };
        self.logger.event(
            Severity::Info,
            Event::InvokeReceived,
            &[("tx_id", tx), ("function", function), (rendered.0, rendered.1.as_str())],
        );
    }
}

impl std::fmt::Debug for Chaincode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chaincode")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .field("trace_arguments", &self.trace_arguments)
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::api::errors::ChaincodeResult;
    use crate::api::registry::HandlerFuture;
    use crate::ledger::MemoryLedger;
    use crate::observability::MemorySink;

    fn boom<'a>(inv: &'a Invocation<'a>) -> HandlerFuture<'a> {
        Box::pin(explode(inv))
    }

    async fn explode(inv: &Invocation<'_>) -> ChaincodeResult<Option<Vec<u8>>> {
        if inv.args.is_empty() {
            panic!("handler exploded");
        }
        Ok(None)
    }

    fn capture() -> (Chaincode, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let chaincode = Chaincode::new(Logger::new(sink.clone(), Severity::Trace));
        (chaincode, sink)
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_init_performs_no_writes() {
        let (chaincode, sink) = capture();
        let resp = chaincode.init();
        assert_eq!(resp, Response::ok());
        assert_eq!(sink.events_named("CHAINCODE_INSTANTIATED").len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_operation_is_reported_and_logged() {
        let (chaincode, sink) = capture();
        let ledger = MemoryLedger::new();

        let resp = chaincode.invoke(&ledger, "transferCar", &[]).await;
        assert_eq!(resp.code(), Some("UNKNOWN_OPERATION"));

        let logged = sink.events_named("UNKNOWN_OPERATION");
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0]["function"], "transferCar");

        let m = chaincode.metrics();
        assert_eq!(m.unknown_operations, 1);
        assert_eq!(m.failed, 1);
    }

    #[tokio::test]
    async fn test_trace_precedes_execution() {
        let (chaincode, sink) = capture();
        let ledger = MemoryLedger::new();

        chaincode
            .invoke(&ledger, "queryStudent", &args(&["STUDENT0"]))
            .await;

        let lines = sink.lines();
        assert!(lines[0].contains("INVOKE_RECEIVED"));
        let received = &sink.events_named("INVOKE_RECEIVED")[0];
        assert_eq!(received["args"], r#"["STUDENT0"]"#);
        assert_eq!(received["function"], "queryStudent");
    }

    #[tokio::test]
    async fn test_trace_arguments_disabled_logs_count() {
        let sink = Arc::new(MemorySink::new());
        let mut chaincode = Chaincode::new(Logger::new(sink.clone(), Severity::Trace));
        chaincode.trace_arguments = false;
        let ledger = MemoryLedger::new();

        chaincode
            .invoke(&ledger, "queryStudent", &args(&["secret-key"]))
            .await;

        let received = &sink.events_named("INVOKE_RECEIVED")[0];
        assert_eq!(received["arg_count"], "1");
        assert!(received.get("args").is_none());
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_error_response() {
        let (chaincode, _sink) = capture();
        let chaincode =
            chaincode.with_registry(OperationRegistry::new().with_operation("boom", boom));
        let ledger = MemoryLedger::new();

        let resp = chaincode.invoke(&ledger, "boom", &[]).await;
        assert_eq!(resp.code(), Some("HANDLER_PANICKED"));
        assert!(resp.message().unwrap().contains("handler exploded"));
    }

    #[tokio::test]
    async fn test_void_handler_yields_empty_payload() {
        let (chaincode, _sink) = capture();
        let ledger = MemoryLedger::new();

        let resp = chaincode.invoke(&ledger, "deleteStudent", &args(&["STUDENT0"])).await;
        assert_eq!(resp.payload(), Some(&[][..]));
        assert_eq!(chaincode.metrics().succeeded, 1);
    }

    #[tokio::test]
    async fn test_metrics_are_per_chaincode() {
        let (first, _) = capture();
        let (second, _) = capture();
        let ledger = MemoryLedger::new();

        first.invoke(&ledger, "initLedger", &[]).await;
        first.invoke(&ledger, "queryAllStudents", &[]).await;

        assert_eq!(first.metrics().invocations, 2);
        assert_eq!(first.metrics().records_written, 4);
        assert_eq!(second.metrics(), MetricsSnapshot::default());
    }

    #[tokio::test]
    async fn test_invoke_request() {
        let (chaincode, _sink) = capture();
        let ledger = MemoryLedger::new();
        let request = InvocationRequest::parse(r#"{"Args":["initLedger"]}"#).unwrap();

        let resp = chaincode.invoke_request(&ledger, &request).await;
        assert!(resp.is_success());
        assert_eq!(ledger.len().await, 4);
    }

    #[test]
    fn test_panic_message_variants() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
