// ABOUTME: Tests for the Dispatcher - listing order, unknown tools,
// ABOUTME: validation failures, fault wrapping, and pass-through envelopes.

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use super::*;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use crate::tool::{Envelope, Registry, Tool};

/// Adds two integers, the canonical demo tool.
struct AddTool;

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &str {
        "add"
    }

    fn description(&self) -> &str {
        "Adds two numbers."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(ParamSpec::required("a", ParamKind::Integer))
            .param(ParamSpec::required("b", ParamKind::Integer))
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        let a = args["a"].as_i64().unwrap_or(0);
        let b = args["b"].as_i64().unwrap_or(0);
        Ok(Envelope::ok(format!("{} + {} = {}", a, b, a + b)).with("sum", a + b))
    }
}

/// A tool that always breaks its contract by returning Err.
struct FaultyTool;

#[async_trait]
impl Tool for FaultyTool {
    fn name(&self) -> &str {
        "faulty"
    }

    fn description(&self) -> &str {
        "Always fails"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
    }

    async fn call(&self, _args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// A tool that self-reports failure through its envelope.
struct SelfReportingTool;

#[async_trait]
impl Tool for SelfReportingTool {
    fn name(&self) -> &str {
        "self_reporting"
    }

    fn description(&self) -> &str {
        "Reports its own failure"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
    }

    async fn call(&self, _args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        Ok(Envelope::fail("Error retrieving rows: relation does not exist"))
    }
}

async fn dispatcher() -> Dispatcher {
    let registry = Registry::new();
    registry.register(AddTool).await.unwrap();
    registry.register(FaultyTool).await.unwrap();
    registry.register(SelfReportingTool).await.unwrap();
    Dispatcher::new(registry)
}

#[tokio::test]
async fn test_list_tools_in_registration_order() {
    let dispatcher = dispatcher().await;
    let listings = dispatcher.list_tools().await;

    let names: Vec<_> = listings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["add", "faulty", "self_reporting"]);
    assert_eq!(listings[0].description, "Adds two numbers.");
    assert_eq!(listings[0].schema.params().len(), 2);
}

#[tokio::test]
async fn test_invoke_success() {
    let dispatcher = dispatcher().await;
    let result = dispatcher.invoke("add", json!({"a": 2, "b": 3})).await;

    assert!(result.success);
    assert_eq!(result.message, "2 + 3 = 5");
    assert_eq!(result.payload["sum"], 5);
}

#[tokio::test]
async fn test_invoke_unknown_tool() {
    let dispatcher = dispatcher().await;
    let result = dispatcher.invoke("frobnicate", json!({})).await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "tool 'frobnicate' not implemented by this server."
    );
}

#[tokio::test]
async fn test_invoke_missing_required_argument() {
    let dispatcher = dispatcher().await;
    let result = dispatcher.invoke("add", json!({"a": 2})).await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "invalid arguments for tool 'add': missing required argument 'b'"
    );
}

#[tokio::test]
async fn test_invoke_unknown_argument_rejected() {
    let dispatcher = dispatcher().await;
    let result = dispatcher.invoke("add", json!({"a": 1, "b": 2, "c": 3})).await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "invalid arguments for tool 'add': unknown argument 'c'"
    );
}

#[tokio::test]
async fn test_invoke_wraps_handler_fault() {
    let dispatcher = dispatcher().await;
    let result = dispatcher.invoke("faulty", json!({})).await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "failed to execute tool 'faulty': connection refused"
    );
}

#[tokio::test]
async fn test_self_reported_failure_passes_through() {
    let dispatcher = dispatcher().await;
    let result = dispatcher.invoke("self_reporting", json!({})).await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "Error retrieving rows: relation does not exist"
    );
}

#[tokio::test]
async fn test_dispatcher_survives_failed_call() {
    let dispatcher = dispatcher().await;

    let failed = dispatcher.invoke("faulty", json!({})).await;
    assert!(!failed.success);

    // Subsequent calls are unaffected.
    let ok = dispatcher.invoke("add", json!({"a": 1, "b": 1})).await;
    assert!(ok.success);
    assert_eq!(dispatcher.list_tools().await.len(), 3);
}

#[tokio::test]
async fn test_reregistration_dispatches_to_new_handler() {
    let registry = Registry::new();
    registry.register(SelfReportingTool).await.unwrap();
    let dispatcher = Dispatcher::new(registry.clone());

    let before = dispatcher.invoke("self_reporting", json!({})).await;
    assert!(!before.success);

    // Replace with a handler that succeeds, using the same name.
    struct Replacement;

    #[async_trait]
    impl Tool for Replacement {
        fn name(&self) -> &str {
            "self_reporting"
        }

        fn description(&self) -> &str {
            "Replacement"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new()
        }

        async fn call(&self, _args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
            Ok(Envelope::ok("replaced"))
        }
    }

    registry.register(Replacement).await.unwrap();
    let after = dispatcher.invoke("self_reporting", json!({})).await;
    assert!(after.success);
    assert_eq!(after.message, "replaced");
}
