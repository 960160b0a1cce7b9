// ABOUTME: Tests for the tool Registry - registration order, duplicate
// ABOUTME: policy, lookup, and shared state across clones.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::*;
use crate::error::RegistryError;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};

/// A simple test tool with a configurable name and reply.
struct EchoTool {
    name: &'static str,
    reply: &'static str,
}

impl EchoTool {
    fn new(name: &'static str, reply: &'static str) -> Self {
        Self { name, reply }
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Echoes a fixed reply"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new().param(ParamSpec::optional("message", ParamKind::String))
    }

    async fn call(&self, _args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        Ok(Envelope::ok(self.reply))
    }
}

#[tokio::test]
async fn test_register_and_get() {
    let registry = Registry::new();
    registry.register(EchoTool::new("echo", "hi")).await.unwrap();

    let tool = registry.get("echo").await.unwrap();
    assert_eq!(tool.name(), "echo");
}

#[tokio::test]
async fn test_get_nonexistent() {
    let registry = Registry::new();
    let err = registry.get("nonexistent").await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(name) if name == "nonexistent"));
}

#[tokio::test]
async fn test_empty_name_rejected() {
    let registry = Registry::new();
    let err = registry.register(EchoTool::new("", "hi")).await.unwrap_err();
    assert!(matches!(err, RegistryError::EmptyName));
}

#[tokio::test]
async fn test_registration_order_preserved() {
    let registry = Registry::new();
    registry.register(EchoTool::new("zebra", "z")).await.unwrap();
    registry.register(EchoTool::new("apple", "a")).await.unwrap();
    registry.register(EchoTool::new("mango", "m")).await.unwrap();

    assert_eq!(registry.names().await, vec!["zebra", "apple", "mango"]);
}

#[tokio::test]
async fn test_reregister_replaces_handler() {
    let registry = Registry::new();
    registry.register(EchoTool::new("echo", "old")).await.unwrap();
    registry.register(EchoTool::new("echo", "new")).await.unwrap();

    assert_eq!(registry.count().await, 1);
    let tool = registry.get("echo").await.unwrap();
    let result = tool.call(Map::new()).await.unwrap();
    assert_eq!(result.message, "new");
}

#[tokio::test]
async fn test_reregister_keeps_original_position() {
    let registry = Registry::new();
    registry.register(EchoTool::new("first", "1")).await.unwrap();
    registry.register(EchoTool::new("second", "2")).await.unwrap();
    registry.register(EchoTool::new("first", "1b")).await.unwrap();

    assert_eq!(registry.names().await, vec!["first", "second"]);
}

#[tokio::test]
async fn test_strict_rejects_duplicate() {
    let registry = Registry::strict();
    registry.register(EchoTool::new("echo", "hi")).await.unwrap();

    let err = registry.register(EchoTool::new("echo", "bye")).await.unwrap_err();
    assert!(matches!(err, RegistryError::Duplicate(name) if name == "echo"));

    // The original tool is untouched.
    let tool = registry.get("echo").await.unwrap();
    assert_eq!(tool.call(Map::new()).await.unwrap().message, "hi");
}

#[tokio::test]
async fn test_unregister() {
    let registry = Registry::new();
    registry.register(EchoTool::new("echo", "hi")).await.unwrap();
    assert_eq!(registry.count().await, 1);

    registry.unregister("echo").await;
    assert_eq!(registry.count().await, 0);
    assert!(registry.names().await.is_empty());
}

#[tokio::test]
async fn test_list_in_order() {
    let registry = Registry::new();
    registry.register(EchoTool::new("b", "b")).await.unwrap();
    registry.register(EchoTool::new("a", "a")).await.unwrap();

    let tools = registry.list().await;
    let names: Vec<_> = tools.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[tokio::test]
async fn test_clone_shares_state() {
    let registry = Registry::new();
    let clone = registry.clone();

    registry.register(EchoTool::new("echo", "hi")).await.unwrap();
    assert_eq!(clone.count().await, 1);
}
