// ABOUTME: Minimal MCP demo server exposing a single add(a, b) tool.
// ABOUTME: Demonstrates wiring a registry and dispatcher to stdio.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use toolbus::prelude::*;

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
            .param(ParamSpec::required("a", ParamKind::Integer).with_description("First addend"))
            .param(ParamSpec::required("b", ParamKind::Integer).with_description("Second addend"))
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        let a = args["a"].as_i64().unwrap_or(0);
        let b = args["b"].as_i64().unwrap_or(0);
        Ok(Envelope::ok(format!("{} + {} = {}", a, b, a + b)).with("sum", a + b))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let registry = Registry::new();
    registry.register(AddTool).await?;

    let server = McpServer::new(Dispatcher::new(registry), "demo-server", "0.1.0");
    server.serve_stdio().await?;
    Ok(())
}
