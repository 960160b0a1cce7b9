// ABOUTME: Defines the Tool trait - a named, schema-described callable.
// ABOUTME: Includes FnTool for adapting plain functions at registration time.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::Envelope;
use crate::schema::ToolSchema;

/// A tool that can be invoked by name with validated arguments.
///
/// A tool reports its own outcome through the [`Envelope`] it returns; an
/// `Err` means the tool failed to follow its own contract and is caught at
/// the dispatch boundary.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for clients.
    fn description(&self) -> &str;

    /// Returns the declared parameter schema.
    fn schema(&self) -> ToolSchema;

    /// Invoke the tool. Arguments have already been validated against
    /// [`Tool::schema`] and defaults filled in.
    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Adapts a plain function into a [`Tool`] at registration time.
///
/// Gives every handler one uniform shape regardless of its natural argument
/// list: a mapping of argument name to value in, an envelope out.
pub struct FnTool<F> {
    name: String,
    description: String,
    schema: ToolSchema,
    func: F,
}

impl<F> FnTool<F>
where
    F: Fn(Map<String, Value>) -> Result<Envelope, anyhow::Error> + Send + Sync,
{
    /// Wrap a function with a name, description, and schema.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: ToolSchema,
        func: F,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            func,
        }
    }
}

#[async_trait]
impl<F> Tool for FnTool<F>
where
    F: Fn(Map<String, Value>) -> Result<Envelope, anyhow::Error> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> ToolSchema {
        self.schema.clone()
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        (self.func)(args)
    }
}
