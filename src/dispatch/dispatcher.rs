// ABOUTME: Implements the Dispatcher - looks up tools by name, validates
// ABOUTME: arguments, invokes, and never lets a failure escape as an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::ToolSchema;
use crate::tool::{Envelope, Registry};

/// One entry in a tool listing: name, description, declared schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolListing {
    pub name: String,
    pub description: String,
    pub schema: ToolSchema,
}

/// Dispatches list and call requests against a [`Registry`].
///
/// Stateless across calls; every invocation is independent. All failures
/// are reported as [`Envelope`] values. A single failed call never
/// terminates the process or affects later calls.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// List every registered tool, in registration order.
    pub async fn list_tools(&self) -> Vec<ToolListing> {
        self.registry
            .list()
            .await
            .iter()
            .map(|t| ToolListing {
                name: t.name().to_string(),
                description: t.description().to_string(),
                schema: t.schema(),
            })
            .collect()
    }

    /// Invoke a tool by name with raw arguments.
    ///
    /// Unknown names and invalid arguments are reported failures, not
    /// raised faults. A tool that returns `Err` is caught here and wrapped;
    /// a tool that completes normally reports its own success flag, which
    /// is passed through untouched.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Envelope {
        let tool = match self.registry.get(name).await {
            Ok(tool) => tool,
            Err(_) => {
                return Envelope::fail(format!("tool '{}' not implemented by this server.", name));
            }
        };

        let args = match tool.schema().validate(arguments) {
            Ok(args) => args,
            Err(e) => {
                return Envelope::fail(format!("invalid arguments for tool '{}': {}", name, e));
            }
        };

        match tool.call(args).await {
            Ok(envelope) => envelope,
            Err(e) => Envelope::fail(format!("failed to execute tool '{}': {}", name, e)),
        }
    }
}
