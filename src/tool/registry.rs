// ABOUTME: Implements the Registry - a thread-safe container mapping tool
// ABOUTME: names to tools, preserving registration order for listings.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::Tool;
use crate::error::RegistryError;

#[derive(Default)]
struct Inner {
    tools: HashMap<String, Arc<dyn Tool>>,
    // Registration order is part of the listing contract.
    order: Vec<String>,
}

/// How re-registering an existing name is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the prior tool, keeping its original position in the order.
    #[default]
    Replace,
    /// Fail registration with [`RegistryError::Duplicate`].
    Reject,
}

/// A thread-safe registry of tools.
///
/// Expected usage is single-writer-at-startup: register everything once,
/// then serve reads for the process lifetime.
#[derive(Default)]
pub struct Registry {
    inner: Arc<RwLock<Inner>>,
    duplicates: DuplicatePolicy,
}

impl Registry {
    /// Create a new empty registry with last-write-wins re-registration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that rejects duplicate names at registration time.
    pub fn strict() -> Self {
        Self {
            inner: Arc::default(),
            duplicates: DuplicatePolicy::Reject,
        }
    }

    /// Register a tool.
    pub async fn register<T: Tool + 'static>(&self, tool: T) -> Result<(), RegistryError> {
        self.register_arc(Arc::new(tool)).await
    }

    /// Register a tool from an Arc.
    pub async fn register_arc(&self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let mut inner = self.inner.write().await;
        if inner.tools.contains_key(&name) {
            if self.duplicates == DuplicatePolicy::Reject {
                return Err(RegistryError::Duplicate(name));
            }
        } else {
            inner.order.push(name.clone());
        }
        inner.tools.insert(name, tool);
        Ok(())
    }

    /// Unregister a tool by name.
    pub async fn unregister(&self, name: &str) {
        let mut inner = self.inner.write().await;
        if inner.tools.remove(name).is_some() {
            inner.order.retain(|n| n != name);
        }
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Result<Arc<dyn Tool>, RegistryError> {
        let inner = self.inner.read().await;
        inner
            .tools
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// List all tool names, in registration order.
    pub async fn names(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        inner.order.clone()
    }

    /// Get all registered tools, in registration order.
    pub async fn list(&self) -> Vec<Arc<dyn Tool>> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|name| inner.tools.get(name).cloned())
            .collect()
    }

    /// Get the number of registered tools.
    pub async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.tools.len()
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            duplicates: self.duplicates,
        }
    }
}
