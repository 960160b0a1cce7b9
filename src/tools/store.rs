// ABOUTME: Defines the SqlStore trait - an opaque SQL-executing service.
// ABOUTME: Tools hand it statement text plus bound parameters, nothing more.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// One result row, column name to JSON value.
pub type Row = Map<String, Value>;

/// An opaque SQL-executing service.
///
/// Implementations own connection handling; any connection-like resource
/// must be acquired and released within a single call, on all exit paths,
/// so nothing leaks across invocations.
#[async_trait]
pub trait SqlStore: Send + Sync {
    /// Run a statement that returns rows.
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, anyhow::Error>;

    /// Run a statement that returns an affected-row count.
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, anyhow::Error>;
}
