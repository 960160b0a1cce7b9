// ABOUTME: ListTablesTool - lists the public tables of the connected store.
// ABOUTME: Takes no arguments; returns table names in the payload.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::SqlStore;
use crate::schema::ToolSchema;
use crate::tool::{Envelope, Tool};

const LIST_TABLES_SQL: &str = "SELECT table_name FROM information_schema.tables \
     WHERE table_schema = 'public' ORDER BY table_name";

/// Tool for listing tables in the store's public schema.
pub struct ListTablesTool {
    store: Arc<dyn SqlStore>,
}

impl ListTablesTool {
    /// Create the tool over a store.
    pub fn new(store: Arc<dyn SqlStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ListTablesTool {
    fn name(&self) -> &str {
        "list_tables"
    }

    fn description(&self) -> &str {
        "List all tables in the database."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
    }

    async fn call(&self, _args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        match self.store.query(LIST_TABLES_SQL, &[]).await {
            Ok(rows) => {
                let tables: Vec<&str> = rows
                    .iter()
                    .filter_map(|row| row.get("table_name").and_then(Value::as_str))
                    .collect();
                Ok(Envelope::ok(format!("Found {} tables", tables.len())).with("tables", tables))
            }
            Err(e) => Ok(Envelope::fail(format!("Error listing tables: {}", e))),
        }
    }
}
