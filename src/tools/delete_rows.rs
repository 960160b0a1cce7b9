// ABOUTME: DeleteRowsTool - deletes rows matching equality filters.
// ABOUTME: Refuses to run without filters so a call cannot empty a table.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::SqlStore;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use crate::sql::{FilterBuilder, ident};
use crate::tool::{Envelope, Tool};

/// Tool for deleting rows from one table.
pub struct DeleteRowsTool {
    store: Arc<dyn SqlStore>,
}

impl DeleteRowsTool {
    /// Create the tool over a store.
    pub fn new(store: Arc<dyn SqlStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for DeleteRowsTool {
    fn name(&self) -> &str {
        "delete_rows"
    }

    fn description(&self) -> &str {
        "Delete rows from a table matching column equality filters."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(
                ParamSpec::required("table", ParamKind::String)
                    .with_description("Name of the table to delete from"),
            )
            .param(
                ParamSpec::required("filters", ParamKind::Object)
                    .with_description("Column name to value equality filters"),
            )
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            table: String,
            filters: Map<String, Value>,
        }
        let params: Params = serde_json::from_value(Value::Object(args))?;

        let table = match ident(&params.table) {
            Ok(table) => table,
            Err(e) => return Ok(Envelope::fail(format!("Error deleting rows: {}", e))),
        };

        let mut builder = FilterBuilder::new();
        for (column, value) in &params.filters {
            // A null filter value means "not filtered", same as an absent key.
            builder = match builder.eq(column, (!value.is_null()).then(|| value.clone())) {
                Ok(builder) => builder,
                Err(e) => return Ok(Envelope::fail(format!("Error deleting rows: {}", e))),
            };
        }

        if builder.is_empty() {
            return Ok(Envelope::fail(format!(
                "Refusing to delete from '{}' without filters",
                table
            )));
        }

        let (clause, bind) = builder.into_parts();
        let sql = format!("DELETE FROM {}{}", table, clause);

        match self.store.execute(&sql, &bind).await {
            Ok(count) => Ok(
                Envelope::ok(format!("Deleted {} rows from '{}'", count, table))
                    .with("count", count),
            ),
            Err(e) => Ok(Envelope::fail(format!(
                "Error deleting rows from '{}': {}",
                table, e
            ))),
        }
    }
}
