// ABOUTME: InsertRowTool - inserts one row into a table from a column-value
// ABOUTME: map, with identifiers validated and values bound as parameters.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::SqlStore;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use crate::sql::insert_statement;
use crate::tool::{Envelope, Tool};

/// Tool for inserting a row into one table.
pub struct InsertRowTool {
    store: Arc<dyn SqlStore>,
}

impl InsertRowTool {
    /// Create the tool over a store.
    pub fn new(store: Arc<dyn SqlStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for InsertRowTool {
    fn name(&self) -> &str {
        "insert_row"
    }

    fn description(&self) -> &str {
        "Insert a row into a table from a column-to-value map."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(
                ParamSpec::required("table", ParamKind::String)
                    .with_description("Name of the table to insert into"),
            )
            .param(
                ParamSpec::required("values", ParamKind::Object)
                    .with_description("Column name to value map for the new row"),
            )
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            table: String,
            values: Map<String, Value>,
        }
        let params: Params = serde_json::from_value(Value::Object(args))?;

        let (sql, bind) = match insert_statement(&params.table, &params.values) {
            Ok(parts) => parts,
            Err(e) => return Ok(Envelope::fail(format!("Error inserting row: {}", e))),
        };

        match self.store.execute(&sql, &bind).await {
            Ok(count) => {
                let rows = if count == 1 { "row" } else { "rows" };
                Ok(
                    Envelope::ok(format!("Inserted {} {} into '{}'", count, rows, params.table))
                        .with("count", count),
                )
            }
            Err(e) => Ok(Envelope::fail(format!(
                "Error inserting row into '{}': {}",
                params.table, e
            ))),
        }
    }
}
