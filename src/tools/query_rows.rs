// ABOUTME: QueryRowsTool - selects rows from a table with optional equality
// ABOUTME: filters and a row limit, all values bound as parameters.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::SqlStore;
use crate::schema::{ParamKind, ParamSpec, ToolSchema};
use crate::sql::{FilterBuilder, ident};
use crate::tool::{Envelope, Tool};

/// Tool for querying rows from one table.
pub struct QueryRowsTool {
    store: Arc<dyn SqlStore>,
}

impl QueryRowsTool {
    /// Create the tool over a store.
    pub fn new(store: Arc<dyn SqlStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for QueryRowsTool {
    fn name(&self) -> &str {
        "query_rows"
    }

    fn description(&self) -> &str {
        "Query rows from a table, optionally filtered by column equality."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .param(
                ParamSpec::required("table", ParamKind::String)
                    .with_description("Name of the table to query"),
            )
            .param(
                ParamSpec::optional("filters", ParamKind::Object)
                    .with_description("Column name to value equality filters"),
            )
            .param(
                ParamSpec::optional("limit", ParamKind::Integer)
                    .with_default(100)
                    .with_description("Maximum number of rows to return"),
            )
    }

    async fn call(&self, args: Map<String, Value>) -> Result<Envelope, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            table: String,
            filters: Option<Map<String, Value>>,
            limit: i64,
        }
        let params: Params = serde_json::from_value(Value::Object(args))?;

        let table = match ident(&params.table) {
            Ok(table) => table,
            Err(e) => return Ok(Envelope::fail(format!("Error querying rows: {}", e))),
        };

        let mut builder = FilterBuilder::new();
        for (column, value) in params.filters.iter().flatten() {
            // A null filter value means "not filtered", same as an absent key.
            builder = match builder.eq(column, (!value.is_null()).then(|| value.clone())) {
                Ok(builder) => builder,
                Err(e) => return Ok(Envelope::fail(format!("Error querying rows: {}", e))),
            };
        }

        let (clause, mut bind) = builder.into_parts();
        let sql = format!(
            "SELECT * FROM {}{} LIMIT ${}",
            table,
            clause,
            bind.len() + 1
        );
        bind.push(Value::from(params.limit));

        match self.store.query(&sql, &bind).await {
            Ok(rows) => Ok(
                Envelope::ok(format!("Found {} rows in '{}'", rows.len(), table))
                    .with("rows", rows),
            ),
            Err(e) => Ok(Envelope::fail(format!(
                "Error querying rows from '{}': {}",
                table, e
            ))),
        }
    }
}
