// ABOUTME: Builds WHERE clauses and INSERT statements from optional filter
// ABOUTME: arguments. Values are always bound parameters, never interpolated.

use serde_json::Value;

use crate::error::SqlError;

const COMPARISON_OPS: &[&str] = &["=", "<>", "<", "<=", ">", ">=", "LIKE", "ILIKE"];

/// Validate a table or column name.
///
/// Identifiers cannot be bound as parameters, so they end up in the query
/// text. Restricting them to `[A-Za-z_][A-Za-z0-9_]*` closes the injection
/// hole that naive string interpolation opens.
pub fn ident(name: &str) -> Result<&str, SqlError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(SqlError::InvalidIdentifier(name.to_string()))
    }
}

/// Accumulates predicate clauses and their bound parameters.
///
/// Clauses are only appended for filters that are actually present, then
/// joined with `AND`. Placeholders are numbered `$1..$n` and `params()`
/// holds the values in matching order; execution is the store's concern.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl FilterBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate if the filter value is present.
    pub fn eq(self, column: &str, value: Option<impl Into<Value>>) -> Result<Self, SqlError> {
        self.cmp(column, "=", value)
    }

    /// Add a comparison predicate if the filter value is present.
    ///
    /// The operator must be one of the fixed comparison set.
    pub fn cmp(
        mut self,
        column: &str,
        op: &str,
        value: Option<impl Into<Value>>,
    ) -> Result<Self, SqlError> {
        let column = ident(column)?;
        if !COMPARISON_OPS.contains(&op) {
            return Err(SqlError::InvalidOperator(op.to_string()));
        }
        if let Some(value) = value {
            self.params.push(value.into());
            self.clauses
                .push(format!("{} {} ${}", column, op, self.params.len()));
        }
        Ok(self)
    }

    /// True when no filter produced a clause.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of bound parameters so far.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Render the clause: empty string, or ` WHERE a = $1 AND b = $2`.
    pub fn clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Consume the builder, returning the clause and its parameters.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        let clause = self.clause();
        (clause, self.params)
    }
}

/// Build an INSERT statement from a column-to-value map.
///
/// Column names are validated identifiers; values become `$n` parameters.
pub fn insert_statement(
    table: &str,
    values: &serde_json::Map<String, Value>,
) -> Result<(String, Vec<Value>), SqlError> {
    let table = ident(table)?;
    if values.is_empty() {
        return Err(SqlError::NoValues);
    }

    let mut columns = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    let mut params = Vec::with_capacity(values.len());
    for (i, (column, value)) in values.iter().enumerate() {
        columns.push(ident(column)?);
        placeholders.push(format!("${}", i + 1));
        params.push(value.clone());
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    );
    Ok((sql, params))
}
