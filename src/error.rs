// ABOUTME: Defines all error types for the toolbus library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under ToolbusError.

/// Top-level error type for the toolbus library.
#[derive(Debug, thiserror::Error)]
pub enum ToolbusError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("SQL error: {0}")]
    Sql(#[from] SqlError),

    #[error("Serve error: {0}")]
    Serve(#[from] ServeError),
}

/// Errors from tool registration and lookup.
///
/// Registration failures are programmer errors and may be treated as fatal
/// at startup. Lookup failures are converted to envelope values by the
/// dispatcher and never cross the boundary as raised errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("tool name must not be empty")]
    EmptyName,

    #[error("tool '{0}' is already registered")]
    Duplicate(String),

    #[error("tool '{0}' not found")]
    NotFound(String),
}

/// Errors from argument validation against a tool's declared schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required argument '{0}'")]
    MissingRequired(String),

    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("argument '{name}' must be of type {expected}")]
    WrongType { name: String, expected: &'static str },

    #[error("arguments must be a JSON object")]
    NotAnObject,
}

/// Errors from SQL fragment construction.
#[derive(Debug, thiserror::Error)]
pub enum SqlError {
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("invalid comparison operator '{0}'")]
    InvalidOperator(String),

    #[error("statement has no column values")]
    NoValues,
}

/// Errors from the MCP serve loop.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
