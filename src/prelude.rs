// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use toolbus::prelude::*;` to get started quickly.

pub use crate::dispatch::{Dispatcher, ToolListing};
pub use crate::error::{RegistryError, SchemaError, ServeError, SqlError, ToolbusError};
pub use crate::rpc::{McpServer, RpcRequest, RpcResponse, ServerInfo};
pub use crate::schema::{ParamKind, ParamSpec, ToolSchema};
pub use crate::sql::{FilterBuilder, ident, insert_statement};
pub use crate::tool::{DuplicatePolicy, Envelope, FnTool, Registry, Tool};
pub use crate::tools::{
    DeleteRowsTool, InsertRowTool, ListTablesTool, QueryRowsTool, Row, SqlStore,
};
