// ABOUTME: Root module for toolbus - in-process tool registry and dispatch
// ABOUTME: for MCP servers. Re-exports all public types from submodules.

pub mod dispatch;
pub mod error;
pub mod prelude;
pub mod rpc;
pub mod schema;
pub mod sql;
pub mod tool;
pub mod tools;

pub use error::ToolbusError;
