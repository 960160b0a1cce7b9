// ABOUTME: RPC module - server-side MCP protocol over JSON-RPC 2.0.
// ABOUTME: Wire types plus the method dispatch and stdio serve loop.

mod server;
mod types;

pub use server::*;
pub use types::*;
