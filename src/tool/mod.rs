// ABOUTME: Tool module - defines tools, the result envelope, and the registry.
// ABOUTME: Core abstraction for capabilities exposed to agent clients.

mod envelope;
mod registry;
mod traits;

pub use envelope::*;
pub use registry::*;
pub use traits::*;

#[cfg(test)]
mod registry_test;
