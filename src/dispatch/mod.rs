// ABOUTME: Dispatch module - translates list/call requests into registry
// ABOUTME: lookups and normalized result envelopes.

mod dispatcher;

pub use dispatcher::*;

#[cfg(test)]
mod dispatcher_test;
