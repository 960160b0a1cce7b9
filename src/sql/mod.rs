// ABOUTME: SQL fragment construction - identifier validation and the
// ABOUTME: optional-filter predicate builder with bound parameters.

mod builder;

pub use builder::*;
