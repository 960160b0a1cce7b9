// ABOUTME: Defines the Envelope type - the uniform {success, message, payload}
// ABOUTME: result shape returned for every invocation, success or failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The uniform result of a tool invocation.
///
/// Serializes as `{"success": …, "message": …}` with any payload entries
/// flattened in as additional top-level keys. This shape is part of the
/// external contract and is reproduced exactly for client compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the invocation succeeded.
    pub success: bool,

    /// Human-readable summary of the outcome.
    pub message: String,

    /// Optional structured data; shape varies per tool.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Envelope {
    /// Create a successful envelope.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload: Map::new(),
        }
    }

    /// Create a failure envelope.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload entry to the envelope.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.payload.insert(key.into(), v);
        }
        self
    }
}
