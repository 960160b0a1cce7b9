// ABOUTME: Typed parameter schemas for tools - declaration-ordered descriptors
// ABOUTME: with validation, default filling, and JSON Schema rendering.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// The JSON type a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    /// The JSON Schema type name for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Object => "object",
            ParamKind::Array => "array",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Object => value.is_object(),
            ParamKind::Array => value.is_array(),
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParamSpec {
    /// Create a required parameter.
    pub fn required(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            default: None,
            description: None,
        }
    }

    /// Create an optional parameter.
    pub fn optional(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default: None,
            description: None,
        }
    }

    /// Attach a default value, filled in when the caller omits the argument.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Attach a human-readable description for the listing surface.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered set of parameter descriptors for one tool.
///
/// Declaration order is preserved: it is part of the listing contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
}

impl ToolSchema {
    /// Create an empty schema (a tool taking no arguments).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping declaration order.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    /// The declared parameters, in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Render as a JSON Schema object for tool listings.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for spec in &self.params {
            let mut prop = Map::new();
            prop.insert("type".into(), Value::String(spec.kind.type_name().into()));
            if let Some(desc) = &spec.description {
                prop.insert("description".into(), Value::String(desc.clone()));
            }
            if let Some(default) = &spec.default {
                prop.insert("default".into(), default.clone());
            }
            properties.insert(spec.name.clone(), Value::Object(prop));
            if spec.required {
                required.push(Value::String(spec.name.clone()));
            }
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Validate raw arguments against this schema.
    ///
    /// Required parameters must be present. Unknown keys are rejected rather
    /// than silently forwarded. Declared optional parameters with a default
    /// are filled in when absent. Returns the validated argument map.
    pub fn validate(&self, args: Value) -> Result<Map<String, Value>, SchemaError> {
        let mut args = match args {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => return Err(SchemaError::NotAnObject),
        };

        if let Some(unknown) = args.keys().find(|k| !self.params.iter().any(|p| &p.name == *k)) {
            return Err(SchemaError::UnknownArgument(unknown.clone()));
        }

        for spec in &self.params {
            if let Some(value) = args.get(&spec.name) {
                if !value.is_null() {
                    if !spec.kind.matches(value) {
                        return Err(SchemaError::WrongType {
                            name: spec.name.clone(),
                            expected: spec.kind.type_name(),
                        });
                    }
                    continue;
                }
            }

            // Absent, or explicit null (treated as absent).
            if let Some(default) = &spec.default {
                args.insert(spec.name.clone(), default.clone());
            } else if spec.required {
                return Err(SchemaError::MissingRequired(spec.name.clone()));
            } else {
                args.remove(&spec.name);
            }
        }

        Ok(args)
    }
}
