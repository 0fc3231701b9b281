//! Static tool descriptions and their `tools/list` JSON rendering.

use serde_json::{json, Map, Value};

/// JSON type of a tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    Integer,
}

impl ArgKind {
    fn schema_type(&self) -> &'static str {
        match self {
            ArgKind::String => "string",
            ArgKind::Integer => "integer",
        }
    }
}

/// Default value advertised for an optional argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgDefault {
    Str(&'static str),
    Int(i64),
}

impl ArgDefault {
    fn to_json(self) -> Value {
        match self {
            ArgDefault::Str(value) => json!(value),
            ArgDefault::Int(value) => json!(value),
        }
    }
}

/// One argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<ArgDefault>,
}

impl ArgSpec {
    /// A required argument without default.
    pub const fn required(name: &'static str, kind: ArgKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            default: None,
        }
    }

    /// An optional argument with a default value.
    pub const fn optional(
        name: &'static str,
        kind: ArgKind,
        description: &'static str,
        default: ArgDefault,
    ) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            default: Some(default),
        }
    }
}

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

impl ToolSpec {
    /// JSON-schema-like description of the arguments.
    ///
    /// `required` is only present when at least one argument is required.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for arg in self.args {
            let mut property = Map::new();
            property.insert("type".to_string(), json!(arg.kind.schema_type()));
            property.insert("description".to_string(), json!(arg.description));
            if let Some(default) = arg.default {
                property.insert("default".to_string(), default.to_json());
            }
            properties.insert(arg.name.to_string(), Value::Object(property));
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<&str> = self
            .args
            .iter()
            .filter(|arg| arg.required)
            .map(|arg| arg.name)
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        Value::Object(schema)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

/// The `tools/list` result for a tool table.
pub fn catalog_json(tools: &[ToolSpec]) -> Value {
    let tools: Vec<Value> = tools.iter().map(ToolSpec::to_json).collect();
    json!({ "tools": tools })
}
