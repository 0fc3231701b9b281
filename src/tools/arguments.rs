//! Typed access to `tools/call` arguments.
//!
//! A JSON `null` counts as absent everywhere. Type mismatches name the argument.

use crate::error::{ToolError, ToolResult};
use serde_json::{Map, Value};

/// The `arguments` object of a tool call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    /// Read `params.arguments`. Absent or `null` is an empty set of arguments.
    pub fn from_params(arguments: Option<&Value>) -> ToolResult<Self> {
        match arguments {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(map)) => Ok(Self(map.clone())),
            Some(other) => Err(invalid("arguments", format!("expected an object, got {}", kind(other)))),
        }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// A string argument that must be present.
    pub fn required_str(&self, name: &str) -> ToolResult<String> {
        self.optional_str(name)?
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    /// A string argument, or `default` when absent.
    pub fn str_or(&self, name: &str, default: &str) -> ToolResult<String> {
        Ok(self
            .optional_str(name)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// An integer argument, or `default` when absent.
    pub fn i64_or(&self, name: &str, default: i64) -> ToolResult<i64> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| invalid(name, format!("expected an integer, got {}", kind(value)))),
        }
    }

    /// A non-negative integer argument, or `default` when absent.
    pub fn usize_or(&self, name: &str, default: usize) -> ToolResult<usize> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => match value.as_u64() {
                Some(n) => usize::try_from(n).map_err(|_| invalid(name, "value too large".to_string())),
                None => Err(invalid(
                    name,
                    format!("expected a non-negative integer, got {}", kind(value)),
                )),
            },
        }
    }

    fn optional_str(&self, name: &str) -> ToolResult<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(invalid(name, format!("expected a string, got {}", kind(other)))),
        }
    }
}

fn invalid(name: &str, reason: String) -> ToolError {
    ToolError::InvalidArgument {
        name: name.to_string(),
        reason,
    }
}

/// Short description of a JSON value for error messages.
fn kind(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        Arguments::from_params(Some(&value)).unwrap()
    }

    #[test]
    fn test_absent_and_null_arguments_are_empty() {
        assert_eq!(Arguments::from_params(None).unwrap(), Arguments::default());
        assert_eq!(Arguments::from_params(Some(&Value::Null)).unwrap(), Arguments::default());
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let err = Arguments::from_params(Some(&json!([1, 2]))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { ref name, .. } if name == "arguments"));
    }

    #[test]
    fn test_required_string() {
        let a = args(json!({"token_symbol": "WETH", "empty": null}));

        assert_eq!(a.required_str("token_symbol").unwrap(), "WETH");
        assert_eq!(
            a.required_str("empty").unwrap_err(),
            ToolError::MissingArgument("empty".to_string())
        );
        assert_eq!(
            a.required_str("start_date").unwrap_err().to_string(),
            "Missing required argument: start_date"
        );
    }

    #[test]
    fn test_defaults_apply_to_absent_and_null() {
        let a = args(json!({"network": null}));

        assert_eq!(a.str_or("network", "ethereum").unwrap(), "ethereum");
        assert_eq!(a.str_or("sort_by", "tvl").unwrap(), "tvl");
        assert_eq!(a.i64_or("years", 10).unwrap(), 10);
        assert_eq!(a.usize_or("limit", 20).unwrap(), 20);
    }

    #[test]
    fn test_integer_arguments() {
        let a = args(json!({"years": 3, "limit": 5, "negative": -1, "float": 2.5, "text": "7"}));

        assert_eq!(a.i64_or("years", 10).unwrap(), 3);
        assert_eq!(a.i64_or("negative", 10).unwrap(), -1);
        assert_eq!(a.usize_or("limit", 20).unwrap(), 5);

        assert!(a.usize_or("negative", 20).is_err());
        assert!(a.i64_or("float", 10).is_err());

        let err = a.i64_or("text", 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for argument text: expected an integer, got string \"7\""
        );
    }

    #[test]
    fn test_wrong_type_names_argument() {
        let err = args(json!({"network": 1})).str_or("network", "ethereum").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for argument network: expected a string, got number 1"
        );
    }
}
