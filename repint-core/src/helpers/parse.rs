//! Construction front-end: validate an `[element, length]` pair.

use serde::Serialize;
use serde_json::Value;

use crate::{Config, Int, RepError, RepInt, XLen};

/// A validated construction request.
///
/// Parsing copies the element and length out of the caller's JSON, so a
/// handle built from it can never observe later changes to that input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepSpec {
    /// Repeated element.
    pub value: Int,
    /// Number of elements.
    pub length: XLen,
}

impl RepSpec {
    /// Parse a JSON pair such as `[7, 5]` or `[null, 3]`.
    pub fn parse(text: &str) -> Result<Self, RepError> {
        let json: Value = serde_json::from_str(text)
            .map_err(|e| RepError::invalid_spec(format!("not valid JSON: {}", e)))?;
        Self::from_json(&json)
    }

    /// Validate an already-parsed JSON value.
    pub fn from_json(json: &Value) -> Result<Self, RepError> {
        let items = json.as_array().ok_or_else(|| {
            RepError::invalid_spec(format!(
                "expected an [element, length] pair, got {}",
                kind_name(json)
            ))
        })?;
        let [element, length] = items.as_slice() else {
            return Err(RepError::invalid_spec(format!(
                "expected exactly 2 entries, got {}",
                items.len()
            )));
        };

        let value = parse_element(element)?;
        let length = length.as_u64().ok_or_else(|| {
            RepError::invalid_spec(format!(
                "length must be a non-negative integer, got {}",
                length
            ))
        })?;

        Ok(Self { value, length })
    }

    /// Build a lazy handle with default configuration.
    pub fn build(self) -> RepInt {
        RepInt::new(self.value, self.length)
    }

    /// Build a lazy handle with the given configuration.
    pub fn build_with(self, config: &Config) -> RepInt {
        RepInt::with_config(self.value, self.length, config)
    }
}

fn parse_element(element: &Value) -> Result<Int, RepError> {
    match element {
        Value::Null => Ok(Int::Na),
        Value::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Int::from_raw)
            .filter(|v| !v.is_na())
            // Anything that is not a 32-bit integer is a double to the host.
            .ok_or_else(|| RepError::unsupported_element_kind("double")),
        other => Err(RepError::unsupported_element_kind(kind_name(other))),
    }
}

fn kind_name(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "logical",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "double",
        Value::String(_) => "character",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pair() {
        let spec = RepSpec::parse("[7, 5]").unwrap();
        assert_eq!(spec.value, Int::Value(7));
        assert_eq!(spec.length, 5);
    }

    #[test]
    fn test_parse_missing_element() {
        let spec = RepSpec::parse("[null, 3]").unwrap();
        assert_eq!(spec.value, Int::Na);
        assert_eq!(spec.length, 3);
    }

    #[test]
    fn test_not_a_pair() {
        for bad in [json!(7), json!([]), json!([1]), json!([1, 2, 3]), json!({"a": 1})] {
            let err = RepSpec::from_json(&bad).unwrap_err();
            assert_eq!(err.error_type(), "invalid_spec", "input: {}", bad);
        }
    }

    #[test]
    fn test_unsupported_element_kinds() {
        for bad in [
            json!([1.5, 2]),
            json!(["a", 2]),
            json!([true, 2]),
            json!([[1], 2]),
            json!([4_000_000_000i64, 2]),
            json!([i32::MIN, 2]),
        ] {
            let err = RepSpec::from_json(&bad).unwrap_err();
            assert_eq!(err.error_type(), "unsupported_element_kind", "input: {}", bad);
        }
    }

    #[test]
    fn test_bad_length() {
        for bad in [json!([1, -1]), json!([1, 2.5]), json!([1, "3"]), json!([1, null])] {
            let err = RepSpec::from_json(&bad).unwrap_err();
            assert_eq!(err.error_type(), "invalid_spec", "input: {}", bad);
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = RepSpec::parse("[7, ").unwrap_err();
        assert_eq!(err.error_type(), "invalid_spec");
    }

    #[test]
    fn test_built_handle_is_independent_of_input() {
        let mut input = json!([9, 4]);
        let v = RepSpec::from_json(&input).unwrap().build();
        input[0] = json!(1);
        input[1] = json!(100);
        assert_eq!(v.len(), 4);
        assert_eq!(v.elt(0).unwrap(), Int::Value(9));
    }

    #[test]
    fn test_build_with_config() {
        let config = Config {
            max_materialize_len: Some(2),
            ..Config::default()
        };
        let v = RepSpec::parse("[1, 3]").unwrap().build_with(&config);
        assert_eq!(v.realize().unwrap_err().error_type(), "materialize_limit");
    }
}
