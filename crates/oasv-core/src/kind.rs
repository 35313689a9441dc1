//! # Runtime Kind Classification
//!
//! Names the runtime kind of a `serde_json::Value` for comparison against
//! declared schema types and for error reporting.
//!
//! ## Design
//!
//! Null is a kind of its own. Dynamic-language implementations of this
//! check tend to classify null as an object and then carve it back out
//! with an explicit null test; the enum makes the distinction total and
//! lets `match` prove every kind is handled.

use std::fmt;

use serde_json::Value;

/// The runtime kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number. JSON does not distinguish integral from
    /// fractional numbers at the value level.
    Number,
    /// A string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A mapping from field names to values.
    Object,
}

impl JsonKind {
    /// Classify a JSON value by its runtime kind.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// The lowercase kind name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_every_kind() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(42)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!(4.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([1, 2])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);
    }

    #[test]
    fn null_is_not_object() {
        // The whole point of the enum: null never classifies as object.
        assert_ne!(JsonKind::of(&json!(null)), JsonKind::Object);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(JsonKind::Object.to_string(), "object");
        assert_eq!(JsonKind::Null.to_string(), "null");
        assert_eq!(JsonKind::Number.to_string(), "number");
    }
}
