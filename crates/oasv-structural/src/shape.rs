//! # Shape Model
//!
//! Expected-shape trees parsed from simplified JSON-Schema-like
//! documents. A shape node recognizes exactly three fields: `type`
//! (required), `properties` (object shapes), and `items` (array shapes).
//! Anything else in the document — `description`, `format`, `required`,
//! and the rest of the JSON Schema vocabulary — is ignored.

use std::collections::HashMap;

use oasv_core::JsonKind;
use serde_json::Value;
use thiserror::Error;

use crate::path::{FieldPath, PathSegment};

/// Scalar type names a shape can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// A JSON string.
    String,
    /// An integral number. At the value level JSON numbers carry no
    /// integral/fractional distinction, so `integer` accepts any number.
    Integer,
    /// Any JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// The `null` literal.
    Null,
}

impl ScalarKind {
    /// Parse a declared scalar type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(ScalarKind::String),
            "integer" => Some(ScalarKind::Integer),
            "number" => Some(ScalarKind::Number),
            "boolean" => Some(ScalarKind::Boolean),
            "null" => Some(ScalarKind::Null),
            _ => None,
        }
    }

    /// The declared type name.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => "null",
        }
    }

    /// Whether a runtime kind satisfies this declared kind.
    pub fn accepts(self, actual: JsonKind) -> bool {
        match self {
            ScalarKind::String => actual == JsonKind::String,
            ScalarKind::Integer | ScalarKind::Number => actual == JsonKind::Number,
            ScalarKind::Boolean => actual == JsonKind::Boolean,
            ScalarKind::Null => actual == JsonKind::Null,
        }
    }
}

/// A node in an expected-shape tree.
///
/// The variant is the node's declared `type`. `properties` exists only
/// on object shapes and `items` only on array shapes, so a constructed
/// tree cannot violate the shape grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeNode {
    /// `type: object` with the declared field shapes.
    Object {
        /// Mapping from field name to the field's expected shape.
        properties: HashMap<String, ShapeNode>,
    },
    /// `type: array` with a single element shape applied to every index.
    Array {
        /// Expected shape of each element.
        items: Box<ShapeNode>,
    },
    /// A scalar `type`.
    Scalar(ScalarKind),
}

/// Errors found while parsing a shape document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A shape node was not a JSON object.
    #[error("shape node at '{at}' is not an object")]
    NotAnObject {
        /// Location of the offending node within the shape document.
        at: FieldPath,
    },

    /// A shape node had no string `type` field.
    #[error("shape node at '{at}' is missing a string 'type' field")]
    MissingType {
        /// Location of the offending node within the shape document.
        at: FieldPath,
    },

    /// A shape node declared a type name outside the recognized set.
    #[error("shape node at '{at}' declares unknown type '{type_name}'")]
    UnknownType {
        /// Location of the offending node within the shape document.
        at: FieldPath,
        /// The unrecognized type name.
        type_name: String,
    },

    /// An object shape carried a non-object `properties` field.
    #[error("'properties' at '{at}' must be an object")]
    InvalidProperties {
        /// Location of the offending node within the shape document.
        at: FieldPath,
    },

    /// An array shape carried no `items` field.
    #[error("array shape at '{at}' is missing 'items'")]
    MissingItems {
        /// Location of the offending node within the shape document.
        at: FieldPath,
    },
}

impl ShapeNode {
    /// Parse a shape document into a shape tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] naming the offending node when the
    /// document does not follow the shape grammar.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        Self::parse_at(value, &FieldPath::root())
    }

    fn parse_at(value: &Value, at: &FieldPath) -> Result<Self, ShapeError> {
        let Some(node) = value.as_object() else {
            return Err(ShapeError::NotAnObject { at: at.clone() });
        };

        let Some(type_name) = node.get("type").and_then(Value::as_str) else {
            return Err(ShapeError::MissingType { at: at.clone() });
        };

        match type_name {
            "object" => {
                let properties = match node.get("properties") {
                    // An object shape may omit `properties`; it then
                    // declares no fields and any data field is unexpected.
                    None => HashMap::new(),
                    Some(Value::Object(props)) => {
                        let mut parsed = HashMap::with_capacity(props.len());
                        for (name, child) in props {
                            let child_at = at.child(PathSegment::field(name));
                            parsed.insert(name.clone(), Self::parse_at(child, &child_at)?);
                        }
                        parsed
                    }
                    Some(_) => return Err(ShapeError::InvalidProperties { at: at.clone() }),
                };
                Ok(ShapeNode::Object { properties })
            }
            "array" => {
                let items = node
                    .get("items")
                    .ok_or_else(|| ShapeError::MissingItems { at: at.clone() })?;
                let items_at = at.child(PathSegment::field("items"));
                Ok(ShapeNode::Array {
                    items: Box::new(Self::parse_at(items, &items_at)?),
                })
            }
            other => ScalarKind::from_name(other)
                .map(ShapeNode::Scalar)
                .ok_or_else(|| ShapeError::UnknownType {
                    at: at.clone(),
                    type_name: other.to_string(),
                }),
        }
    }

    /// The declared kind name of this node, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeNode::Object { .. } => "object",
            ShapeNode::Array { .. } => "array",
            ShapeNode::Scalar(kind) => kind.name(),
        }
    }
}
