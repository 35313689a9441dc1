//! # Recursive Structural Validation
//!
//! Walks a JSON value and an expected-shape tree in lockstep, depth
//! first, and fails at the first field whose presence or runtime kind
//! disagrees with the shape.
//!
//! ## Checking Discipline
//!
//! The walk is closed-world over the data's keys: every field present in
//! the data must be declared by the shape, and object fields are visited
//! in the data's own key order. The converse does not hold — a field the
//! shape declares but the data omits is not reported. Required-field
//! checking is the delegated engine's concern, not this walker's.

use oasv_core::JsonKind;
use serde_json::Value;
use thiserror::Error;

use crate::path::{FieldPath, PathSegment};
use crate::shape::ShapeNode;

/// A structural violation, located by its full field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A field present in the data is not declared in the shape.
    #[error("unexpected field '{path}': not declared in the expected shape")]
    UnexpectedField {
        /// Full path of the undeclared field.
        path: FieldPath,
    },

    /// A value's runtime kind disagrees with the shape's declared kind.
    #[error("type mismatch at '{path}': expected '{expected}', found '{actual}'")]
    TypeMismatch {
        /// Full path of the mismatched value.
        path: FieldPath,
        /// The kind the shape declares.
        expected: String,
        /// The runtime kind found in the data.
        actual: JsonKind,
    },
}

impl StructuralError {
    /// The path at which the violation was found.
    pub fn path(&self) -> &FieldPath {
        match self {
            StructuralError::UnexpectedField { path } => path,
            StructuralError::TypeMismatch { path, .. } => path,
        }
    }
}

/// Check a JSON value against an expected shape.
///
/// Succeeds silently when every field present in the value is declared
/// by the shape with a matching kind, recursively. Fails fast with the
/// first violation otherwise. Pure and deterministic: repeated calls
/// with the same inputs yield the same outcome.
///
/// # Errors
///
/// Returns [`StructuralError::UnexpectedField`] for a data field the
/// shape does not declare, or [`StructuralError::TypeMismatch`] when a
/// value's runtime kind disagrees with the declared kind.
pub fn validate(value: &Value, shape: &ShapeNode) -> Result<(), StructuralError> {
    validate_at(value, shape, &FieldPath::root())
}

fn validate_at(value: &Value, shape: &ShapeNode, path: &FieldPath) -> Result<(), StructuralError> {
    match value {
        Value::Object(fields) => {
            let ShapeNode::Object { properties } = shape else {
                return Err(type_mismatch(shape, JsonKind::Object, path));
            };
            for (name, field_value) in fields {
                let field_path = path.child(PathSegment::field(name));
                match properties.get(name) {
                    None => return Err(StructuralError::UnexpectedField { path: field_path }),
                    Some(field_shape) => validate_at(field_value, field_shape, &field_path)?,
                }
            }
            Ok(())
        }
        Value::Array(elements) => {
            let ShapeNode::Array { items } = shape else {
                return Err(type_mismatch(shape, JsonKind::Array, path));
            };
            // Every element is checked against the one items shape;
            // there is no per-index (tuple) typing.
            for (index, element) in elements.iter().enumerate() {
                validate_at(element, items, &path.child(PathSegment::Index(index)))?;
            }
            Ok(())
        }
        scalar => {
            // Null lands here: it is its own runtime kind, never an
            // object or an array.
            let actual = JsonKind::of(scalar);
            match shape {
                ShapeNode::Scalar(kind) if kind.accepts(actual) => Ok(()),
                _ => Err(type_mismatch(shape, actual, path)),
            }
        }
    }
}

fn type_mismatch(shape: &ShapeNode, actual: JsonKind, path: &FieldPath) -> StructuralError {
    StructuralError::TypeMismatch {
        path: path.clone(),
        expected: shape.kind_name().to_string(),
        actual,
    }
}
