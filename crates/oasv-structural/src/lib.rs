//! # oasv-structural — Recursive Structural Validation
//!
//! Checks whether a JSON value conforms to an expected-shape tree — a
//! simplified JSON-Schema-like description using the recognized fields
//! `type`, `properties`, and `items` — and reports the first violation
//! found with a full field path.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged-union shape trees.** [`ShapeNode`] carries `properties`
//!    only for object shapes and `items` only for array shapes, so the
//!    shape grammar's invariants hold by construction and `match` is
//!    exhaustive over the three structural cases.
//!
//! 2. **Closed world over the data's keys.** Validation walks the fields
//!    present in the data, in the data's own key order. A field the shape
//!    does not declare is an [`StructuralError::UnexpectedField`]; a field
//!    the shape declares but the data omits is not reported.
//!
//! 3. **Fail-fast.** The first violation aborts the traversal. There is
//!    no accumulated multi-error report; callers present the single
//!    [`StructuralError`] and decide how to continue.
//!
//! 4. **Paths by value.** [`FieldPath`] is an immutable segment list
//!    extended per recursive call and rendered (`friends[0].name`) only
//!    at the error-reporting boundary.
//!
//! ## Crate Policy
//!
//! - Depends only on `oasv-core` internally.
//! - Validation is a pure function over in-memory trees: no I/O, no
//!   shared state, deterministic for identical inputs.

pub mod path;
pub mod shape;
pub mod validate;

pub use path::{FieldPath, PathSegment};
pub use shape::{ScalarKind, ShapeError, ShapeNode};
pub use validate::{validate, StructuralError};
