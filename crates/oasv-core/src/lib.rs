//! # oasv-core — Foundational Types for the oasv Toolkit
//!
//! This crate is the leaf of the workspace DAG. It defines the primitives
//! shared by the structural validator and the schema-delegating validator:
//!
//! 1. **Runtime kind classification.** [`JsonKind`] names the six runtime
//!    kinds a JSON value can have. Null is its own kind — a null value is
//!    never classified as an object or an array, so every comparison
//!    against a declared type sees it as a distinct scalar.
//!
//! 2. **Document loading.** [`load_document`] reads a specification,
//!    shape, or body file from disk, parsing YAML (`.yaml`/`.yml`) or
//!    JSON by extension and returning a single `serde_json::Value` tree.
//!    YAML input is converted with [`yaml_to_json_value`], rejecting the
//!    YAML-only constructs (non-finite floats, structured map keys) that
//!    have no JSON representation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `oasv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod kind;

pub use document::{load_document, yaml_to_json_value, DocumentError};
pub use kind::JsonKind;
