//! # oasv-schema — Schema Location & Delegated Validation
//!
//! Resolves the schema fragment that applies to a recorded request or
//! response inside a parsed OpenAPI/Swagger document, then hands the
//! body and the fragment to the `jsonschema` engine (Draft 2020-12) and
//! reports structured violations.
//!
//! ## Lookup vs Validation
//!
//! Failing to *find* a schema (unknown endpoint, method, or status code)
//! is a [`LocateError`] — a distinct failure class from the data not
//! *conforming* to a found schema
//! ([`SpecValidationError::ValidationFailed`]). Callers that record
//! traffic against a drifting specification rely on telling the two
//! apart.
//!
//! ## `$ref` Resolution
//!
//! Fragments are validated through a `$ref` into the full specification
//! document, registered under a fixed URI with a local
//! [`jsonschema::Retrieve`] implementation. References like
//! `#/components/schemas/...` inside a fragment therefore resolve
//! against the specification, and no network retrieval ever happens.

pub mod document;
pub mod validate;

pub use document::{LocateError, SchemaTarget, SpecDocument};
pub use validate::{SpecValidationError, SpecValidator, Violation};
