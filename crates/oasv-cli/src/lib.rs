//! # oasv-cli — CLI for the oasv Toolkit
//!
//! Provides the `oasv` command-line interface for validating recorded
//! HTTP traffic against API contracts.
//!
//! ## Subcommands
//!
//! - `oasv validate` — Resolve the schema for an endpoint/method/target
//!   inside an OpenAPI specification and validate a recorded body with
//!   the JSON Schema engine.
//! - `oasv check` — Check a recorded body against a simplified
//!   `type`/`properties`/`items` shape document with the structural
//!   validator.
//!
//! ## Exit Codes
//!
//! Both subcommands return 0 when the body conforms, 1 when it does
//! not, and 2 for lookup or usage errors. Operational errors (unreadable
//! files, malformed documents) propagate and exit 1 with a logged error.

pub mod check;
pub mod validate;
