//! # Specification Documents
//!
//! Wraps a parsed OpenAPI/Swagger document and resolves the schema
//! fragment applicable to an endpoint, HTTP method, and validation
//! target. The document is treated as an opaque, already-parsed tree —
//! acquisition and structural validity of the specification itself are
//! the loader's concern.

use std::path::Path;

use oasv_core::{load_document, DocumentError};
use serde_json::Value;
use thiserror::Error;

/// Which schema inside an operation applies to the recorded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaTarget {
    /// The operation's request body schema.
    RequestBody,
    /// The response schema for one of the operation's status code keys.
    /// The key is kept as the raw string from the `responses` mapping,
    /// so `"201"`, `"2XX"`, and `"default"` are all addressable.
    Response {
        /// The status code key.
        status: String,
    },
}

/// A requested endpoint/method/status/content-type combination did not
/// resolve to a schema. Distinct from a validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// The specification declares no such operation.
    #[error("no operation found for {method} {endpoint}")]
    OperationNotFound {
        /// The HTTP method as given by the caller.
        method: String,
        /// The endpoint path as given by the caller.
        endpoint: String,
    },

    /// The operation exists but declares no JSON request body schema.
    #[error("no request body schema found for {method} {endpoint}")]
    RequestBodySchemaNotFound {
        /// The HTTP method as given by the caller.
        method: String,
        /// The endpoint path as given by the caller.
        endpoint: String,
    },

    /// The operation exists but declares no JSON response schema for the
    /// requested status code.
    #[error("no response schema found for status code {status} at {method} {endpoint}")]
    ResponseSchemaNotFound {
        /// The requested status code key.
        status: String,
        /// The HTTP method as given by the caller.
        method: String,
        /// The endpoint path as given by the caller.
        endpoint: String,
    },
}

/// A parsed OpenAPI/Swagger specification document.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    root: Value,
}

impl SpecDocument {
    /// Wrap an already-parsed specification tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Load a specification from a JSON or YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        Ok(Self::new(load_document(path)?))
    }

    /// The underlying document tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve the schema fragment for an endpoint, method, and target.
    ///
    /// Traverses `paths → endpoint → method → requestBody|responses[status]
    /// → content["application/json"] → schema`. The method is matched
    /// case-insensitively; the endpoint and status code must match the
    /// specification's keys exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`LocateError`] naming the missing segment.
    pub fn locate_schema(
        &self,
        endpoint: &str,
        method: &str,
        target: &SchemaTarget,
    ) -> Result<&Value, LocateError> {
        let operation = self
            .root
            .get("paths")
            .and_then(|paths| paths.get(endpoint))
            .and_then(|item| item.get(method.to_ascii_lowercase()))
            .ok_or_else(|| LocateError::OperationNotFound {
                method: method.to_string(),
                endpoint: endpoint.to_string(),
            })?;

        match target {
            SchemaTarget::RequestBody => operation
                .get("requestBody")
                .and_then(content_schema)
                .ok_or_else(|| LocateError::RequestBodySchemaNotFound {
                    method: method.to_string(),
                    endpoint: endpoint.to_string(),
                }),
            SchemaTarget::Response { status } => operation
                .get("responses")
                .and_then(|responses| responses.get(status))
                .and_then(content_schema)
                .ok_or_else(|| LocateError::ResponseSchemaNotFound {
                    status: status.clone(),
                    method: method.to_string(),
                    endpoint: endpoint.to_string(),
                }),
        }
    }

    /// RFC 6901 JSON Pointer from the document root to the schema
    /// fragment for the given endpoint/method/target.
    pub(crate) fn schema_pointer(endpoint: &str, method: &str, target: &SchemaTarget) -> String {
        let base = format!(
            "/paths/{}/{}",
            escape_pointer_token(endpoint),
            method.to_ascii_lowercase()
        );
        match target {
            SchemaTarget::RequestBody => {
                format!("{base}/requestBody/content/application~1json/schema")
            }
            SchemaTarget::Response { status } => format!(
                "{base}/responses/{}/content/application~1json/schema",
                escape_pointer_token(status)
            ),
        }
    }
}

/// Descend `content["application/json"].schema` under a request body or
/// response object.
fn content_schema(node: &Value) -> Option<&Value> {
    node.get("content")?.get("application/json")?.get("schema")
}

/// Escape a JSON Pointer reference token per RFC 6901.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
