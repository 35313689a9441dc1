//! # Delegated Schema Validation
//!
//! Validates a recorded body against the schema fragment located in a
//! specification document, using the `jsonschema` engine. All violations
//! are collected — the engine is not fail-fast — and carry the JSON
//! Pointer of the violating field plus the schema path that rejected it.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::document::{LocateError, SchemaTarget, SpecDocument};

/// URI under which the full specification document is registered for
/// `$ref` resolution. Never fetched; the retriever resolves it from
/// memory.
const SPEC_DOCUMENT_URI: &str = "https://oasv.dev/schemas/spec-document.json";

/// A single violation reported by the schema engine.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// JSON Pointer to the violating field in the validated body.
    pub instance_path: String,
    /// JSON Pointer within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Errors returned by delegated validation.
#[derive(Error, Debug)]
pub enum SpecValidationError {
    /// The endpoint/method/status combination did not resolve to a
    /// schema. Lookup failures are distinct from validation failures.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The located fragment could not be compiled by the engine.
    #[error("failed to compile schema for {method} {endpoint}: {reason}")]
    SchemaCompile {
        /// The HTTP method as given by the caller.
        method: String,
        /// The endpoint path as given by the caller.
        endpoint: String,
        /// Human-readable reason from the engine.
        reason: String,
    },

    /// The body did not conform to the located schema.
    #[error("{count} validation error(s) for {method} {endpoint}")]
    ValidationFailed {
        /// The HTTP method as given by the caller.
        method: String,
        /// The endpoint path as given by the caller.
        endpoint: String,
        /// Number of violations found.
        count: usize,
        /// Individual violation details.
        violations: Vec<Violation>,
    },
}

/// Resolves `$ref` URIs against the in-memory specification document.
///
/// The only registered resource is the specification itself; any other
/// URI is an error rather than a network fetch.
struct SpecRetriever {
    root: Value,
}

impl jsonschema::Retrieve for SpecRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        if uri_str == SPEC_DOCUMENT_URI {
            Ok(self.root.clone())
        } else {
            Err(format!("unresolved schema reference: {uri_str}").into())
        }
    }
}

/// Validates recorded request and response bodies against the schemas
/// of one specification document.
#[derive(Debug, Clone)]
pub struct SpecValidator {
    spec: SpecDocument,
}

impl SpecValidator {
    /// Create a validator over a specification document.
    pub fn new(spec: SpecDocument) -> Self {
        Self { spec }
    }

    /// The wrapped specification document.
    pub fn spec(&self) -> &SpecDocument {
        &self.spec
    }

    /// Validate a body against the schema for an endpoint, method, and
    /// target.
    ///
    /// The fragment is compiled as a `$ref` into the full specification
    /// document, so `#/components/...` references inside it resolve.
    /// Compilation happens per call; there is no validator cache.
    ///
    /// # Errors
    ///
    /// Returns [`SpecValidationError::Locate`] when no schema exists for
    /// the combination, [`SpecValidationError::SchemaCompile`] when the
    /// fragment is not a compilable schema, and
    /// [`SpecValidationError::ValidationFailed`] with every violation
    /// when the body does not conform.
    pub fn validate(
        &self,
        body: &Value,
        endpoint: &str,
        method: &str,
        target: &SchemaTarget,
    ) -> Result<(), SpecValidationError> {
        // Resolve first so a missing schema surfaces as a lookup error,
        // not an engine error.
        self.spec.locate_schema(endpoint, method, target)?;

        let pointer = SpecDocument::schema_pointer(endpoint, method, target);
        let ref_schema = serde_json::json!({
            "$ref": format!("{SPEC_DOCUMENT_URI}#{}", fragment_encode(&pointer))
        });

        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .with_retriever(SpecRetriever {
                root: self.spec.root().clone(),
            })
            .build(&ref_schema)
            .map_err(|e| SpecValidationError::SchemaCompile {
                method: method.to_string(),
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let violations: Vec<Violation> = validator
            .iter_errors(body)
            .map(|err| Violation {
                instance_path: err.instance_path.to_string(),
                schema_path: err.schema_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SpecValidationError::ValidationFailed {
                method: method.to_string(),
                endpoint: endpoint.to_string(),
                count: violations.len(),
                violations,
            })
        }
    }
}

/// Percent-encode a JSON Pointer for use as a URI fragment (RFC 3986).
///
/// Endpoint keys may contain characters like `{`/`}` (path templates)
/// that are not valid raw in a fragment.
fn fragment_encode(pointer: &str) -> String {
    let mut out = String::with_capacity(pointer.len());
    for byte in pointer.bytes() {
        let allowed = byte.is_ascii_alphanumeric()
            || matches!(
                byte,
                b'-' | b'.'
                    | b'_'
                    | b'~'
                    | b'!'
                    | b'$'
                    | b'&'
                    | b'\''
                    | b'('
                    | b')'
                    | b'*'
                    | b'+'
                    | b','
                    | b';'
                    | b'='
                    | b':'
                    | b'@'
                    | b'/'
                    | b'?'
            );
        if allowed {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_spec() -> SpecDocument {
        SpecDocument::new(json!({
            "openapi": "3.0.0",
            "paths": {
                "/user": {
                    "post": {
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["name"],
                                        "properties": {
                                            "name": { "type": "string" },
                                            "age": { "type": "integer" }
                                        },
                                        "additionalProperties": false
                                    }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/User"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "User": {
                        "type": "object",
                        "required": ["id", "name"],
                        "properties": {
                            "id": { "type": "integer" },
                            "name": { "type": "string" },
                            "age": { "type": "integer" }
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn valid_request_body_passes() {
        let validator = SpecValidator::new(user_spec());
        let body = json!({ "name": "John Doe", "age": 30 });
        validator
            .validate(&body, "/user", "POST", &SchemaTarget::RequestBody)
            .unwrap();
    }

    #[test]
    fn invalid_request_body_collects_violations() {
        let validator = SpecValidator::new(user_spec());
        // Missing required "name", wrong type for "age", extra field.
        let body = json!({ "age": "thirty", "nickname": "JD" });
        let err = validator
            .validate(&body, "/user", "POST", &SchemaTarget::RequestBody)
            .unwrap_err();

        let SpecValidationError::ValidationFailed {
            count, violations, ..
        } = &err
        else {
            panic!("expected ValidationFailed, got: {err}");
        };
        assert_eq!(*count, violations.len());
        assert!(*count >= 2, "expected multiple violations, got {count}");
        assert!(violations
            .iter()
            .any(|v| v.message.contains("name")), "missing required 'name' should be reported: {violations:?}");
    }

    #[test]
    fn response_schema_ref_resolves_through_components() {
        let validator = SpecValidator::new(user_spec());
        let target = SchemaTarget::Response {
            status: "201".to_string(),
        };

        let ok = json!({ "id": 1, "name": "John Doe", "age": 30 });
        validator.validate(&ok, "/user", "POST", &target).unwrap();

        let bad = json!({ "name": "John Doe" });
        let err = validator
            .validate(&bad, "/user", "POST", &target)
            .unwrap_err();
        assert!(matches!(
            err,
            SpecValidationError::ValidationFailed { .. }
        ));
    }

    #[test]
    fn missing_schema_is_a_lookup_error() {
        let validator = SpecValidator::new(user_spec());
        let err = validator
            .validate(
                &json!({}),
                "/user",
                "GET",
                &SchemaTarget::RequestBody,
            )
            .unwrap_err();
        assert!(matches!(err, SpecValidationError::Locate(_)));
    }

    #[test]
    fn violation_display_formats_paths() {
        let v = Violation {
            instance_path: "/age".to_string(),
            schema_path: "/properties/age/type".to_string(),
            message: "\"thirty\" is not of type \"integer\"".to_string(),
        };
        assert!(v.to_string().starts_with("  /age: "));

        let root = Violation {
            instance_path: String::new(),
            schema_path: "/required".to_string(),
            message: "\"name\" is a required property".to_string(),
        };
        assert!(root.to_string().contains("(root)"));
    }

    #[test]
    fn templated_endpoint_validates_through_encoded_fragment() {
        let spec = SpecDocument::new(json!({
            "paths": {
                "/user/{id}": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": { "id": { "type": "integer" } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }));
        let validator = SpecValidator::new(spec);
        let target = SchemaTarget::Response {
            status: "200".to_string(),
        };
        validator
            .validate(&json!({ "id": 7 }), "/user/{id}", "GET", &target)
            .unwrap();
    }

    #[test]
    fn fragment_encoding_escapes_template_braces() {
        assert_eq!(
            fragment_encode("/paths/~1user~1{id}/get"),
            "/paths/~1user~1%7Bid%7D/get"
        );
        // Plain pointers pass through untouched.
        assert_eq!(fragment_encode("/paths/~1user/post"), "/paths/~1user/post");
    }

    #[test]
    fn repeated_validation_is_stable() {
        let validator = SpecValidator::new(user_spec());
        let body = json!({ "name": "John Doe" });
        for _ in 0..3 {
            validator
                .validate(&body, "/user", "POST", &SchemaTarget::RequestBody)
                .unwrap();
        }
    }
}
