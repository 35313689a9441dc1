//! # Document Loading
//!
//! Reads specification, shape, and body documents from disk into
//! `serde_json::Value` trees. The file extension selects the parser:
//! `.yaml`/`.yml` goes through `serde_yaml` and a YAML→JSON conversion,
//! everything else is parsed as JSON.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Errors produced while loading a document from disk.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read document {path}: {reason}")]
    Read {
        /// Path to the document that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The file contents could not be parsed into a JSON value tree.
    #[error("failed to parse document {path}: {reason}")]
    Parse {
        /// Path to the document that failed to parse.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },
}

/// Load a JSON or YAML document from `path` into a JSON value tree.
///
/// YAML documents are restricted to the JSON-compatible subset; values
/// that cannot be represented in JSON are reported as parse errors.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read and
/// [`DocumentError::Parse`] if the contents are not valid JSON/YAML.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| DocumentError::Parse {
                    path: path.display().to_string(),
                    reason: format!("invalid YAML: {e}"),
                })?;
            yaml_to_json_value(&yaml).map_err(|reason| DocumentError::Parse {
                path: path.display().to_string(),
                reason,
            })
        }
        _ => serde_json::from_str(&content).map_err(|e| DocumentError::Parse {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// YAML has a richer type system than JSON (tags, structured map keys,
/// non-finite floats). Specification documents use only the
/// JSON-compatible subset; anything outside it is an error.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => {
            // Ignore YAML tags, just convert the inner value.
            yaml_to_json_value(&tagged.value)
        }
    }
}
