//! # Validate Subcommand
//!
//! Validates a recorded JSON body against the schema an OpenAPI
//! specification declares for an endpoint, method, and target (request
//! body or response status).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use oasv_schema::{SchemaTarget, SpecDocument, SpecValidationError, SpecValidator};

/// Arguments for the `oasv validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the OpenAPI/Swagger specification (JSON or YAML).
    #[arg(long)]
    pub spec: PathBuf,

    /// Path to the recorded JSON body to validate.
    #[arg(long)]
    pub data: PathBuf,

    /// Endpoint path as it appears in the specification (e.g. /user).
    #[arg(long)]
    pub endpoint: String,

    /// HTTP method (case-insensitive).
    #[arg(long)]
    pub method: String,

    /// Validate against the operation's request body schema.
    #[arg(long, conflicts_with = "status")]
    pub request_body: bool,

    /// Validate against the response schema for this status code key.
    #[arg(long)]
    pub status: Option<String>,

    /// Print violations as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the body conforms, 1 on validation
/// failure, 2 on lookup or usage errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let target = match (&args.status, args.request_body) {
        (Some(status), false) => SchemaTarget::Response {
            status: status.clone(),
        },
        (None, true) => SchemaTarget::RequestBody,
        _ => {
            println!("Usage: oasv validate requires exactly one of --request-body or --status <code>");
            return Ok(2);
        }
    };

    let spec = SpecDocument::from_file(&args.spec)
        .with_context(|| format!("failed to load specification {}", args.spec.display()))?;
    let body = oasv_core::load_document(&args.data)
        .with_context(|| format!("failed to load body {}", args.data.display()))?;

    let method = args.method.to_uppercase();
    tracing::debug!(
        endpoint = %args.endpoint,
        method = %method,
        "validating recorded body against specification"
    );

    let validator = SpecValidator::new(spec);
    match validator.validate(&body, &args.endpoint, &method, &target) {
        Ok(()) => {
            println!("OK: {} conforms to {} {}", args.data.display(), method, args.endpoint);
            Ok(0)
        }
        Err(SpecValidationError::ValidationFailed {
            count, violations, ..
        }) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&violations)?);
            } else {
                println!(
                    "FAIL: {} violation(s) for {} {}",
                    count, method, args.endpoint
                );
                for violation in &violations {
                    println!("{violation}");
                }
            }
            Ok(1)
        }
        Err(SpecValidationError::Locate(e)) => {
            println!("FAIL: {e}");
            Ok(2)
        }
        Err(e) => Err(e).context("schema validation failed to run"),
    }
}
