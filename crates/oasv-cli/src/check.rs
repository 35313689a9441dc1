//! # Check Subcommand
//!
//! Checks a recorded JSON body against a simplified shape document using
//! the structural validator. Independent of `oasv validate`: no schema
//! engine, fail-fast on the first violation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use oasv_structural::{validate, ShapeNode};

/// Arguments for the `oasv check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the expected-shape document (JSON or YAML).
    #[arg(long)]
    pub shape: PathBuf,

    /// Path to the recorded JSON body to check.
    #[arg(long)]
    pub data: PathBuf,

    /// Print the violation as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when the body matches the shape, 1 on the first
/// structural violation. Malformed shape documents and unreadable files
/// propagate as operational errors.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let shape_doc = oasv_core::load_document(&args.shape)
        .with_context(|| format!("failed to load shape {}", args.shape.display()))?;
    let shape = ShapeNode::from_value(&shape_doc)
        .with_context(|| format!("invalid shape document {}", args.shape.display()))?;
    let body = oasv_core::load_document(&args.data)
        .with_context(|| format!("failed to load body {}", args.data.display()))?;

    tracing::debug!(
        shape = %args.shape.display(),
        data = %args.data.display(),
        "checking body against shape"
    );

    match validate(&body, &shape) {
        Ok(()) => {
            println!(
                "OK: {} matches {}",
                args.data.display(),
                args.shape.display()
            );
            Ok(0)
        }
        Err(violation) => {
            if args.json {
                let report = serde_json::json!({
                    "path": violation.path().to_string(),
                    "error": violation.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("FAIL: {violation}");
            }
            Ok(1)
        }
    }
}
