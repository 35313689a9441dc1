//! # oasv CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oasv_cli::check::{run_check, CheckArgs};
use oasv_cli::validate::{run_validate, ValidateArgs};

/// oasv — OpenAPI conformance checking for recorded traffic.
///
/// Validates recorded JSON request and response bodies against the
/// schemas of an OpenAPI/Swagger specification, or against standalone
/// simplified shape documents.
#[derive(Parser, Debug)]
#[command(name = "oasv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a recorded body against the schema an OpenAPI
    /// specification declares for an endpoint, method, and target.
    Validate(ValidateArgs),

    /// Check a recorded body against a simplified shape document with
    /// the structural validator.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Check(args) => run_check(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
