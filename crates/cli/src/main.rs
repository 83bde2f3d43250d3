//! rpcgen - generate a typed NEAR JSON-RPC client from nearcore's OpenAPI document.
//!
//! Configuration comes from `RPCGEN_*` environment variables; see
//! [`rpcgen_core::GeneratorConfig::from_env`].

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Crates whose logs are shown at the default level.
const LOG_TARGETS: [&str; 3] = ["rpcgen", "rpcgen_core", "rpcgen_transport"];

#[derive(Parser)]
#[command(
    name = "rpcgen",
    version,
    about = "Generate a typed NEAR JSON-RPC client from an OpenAPI document"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Fetch the OpenAPI document and write types, methods and client sources (default)
    Run,
}

fn is_plain_level(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

/// Filter directives for an `RPCGEN_LOG` value.
///
/// A plain level applies to the workspace crates; anything else is used as a
/// full filter spec.
fn log_filter(value: Option<&str>) -> String {
    let targets_at = |level: &str| {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    };
    match value {
        Some(level) if is_plain_level(level) => targets_at(&level.to_ascii_lowercase()),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => targets_at("info"),
    }
}

fn init_tracing() {
    let filter = log_filter(std::env::var("RPCGEN_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

/// `Error: top` followed by one `Caused by:` line per source.
fn error_report(err: &dyn Error) -> String {
    let mut report = format!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        report.push_str(&format!("\n  Caused by: {cause}"));
        source = cause.source();
    }
    report
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args = Args::parse();
    let config = rpcgen_core::GeneratorConfig::from_env();
    tracing::debug!(config = ?config, "Loaded configuration");

    let result = match args.command.unwrap_or(Command::Run) {
        Command::Run => rpcgen_core::run(&config).await,
    };

    if let Err(e) = result {
        eprintln!("{}", error_report(&e));
        std::process::exit(1);
    }
}
