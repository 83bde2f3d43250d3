//! One end-to-end generator run.

use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::loader::load_spec;
use crate::openapi::{GenerationReport, generate};
use crate::output::write_artifacts;

/// Load the document, generate all three artifacts, then write them.
///
/// Nothing is written unless loading and generation both succeed.
pub async fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    info!(source = %config.source, "Generating JSON-RPC client");

    let spec = load_spec(&config.source, config.cache_path.as_deref()).await?;
    let artifacts = generate(&spec)?;
    write_artifacts(config.output_dir(), &config.files, &artifacts)?;

    log_summary(config, &artifacts.report);
    Ok(artifacts.report)
}

fn log_summary(config: &GeneratorConfig, report: &GenerationReport) {
    info!(
        output_dir = %config.output_dir().display(),
        declarations = report.declarations(),
        aliases = report.aliases,
        records = report.records,
        unions = report.unions,
        empty_markers = report.empty_markers,
        methods = report.methods,
        skipped = report.skipped_paths.len(),
        "Generation complete"
    );
}
