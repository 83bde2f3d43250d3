//! Fetching and validating the OpenAPI document.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::SpecSource;
use crate::error::{GenerateError, Result};
use crate::openapi::OpenApiSpec;
use crate::output::replace_file;

/// `openapi` versions this generator reads.
pub const SUPPORTED_VERSION: &str = "3.0.x";

fn is_supported_version(version: &str) -> bool {
    version == "3.0" || version.starts_with("3.0.")
}

/// Parse and validate a document.
///
/// Fails with [`GenerateError::SpecParse`] for invalid JSON or a missing
/// `openapi` field and [`GenerateError::UnsupportedVersion`] for anything
/// other than 3.0.x. Logs the version and `info` pairs on success.
pub fn parse_spec(json: &str) -> Result<OpenApiSpec> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| GenerateError::SpecParse(e.to_string()))?;

    let version = match document.get("openapi") {
        Some(Value::String(v)) => v.clone(),
        Some(other) => {
            return Err(GenerateError::SpecParse(format!(
                "'openapi' must be a string, found {other}"
            )));
        }
        None => {
            return Err(GenerateError::SpecParse(
                "missing top-level 'openapi' field".to_string(),
            ));
        }
    };
    if !is_supported_version(&version) {
        return Err(GenerateError::UnsupportedVersion {
            found: version,
            expected: SUPPORTED_VERSION.to_string(),
        });
    }

    let spec: OpenApiSpec =
        serde_json::from_value(document).map_err(|e| GenerateError::SpecParse(e.to_string()))?;

    info!(openapi = %spec.openapi, "Loaded OpenAPI spec");
    for (key, value) in &spec.info {
        match value {
            Value::String(s) => info!(key = %key, value = %s, "Spec info"),
            other => info!(key = %key, value = %other, "Spec info"),
        }
    }
    Ok(spec)
}

async fn fetch_url(url: &str) -> Result<String> {
    let fetch_error = |reason: String| GenerateError::SpecFetch {
        location: url.to_string(),
        reason,
    };

    debug!(url = %url, "Downloading OpenAPI spec");
    let response = reqwest::get(url)
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("HTTP {status}")));
    }

    response.text().await.map_err(|e| fetch_error(e.to_string()))
}

async fn read_path(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading OpenAPI spec");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GenerateError::SpecFetch {
            location: path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Load the document from `source` and validate it.
///
/// A downloaded document that validates is stored at `cache_path`, replacing
/// any earlier copy. A failed cache write is logged and does not fail the
/// load. Nothing is retried.
pub async fn load_spec(source: &SpecSource, cache_path: Option<&Path>) -> Result<OpenApiSpec> {
    let (text, downloaded) = match source {
        SpecSource::Url(url) => (fetch_url(url).await?, true),
        SpecSource::Path(path) => (read_path(path).await?, false),
    };

    let spec = parse_spec(&text)?;

    if downloaded && let Some(cache_path) = cache_path {
        if let Err(e) = replace_file(cache_path, &text) {
            warn!(error = %e, "Failed to cache OpenAPI spec");
        } else {
            debug!(path = %cache_path.display(), "Cached OpenAPI spec");
        }
    }

    Ok(spec)
}
