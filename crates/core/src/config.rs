//! Generator configuration.
//!
//! Values come from the environment with fixed defaults:
//!
//! | Variable            | Default                                          |
//! |---------------------|--------------------------------------------------|
//! | `RPCGEN_SPEC`       | nearcore's published `openapi.json`              |
//! | `RPCGEN_OUTPUT_DIR` | `generated`                                      |
//! | `RPCGEN_CACHE_DIR`  | `~/.rpcgen/cache`                                |

use std::fmt;
use std::path::{Path, PathBuf};

/// Where nearcore publishes its JSON-RPC OpenAPI document.
pub const DEFAULT_SPEC_URL: &str =
    "https://raw.githubusercontent.com/near/nearcore/master/chain/jsonrpc/openapi/openapi.json";

pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// File name of the cached document inside the cache directory.
pub const CACHE_FILE_NAME: &str = "openapi.json";

/// Where the OpenAPI document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    Url(String),
    Path(PathBuf),
}

impl SpecSource {
    /// `http://` and `https://` values are URLs, anything else is a path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl fmt::Display for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Names of the three generated files inside the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub types: String,
    pub methods: String,
    pub client: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            types: "types.rs".to_string(),
            methods: "methods.rs".to_string(),
            client: "client.rs".to_string(),
        }
    }
}

/// Everything a generator run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: SpecSource,
    /// Downloaded documents are stored here. Ignored for path sources.
    pub cache_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub files: OutputFiles,
}

impl GeneratorConfig {
    pub fn new(source: SpecSource, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            cache_path: None,
            output_dir: output_dir.into(),
            files: OutputFiles::default(),
        }
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Build the configuration from `RPCGEN_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source = lookup("RPCGEN_SPEC")
            .filter(|v| !v.is_empty())
            .map_or_else(|| SpecSource::Url(DEFAULT_SPEC_URL.to_string()), |v| SpecSource::parse(&v));

        let output_dir = lookup("RPCGEN_OUTPUT_DIR")
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

        let cache_dir = lookup("RPCGEN_CACHE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(default_cache_dir);

        Self {
            source,
            cache_path: cache_dir.map(|dir| dir.join(CACHE_FILE_NAME)),
            output_dir,
            files: OutputFiles::default(),
        }
    }

    pub fn types_path(&self) -> PathBuf {
        self.output_dir.join(&self.files.types)
    }

    pub fn methods_path(&self) -> PathBuf {
        self.output_dir.join(&self.files.methods)
    }

    pub fn client_path(&self) -> PathBuf {
        self.output_dir.join(&self.files.client)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn default_cache_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rpcgen").join("cache"))
}
