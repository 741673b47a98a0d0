//! Config file discovery and loading.
//!
//! The loader probes a fixed ordered list of candidate file names in a root
//! directory, falling back to the `kiln` field of `package.json`. Loading
//! never fails hard: a candidate that exists but does not parse emits a
//! warning and probing continues, ultimately degrading to an empty partial
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::config::BuildConfig;

/// Candidate config file names, probed in order.
pub const CONFIG_CANDIDATES: [&str; 6] = [
    "kiln.config.toml",
    "kiln.config.json",
    "kiln.toml",
    "build.config.toml",
    "build.config.json",
    "build.toml",
];

/// Source of an externally supplied partial configuration.
///
/// The pipeline only ever sees this seam, so tests substitute a fixed
/// in-memory partial instead of touching the file system.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    /// Produce a partial configuration, or an empty one when nothing is
    /// found. Must not fail.
    async fn load(&self) -> BuildConfig;
}

/// File-based loader rooted at an explicit directory.
///
/// The root is threaded as a parameter rather than read from ambient process
/// state, so the pipeline is testable with arbitrary working roots.
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn parse_candidate(&self, path: &Path) -> Result<BuildConfig, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;

        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        }
    }

    fn package_manifest_config(&self) -> Option<BuildConfig> {
        let path = self.root.join("package.json");
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", path.display());
                return None;
            }
        };

        let manifest: Value = match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::warn!("failed to parse {}: {err}", path.display());
                return None;
            }
        };

        let field = manifest.get("kiln")?;
        if field.is_null() {
            return None;
        }

        match BuildConfig::from_value(field.clone()) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("invalid 'kiln' field in {}: {err}", path.display());
                None
            }
        }
    }
}

#[async_trait]
impl ConfigLoader for FsLoader {
    async fn load(&self) -> BuildConfig {
        for candidate in CONFIG_CANDIDATES {
            let path = self.root.join(candidate);
            if !path.exists() {
                continue;
            }

            match self.parse_candidate(&path) {
                Ok(config) => {
                    tracing::debug!("loaded config from {}", path.display());
                    return config;
                }
                Err(err) => {
                    tracing::warn!("failed to load config from {candidate}: {err}");
                }
            }
        }

        if let Some(config) = self.package_manifest_config() {
            tracing::debug!("loaded config from package.json 'kiln' field");
            return config;
        }

        BuildConfig::default()
    }
}

/// A loader returning a fixed partial configuration. For tests and
/// programmatic embedding.
pub struct StaticLoader {
    config: BuildConfig,
}

impl StaticLoader {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// A loader that finds nothing.
    pub fn empty() -> Self {
        Self::new(BuildConfig::default())
    }
}

#[async_trait]
impl ConfigLoader for StaticLoader {
    async fn load(&self) -> BuildConfig {
        self.config.clone()
    }
}
