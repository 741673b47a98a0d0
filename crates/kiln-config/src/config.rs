//! The central build configuration value object.
//!
//! One struct serves as both the partial configuration (any subset of fields
//! absent) and the resolved configuration handed to the engine driver. Every
//! field is an `Option` so "unset" stays distinct from an explicit value —
//! the resolver's tri-state preset backfill depends on that distinction.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::types::{Entry, Format, Platform, Sourcemap, Target};

/// Build configuration, shaped like the config files users write.
///
/// Wire names are camelCase (`outDir`, `globalName`, `keepNames`), matching
/// the config-file shape consumed by the loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Entry points: a bare path or a list of paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    /// Output directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Output module formats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<Format>>,

    /// Named preset selecting a deployment shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    /// Generate declaration files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dts: Option<bool>,

    /// Source map generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<Sourcemap>,

    /// Clean the output directory before building
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,

    /// Module specifiers excluded from bundling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<Vec<String>>,

    /// Minify output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,

    /// Engine code-generation platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Global variable name for iife/umd bundles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,

    /// Text prepended to every output file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    /// Text appended to every output file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Compile-time constant replacements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub define: Option<BTreeMap<String, String>>,

    /// Environment variable replacements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,

    /// TypeScript configuration path; must exist if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsconfig: Option<PathBuf>,

    /// Code splitting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitting: Option<bool>,

    /// Tree shaking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treeshake: Option<bool>,

    /// Pure-function annotations for the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pure: Option<Vec<String>>,

    /// Preserve original names through minification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_names: Option<bool>,

    /// Bundle dependencies into the output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,

    /// Inject cjs/esm interop shims
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shims: Option<bool>,

    /// Emit legacy (cjs-flavored) output alongside esm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_output: Option<bool>,

    /// Emit engine metadata about the build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafile: Option<bool>,

    /// Suppress non-error output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,

    /// Emit extra diagnostic output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl BuildConfig {
    /// Create from a `serde_json::Value` (programmatic partial config).
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Convert to a `serde_json::Value`, omitting unset fields.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Entry points as a slice, regardless of the written shape.
    pub fn entries(&self) -> &[PathBuf] {
        self.entry.as_ref().map(Entry::as_slice).unwrap_or(&[])
    }

    /// Output formats, empty when unset.
    pub fn formats(&self) -> &[Format] {
        self.formats.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let config: BuildConfig = serde_json::from_str(
            r#"{
                "entry": "src/index.ts",
                "outDir": "build",
                "globalName": "MyLib",
                "keepNames": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.out_dir, Some(PathBuf::from("build")));
        assert_eq!(config.global_name.as_deref(), Some("MyLib"));
        assert_eq!(config.keep_names, Some(true));
    }

    #[test]
    fn unset_fields_are_omitted_from_serialization() {
        let config = BuildConfig {
            minify: Some(true),
            ..BuildConfig::default()
        };

        let value = config.to_value().unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["minify"], serde_json::json!(true));
    }

    #[test]
    fn explicit_false_survives_a_round_trip() {
        let config = BuildConfig {
            dts: Some(false),
            ..BuildConfig::default()
        };

        let restored = BuildConfig::from_value(config.to_value().unwrap()).unwrap();
        assert_eq!(restored.dts, Some(false));
    }
}
