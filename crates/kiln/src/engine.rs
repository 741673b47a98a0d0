//! Translation into the engine's native option shape, and the engine seam.
//!
//! The bundling engine itself is an external collaborator: it receives a
//! translated [`EngineOptions`] snapshot and either completes or fails. Any
//! field left unset after translation is omitted from serialization
//! entirely, never emitted as null.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use kiln_config::{BuildConfig, Format, Platform, Sourcemap};
use serde::Serialize;
use thiserror::Error;

/// Failure reported by the wrapped engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{message}")]
    Failed {
        message: String,
        stack: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The wrapped bundler engine.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn build(&self, options: &EngineOptions) -> Result<(), EngineError>;
}

/// Banner/footer text in the engine's `{ js: ... }` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsText {
    pub js: String,
}

/// Resolved configuration translated to the engine's option names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptions {
    pub entry: Vec<PathBuf>,

    pub out_dir: PathBuf,

    pub format: Vec<Format>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dts: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemap: Option<Sourcemap>,

    /// Always false; cleaning is handled by the builder, not the engine.
    pub clean: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Code-generation target derived from the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<JsText>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<JsText>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub define: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsconfig: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitting: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub treeshake: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pure: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_names: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shims: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_output: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafile: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,

    pub skip_node_modules_bundle: bool,

    /// Mirror of `external` when bundling is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_external: Option<Vec<String>>,
}

impl EngineOptions {
    /// Translate a resolved configuration into engine options.
    pub fn from_config(config: &BuildConfig) -> Self {
        let bundling = config.bundle != Some(false);

        Self {
            entry: config.entries().to_vec(),
            out_dir: config
                .out_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("./dist")),
            format: config.formats().to_vec(),
            dts: config.dts,
            sourcemap: config.sourcemap,
            clean: false,
            external: config.external.clone(),
            minify: config.minify,
            platform: config.platform,
            target: config.platform.and_then(codegen_target),
            global_name: config.global_name.clone(),
            banner: config.banner.clone().map(|js| JsText { js }),
            footer: config.footer.clone().map(|js| JsText { js }),
            define: config.define.clone(),
            env: config.env.clone(),
            tsconfig: config.tsconfig.clone(),
            splitting: config.splitting,
            treeshake: config.treeshake,
            pure: config.pure.clone(),
            keep_names: config.keep_names,
            bundle: config.bundle,
            shims: config.shims,
            legacy_output: config.legacy_output,
            metafile: config.metafile,
            silent: config.silent,
            skip_node_modules_bundle: true,
            no_external: if bundling {
                None
            } else {
                config.external.clone()
            },
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn codegen_target(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Node => Some("node18"),
        Platform::Browser => Some("es2020"),
        Platform::Neutral => None,
    }
}
