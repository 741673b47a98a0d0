//! The hardcoded baseline configuration.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::types::{Entry, Format, Platform, Sourcemap, Target};

/// Baseline configuration, the lowest-precedence merge layer.
///
/// Returns a fresh value on every call.
pub fn defaults() -> BuildConfig {
    BuildConfig {
        entry: Some(Entry::One(PathBuf::from("./src/index.ts"))),
        out_dir: Some(PathBuf::from("./dist")),
        formats: Some(vec![Format::Cjs, Format::Esm]),
        target: Some(Target::Library),
        dts: Some(true),
        sourcemap: Some(Sourcemap::Enabled(true)),
        clean: Some(false),
        external: Some(Vec::new()),
        minify: Some(false),
        platform: Some(Platform::Neutral),
        bundle: Some(false),
        treeshake: Some(true),
        keep_names: Some(false),
        shims: Some(true),
        legacy_output: Some(false),
        metafile: Some(false),
        silent: Some(false),
        verbose: Some(false),
        ..BuildConfig::default()
    }
}
