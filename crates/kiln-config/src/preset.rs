//! Named build presets.
//!
//! Each preset is a fixed template of partial configuration values for a
//! common deployment shape. The registry maps target names to factory
//! functions and invokes the factory on every lookup, so callers always get
//! a fresh value and can never edit shared preset state.

use std::collections::BTreeMap;

use crate::types::{Format, Platform, Sourcemap, SourcemapMode, Target};

/// Immutable preset template.
///
/// These values are defaults-of-last-resort: the resolver applies a preset
/// field only when the caller-supplied configuration is silent on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetConfig {
    pub name: Target,
    pub formats: Vec<Format>,
    pub dts: bool,
    pub sourcemap: Sourcemap,
    pub platform: Platform,
    pub external: Option<Vec<String>>,
    pub bundle: bool,
    pub splitting: Option<bool>,
    pub treeshake: Option<bool>,
    pub minify: Option<bool>,
}

/// Fixed lookup table from target name to preset factory.
pub struct PresetRegistry {
    presets: BTreeMap<Target, fn() -> PresetConfig>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        let mut presets: BTreeMap<Target, fn() -> PresetConfig> = BTreeMap::new();
        presets.insert(Target::Library, library);
        presets.insert(Target::Node, node);
        presets.insert(Target::Bun, bun);
        presets.insert(Target::Browser, browser);
        presets.insert(Target::Cli, cli);
        presets.insert(Target::Universal, universal);
        Self { presets }
    }

    /// Look up a preset, producing a fresh value.
    pub fn get(&self, target: Target) -> Option<PresetConfig> {
        self.presets.get(&target).map(|factory| factory())
    }

    pub fn has(&self, target: Target) -> bool {
        self.presets.contains_key(&target)
    }

    /// Valid target names, in declaration order.
    pub fn list(&self) -> Vec<Target> {
        self.presets.keys().copied().collect()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn library() -> PresetConfig {
    PresetConfig {
        name: Target::Library,
        formats: vec![Format::Cjs, Format::Esm],
        dts: true,
        sourcemap: Sourcemap::Enabled(true),
        platform: Platform::Neutral,
        external: None,
        bundle: false,
        splitting: None,
        treeshake: Some(true),
        minify: Some(false),
    }
}

fn node() -> PresetConfig {
    PresetConfig {
        name: Target::Node,
        formats: vec![Format::Cjs],
        dts: false,
        sourcemap: Sourcemap::Mode(SourcemapMode::Inline),
        platform: Platform::Node,
        external: Some(vec!["node:*".to_string()]),
        bundle: true,
        splitting: None,
        treeshake: Some(true),
        minify: Some(production()),
    }
}

fn bun() -> PresetConfig {
    PresetConfig {
        name: Target::Bun,
        formats: vec![Format::Esm],
        dts: false,
        sourcemap: Sourcemap::Mode(SourcemapMode::Inline),
        platform: Platform::Node,
        external: Some(vec!["bun".to_string(), "bun:*".to_string()]),
        bundle: true,
        splitting: Some(true),
        treeshake: Some(true),
        minify: Some(production()),
    }
}

fn browser() -> PresetConfig {
    PresetConfig {
        name: Target::Browser,
        formats: vec![Format::Iife, Format::Esm],
        dts: false,
        sourcemap: Sourcemap::Enabled(true),
        platform: Platform::Browser,
        external: None,
        bundle: true,
        splitting: Some(false),
        treeshake: Some(true),
        minify: Some(true),
    }
}

fn cli() -> PresetConfig {
    PresetConfig {
        name: Target::Cli,
        formats: vec![Format::Cjs],
        dts: false,
        sourcemap: Sourcemap::Enabled(false),
        platform: Platform::Node,
        external: Some(vec!["node:*".to_string()]),
        bundle: true,
        splitting: None,
        treeshake: Some(true),
        minify: Some(true),
    }
}

fn universal() -> PresetConfig {
    PresetConfig {
        name: Target::Universal,
        formats: vec![Format::Cjs, Format::Esm, Format::Iife, Format::Umd],
        dts: true,
        sourcemap: Sourcemap::Enabled(true),
        platform: Platform::Neutral,
        external: None,
        bundle: false,
        splitting: None,
        treeshake: Some(true),
        minify: Some(false),
    }
}

fn production() -> bool {
    matches!(std::env::var("NODE_ENV").as_deref(), Ok("production"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_every_target() {
        let registry = PresetRegistry::new();
        for target in Target::ALL {
            assert!(registry.has(target), "missing preset for {target}");
            assert!(registry.get(target).is_some());
        }
    }

    #[test]
    fn list_is_in_declaration_order() {
        let registry = PresetRegistry::new();
        assert_eq!(registry.list(), Target::ALL.to_vec());
    }

    #[test]
    fn lookups_return_independent_values() {
        let registry = PresetRegistry::new();
        let mut first = registry.get(Target::Node).unwrap();
        first.formats.push(Format::Umd);

        let second = registry.get(Target::Node).unwrap();
        assert_eq!(second.formats, vec![Format::Cjs]);
    }

    #[test]
    fn browser_preset_values() {
        let preset = PresetRegistry::new().get(Target::Browser).unwrap();
        assert_eq!(preset.formats, vec![Format::Iife, Format::Esm]);
        assert!(!preset.dts);
        assert_eq!(preset.platform, Platform::Browser);
        assert!(preset.bundle);
        assert_eq!(preset.splitting, Some(false));
        assert_eq!(preset.minify, Some(true));
    }
}
