//! Tests for the baseline configuration values.

use std::path::PathBuf;

use kiln_config::{defaults, Entry, Format, Platform, Sourcemap, Target};

#[test]
fn baseline_values() {
    let config = defaults();

    assert_eq!(
        config.entry,
        Some(Entry::One(PathBuf::from("./src/index.ts")))
    );
    assert_eq!(config.out_dir, Some(PathBuf::from("./dist")));
    assert_eq!(config.formats, Some(vec![Format::Cjs, Format::Esm]));
    assert_eq!(config.target, Some(Target::Library));
    assert_eq!(config.dts, Some(true));
    assert_eq!(config.sourcemap, Some(Sourcemap::Enabled(true)));
    assert_eq!(config.clean, Some(false));
    assert_eq!(config.external, Some(Vec::new()));
    assert_eq!(config.minify, Some(false));
    assert_eq!(config.platform, Some(Platform::Neutral));
    assert_eq!(config.bundle, Some(false));
    assert_eq!(config.treeshake, Some(true));
    assert_eq!(config.keep_names, Some(false));
    assert_eq!(config.shims, Some(true));
    assert_eq!(config.legacy_output, Some(false));
    assert_eq!(config.metafile, Some(false));
    assert_eq!(config.silent, Some(false));
    assert_eq!(config.verbose, Some(false));
}

#[test]
fn knobs_without_a_baseline_stay_unset() {
    let config = defaults();

    assert!(config.global_name.is_none());
    assert!(config.banner.is_none());
    assert!(config.footer.is_none());
    assert!(config.define.is_none());
    assert!(config.env.is_none());
    assert!(config.tsconfig.is_none());
    assert!(config.splitting.is_none());
    assert!(config.pure.is_none());
}

#[test]
fn each_call_returns_a_fresh_value() {
    let mut first = defaults();
    first.formats.as_mut().unwrap().push(Format::Umd);

    assert_eq!(defaults().formats, Some(vec![Format::Cjs, Format::Esm]));
}
