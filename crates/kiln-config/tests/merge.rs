//! Tests for layered merge precedence and the per-key merge rules.

use std::collections::BTreeMap;
use std::path::PathBuf;

use kiln_config::{defaults, merge, BuildConfig, Entry, Format, Target};

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn override_wins_over_loaded_wins_over_defaults() {
    let loaded = BuildConfig {
        out_dir: Some(PathBuf::from("loaded-dist")),
        minify: Some(true),
        ..BuildConfig::default()
    };
    let overrides = BuildConfig {
        out_dir: Some(PathBuf::from("override-dist")),
        ..BuildConfig::default()
    };

    let merged = merge([defaults(), loaded, overrides]);

    // override defines out_dir: override wins
    assert_eq!(merged.out_dir, Some(PathBuf::from("override-dist")));
    // only loaded defines minify: loaded wins over the default false
    assert_eq!(merged.minify, Some(true));
    // nobody above defaults defines target: default survives
    assert_eq!(merged.target, Some(Target::Library));
}

#[test]
fn unset_fields_never_overwrite() {
    let base = BuildConfig {
        dts: Some(false),
        global_name: Some("Lib".to_string()),
        ..BuildConfig::default()
    };
    let layer = BuildConfig::default();

    let merged = merge([base, layer]);
    assert_eq!(merged.dts, Some(false));
    assert_eq!(merged.global_name.as_deref(), Some("Lib"));
}

#[test]
fn arrays_replace_wholesale() {
    let base = BuildConfig {
        external: Some(vec!["a".to_string(), "b".to_string()]),
        formats: Some(vec![Format::Cjs, Format::Esm]),
        ..BuildConfig::default()
    };
    let layer = BuildConfig {
        external: Some(vec!["c".to_string()]),
        formats: Some(vec![Format::Iife]),
        ..BuildConfig::default()
    };

    let merged = merge([base, layer]);
    assert_eq!(merged.external, Some(vec!["c".to_string()]));
    assert_eq!(merged.formats, Some(vec![Format::Iife]));
}

#[test]
fn entry_replaces_like_any_array() {
    let base = BuildConfig {
        entry: Some(Entry::Many(vec![
            PathBuf::from("a.ts"),
            PathBuf::from("b.ts"),
        ])),
        ..BuildConfig::default()
    };
    let layer = BuildConfig {
        entry: Some("c.ts".into()),
        ..BuildConfig::default()
    };

    let merged = merge([base, layer]);
    assert_eq!(merged.entry, Some(Entry::One(PathBuf::from("c.ts"))));
}

#[test]
fn maps_merge_key_by_key() {
    let base = BuildConfig {
        define: Some(map(&[("VERSION", "1"), ("DEBUG", "true")])),
        ..BuildConfig::default()
    };
    let layer = BuildConfig {
        define: Some(map(&[("DEBUG", "false"), ("EXTRA", "yes")])),
        ..BuildConfig::default()
    };

    let merged = merge([base, layer]);
    let define = merged.define.unwrap();
    assert_eq!(define["VERSION"], "1"); // preserved from base
    assert_eq!(define["DEBUG"], "false"); // later layer wins per key
    assert_eq!(define["EXTRA"], "yes");
}

#[test]
fn empty_merge_is_empty() {
    let merged = merge(std::iter::empty());
    assert_eq!(merged, BuildConfig::default());
}
