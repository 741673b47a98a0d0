//! Tests for the validator's invariants and their fixed ordering.

use std::fs;
use std::path::PathBuf;

use kiln_config::{validate, BuildConfig, ConfigError, Entry, Format};
use tempfile::TempDir;

/// A config whose entry actually exists on disk.
fn valid_config(dir: &TempDir) -> BuildConfig {
    let entry = dir.path().join("index.ts");
    fs::write(&entry, "export {}\n").expect("write entry");
    BuildConfig {
        entry: Some(Entry::Many(vec![entry])),
        ..BuildConfig::default()
    }
}

#[test]
fn missing_entry_field_is_rejected() {
    let err = validate(&BuildConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::NoEntries));
    assert!(err.to_string().contains("at least one entry point"));
}

#[test]
fn empty_entry_list_is_rejected() {
    let config = BuildConfig {
        entry: Some(Entry::Many(Vec::new())),
        ..BuildConfig::default()
    };
    assert!(matches!(
        validate(&config).unwrap_err(),
        ConfigError::NoEntries
    ));
}

#[test]
fn nonexistent_entry_names_the_path() {
    let config = BuildConfig {
        entry: Some(Entry::Many(vec![PathBuf::from("/no/such/missing.ts")])),
        ..BuildConfig::default()
    };

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::EntryNotFound(_)));
    assert!(err.to_string().contains("missing.ts"));
}

#[test]
fn missing_entry_is_reported_before_later_violations() {
    // both violated: invariant order puts the entry check first
    let config = BuildConfig {
        entry: Some(Entry::Many(vec![PathBuf::from("/no/such/missing.ts")])),
        formats: Some(vec![Format::Iife]),
        ..BuildConfig::default()
    };

    assert!(matches!(
        validate(&config).unwrap_err(),
        ConfigError::EntryNotFound(_)
    ));
}

#[test]
fn missing_tsconfig_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let config = BuildConfig {
        tsconfig: Some(dir.path().join("tsconfig.json")),
        ..valid_config(&dir)
    };

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::TsconfigNotFound(_)));
    assert!(err.to_string().contains("tsconfig.json"));
}

#[test]
fn iife_requires_global_name() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = BuildConfig {
        formats: Some(vec![Format::Iife]),
        ..valid_config(&dir)
    };

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::MissingGlobalName));
    assert!(err.to_string().contains("globalName is required"));

    config.global_name = Some("X".to_string());
    validate(&config).expect("global name satisfies the check");
}

#[test]
fn umd_requires_global_name() {
    let dir = TempDir::new().expect("tempdir");
    let config = BuildConfig {
        formats: Some(vec![Format::Cjs, Format::Umd]),
        ..valid_config(&dir)
    };

    assert!(matches!(
        validate(&config).unwrap_err(),
        ConfigError::MissingGlobalName
    ));
}

#[test]
fn splitting_conflicts_with_iife() {
    let dir = TempDir::new().expect("tempdir");
    let config = BuildConfig {
        formats: Some(vec![Format::Iife]),
        global_name: Some("X".to_string()),
        splitting: Some(true),
        bundle: Some(true),
        ..valid_config(&dir)
    };

    assert!(matches!(
        validate(&config).unwrap_err(),
        ConfigError::SplittingWithIife
    ));
}

#[test]
fn splitting_requires_bundling() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = BuildConfig {
        formats: Some(vec![Format::Esm]),
        splitting: Some(true),
        bundle: Some(false),
        ..valid_config(&dir)
    };

    assert!(matches!(
        validate(&config).unwrap_err(),
        ConfigError::SplittingWithoutBundle
    ));

    config.bundle = Some(true);
    validate(&config).expect("splitting with bundling passes");

    // bundle left unset is not "explicitly disabled"
    config.bundle = None;
    validate(&config).expect("unset bundle does not conflict");
}

#[test]
fn a_plain_valid_config_passes() {
    let dir = TempDir::new().expect("tempdir");
    validate(&valid_config(&dir)).expect("valid config");
}
