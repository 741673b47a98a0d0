//! Structural and cross-field validation of a resolved configuration.

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::types::Format;

/// Validate a fully resolved configuration.
///
/// Checks run in a fixed order and fail on the first violation:
/// 1. at least one entry point, and every entry path exists on disk;
/// 2.–4. formats, target, and platform are closed enums, enforced at the
///    type level (`FromStr`/serde errors name the allowed values);
/// 5. tsconfig, if present, exists on disk;
/// 6. iife/umd formats require a global name;
/// 7. code splitting is incompatible with the iife format;
/// 8. code splitting requires bundling (`bundle` not explicitly false).
pub fn validate(config: &BuildConfig) -> Result<()> {
    let entries = config.entries();
    if entries.is_empty() {
        return Err(ConfigError::NoEntries);
    }
    for entry in entries {
        if !entry.exists() {
            return Err(ConfigError::EntryNotFound(entry.clone()));
        }
    }

    if let Some(tsconfig) = &config.tsconfig {
        if !tsconfig.exists() {
            return Err(ConfigError::TsconfigNotFound(tsconfig.clone()));
        }
    }

    let formats = config.formats();
    let global_format = formats
        .iter()
        .any(|f| matches!(f, Format::Iife | Format::Umd));
    if global_format && config.global_name.is_none() {
        return Err(ConfigError::MissingGlobalName);
    }

    if config.splitting == Some(true) && formats.contains(&Format::Iife) {
        return Err(ConfigError::SplittingWithIife);
    }

    if config.splitting == Some(true) && config.bundle == Some(false) {
        return Err(ConfigError::SplittingWithoutBundle);
    }

    Ok(())
}
