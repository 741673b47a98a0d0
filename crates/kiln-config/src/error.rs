//! Error types for configuration loading, resolution, and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Configuration pipeline errors.
///
/// Loader failures never surface here — the loader degrades to an empty
/// partial configuration and warns instead. Every variant below is a hard
/// validation or parse failure that aborts the pipeline.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No entry points after resolution.
    #[error("at least one entry point is required")]
    NoEntries,

    /// An entry point path does not exist on disk.
    #[error("entry point does not exist: {}", .0.display())]
    EntryNotFound(PathBuf),

    /// A value outside a closed enumeration.
    #[error("invalid value for '{field}': {value}\n\nHint: allowed values are {allowed}")]
    InvalidValue {
        /// Name of the field with the invalid value
        field: String,
        /// The rejected value
        value: String,
        /// Comma-separated allowed values
        allowed: String,
    },

    /// The configured tsconfig path does not exist.
    #[error("tsconfig does not exist: {}", .0.display())]
    TsconfigNotFound(PathBuf),

    /// iife/umd output without a global name.
    #[error("globalName is required for iife and umd formats")]
    MissingGlobalName,

    /// Code splitting combined with the iife format.
    #[error("code splitting is not supported with the iife format")]
    SplittingWithIife,

    /// Code splitting with bundling explicitly disabled.
    #[error("code splitting requires bundling to be enabled")]
    SplittingWithoutBundle,

    /// A partial configuration value failed to deserialize.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// I/O errors from file system operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
