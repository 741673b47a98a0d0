//! Configuration resolution pipeline for the Kiln build tool.
//!
//! Kiln sits in front of an existing bundler engine; this crate owns the
//! only non-trivial logic in that arrangement: layering defaults, a
//! discovered config file, and caller overrides into one configuration,
//! backfilling preset-implied values, normalizing paths, and validating the
//! result before it is handed to the engine driver.
//!
//! The pipeline is fixed: load → merge(defaults, loaded, overrides) →
//! resolve → validate, exposed through [`Config::create`].

pub mod config;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod merge;
pub mod pipeline;
pub mod preset;
pub mod resolve;
pub mod types;
pub mod validate;

// Re-export main types
pub use config::BuildConfig;
pub use defaults::defaults;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FsLoader, StaticLoader, CONFIG_CANDIDATES};
pub use merge::merge;
pub use pipeline::Config;
pub use preset::{PresetConfig, PresetRegistry};
pub use resolve::resolve;
pub use types::{Entry, Format, Platform, Sourcemap, SourcemapMode, Target};
pub use validate::validate;
