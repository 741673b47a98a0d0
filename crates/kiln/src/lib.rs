//! # kiln
//!
//! Thin orchestration layer in front of a bundler engine.
//!
//! Kiln resolves user build intent into a validated configuration
//! (see [`kiln_config`]), translates it into the engine's native option
//! shape, invokes the engine behind the [`Engine`] seam, and normalizes the
//! outcome into a stable [`BuildReport`].
//!
//! Exit-code convention for command-line frontends: 0 on success, 1 on any
//! validation failure, engine failure, or panic.
//!
//! ```no_run
//! use kiln::{Builder, Engine, EngineError, EngineOptions};
//! use kiln_config::BuildConfig;
//!
//! struct MyEngine;
//!
//! #[async_trait::async_trait]
//! impl Engine for MyEngine {
//!     async fn build(&self, _options: &EngineOptions) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> Result<(), kiln_config::ConfigError> {
//! let builder = Builder::new(
//!     MyEngine,
//!     BuildConfig {
//!         entry: Some("src/index.ts".into()),
//!         ..BuildConfig::default()
//!     },
//! )
//! .await?;
//!
//! let report = builder.build().await;
//! assert!(report.success);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod engine;
pub mod report;

pub use builder::{Builder, WatchOptions};
pub use engine::{Engine, EngineError, EngineOptions, JsText};
pub use report::{BuildErrorRecord, BuildReport, OutputFile};

// Re-export the configuration pipeline
pub use kiln_config::{self as config, BuildConfig, Config, ConfigError};
