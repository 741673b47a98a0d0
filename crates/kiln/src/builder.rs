//! The build façade: configuration in, report out.
//!
//! `Builder` holds a resolved configuration and an engine, and turns engine
//! invocations into [`BuildReport`]s. Engine failures are captured in the
//! report rather than propagated, so a watch loop that calls [`Builder::build`]
//! per change stays alive across broken rebuilds.

use std::time::Instant;

use kiln_config::{BuildConfig, Config, ConfigError};

use crate::engine::{Engine, EngineError, EngineOptions};
use crate::report::{collect_outputs, BuildErrorRecord, BuildReport};

/// Options consumed by the external file-watch mechanism.
///
/// The watcher itself is an external collaborator; the builder only supplies
/// the per-rebuild callback (a [`Builder::build`] call) and this data.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Glob patterns excluded from watching
    pub ignore: Vec<String>,
    /// Quiet period between a change and the rebuild
    pub debounce_ms: u64,
    /// Clear the console before each rebuild
    pub clear: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            ignore: vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()],
            debounce_ms: 100,
            clear: false,
        }
    }
}

/// Orchestrates one configuration against one engine.
pub struct Builder<E: Engine> {
    config: Config,
    engine: E,
}

impl<E: Engine> Builder<E> {
    /// Run the configuration pipeline with the given overrides and wrap the
    /// result. Validation failures propagate; see [`Config::create`].
    pub async fn new(engine: E, overrides: BuildConfig) -> Result<Self, ConfigError> {
        let config = Config::create(overrides).await?;
        Ok(Self::from_config(engine, config))
    }

    /// Wrap an already resolved configuration handle.
    pub fn from_config(engine: E, config: Config) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &BuildConfig {
        self.config.get()
    }

    /// Merge a partial configuration into the handle, revalidating.
    pub fn merge(&mut self, partial: BuildConfig) -> Result<(), ConfigError> {
        self.config.merge(partial)
    }

    /// Run one build and normalize the outcome.
    ///
    /// This is also the rebuild callback for watch mode: engine failures are
    /// reported inside the returned [`BuildReport`], never raised, so
    /// repeated invocations survive broken intermediate states.
    pub async fn build(&self) -> BuildReport {
        let start = Instant::now();
        let config = self.config.get();
        let silent = config.silent == Some(true);
        let verbose = config.verbose == Some(true);

        if config.clean == Some(true) {
            if let Err(err) = self.clean_out_dir() {
                return failed(start, err.to_string(), None);
            }
        }

        let options = EngineOptions::from_config(config);
        if !silent {
            tracing::info!(
                entries = options.entry.len(),
                formats = ?options.format,
                out_dir = %options.out_dir.display(),
                "building"
            );
        }
        if verbose {
            tracing::debug!(options = %options.to_value(), "engine options");
        }

        match self.engine.build(&options).await {
            Ok(()) => {
                let output_files = collect_outputs(&options.out_dir);
                if !silent {
                    tracing::info!(
                        outputs = output_files.len(),
                        duration_ms = start.elapsed().as_millis() as u64,
                        "build finished"
                    );
                }
                BuildReport {
                    success: true,
                    duration_ms: start.elapsed().as_millis() as u64,
                    output_files,
                    errors: Vec::new(),
                    warnings: Vec::new(),
                }
            }
            Err(err) => {
                let (message, stack) = match err {
                    EngineError::Failed { message, stack } => (message, stack),
                    other => (other.to_string(), None),
                };
                tracing::error!("build failed: {message}");
                if verbose {
                    if let Some(stack) = &stack {
                        tracing::debug!("{stack}");
                    }
                }
                failed(start, message, stack)
            }
        }
    }

    /// Remove and recreate the output directory.
    fn clean_out_dir(&self) -> std::io::Result<()> {
        if let Some(out_dir) = &self.config.get().out_dir {
            if out_dir.exists() {
                std::fs::remove_dir_all(out_dir)?;
            }
            std::fs::create_dir_all(out_dir)?;
        }
        Ok(())
    }
}

fn failed(start: Instant, message: String, stack: Option<String>) -> BuildReport {
    BuildReport {
        success: false,
        duration_ms: start.elapsed().as_millis() as u64,
        output_files: Vec::new(),
        errors: vec![BuildErrorRecord { message, stack }],
        warnings: Vec::new(),
    }
}
