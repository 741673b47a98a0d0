//! Pipeline orchestration: load, merge, resolve, validate.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::defaults::defaults;
use crate::error::Result;
use crate::loader::{ConfigLoader, FsLoader};
use crate::merge::merge;
use crate::resolve::resolve;
use crate::validate::validate;

/// A resolved, validated configuration handle.
///
/// Built once per invocation by [`Config::create`]; every mutation
/// revalidates, so the handle never holds an invalid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    config: BuildConfig,
    cwd: PathBuf,
}

impl Config {
    /// Run the full pipeline rooted at the process working directory:
    /// discover a config file, merge it between the defaults and the caller
    /// override, apply preset backfill and path resolution, validate.
    ///
    /// This is the single public entry point; no other ordering of the four
    /// stages is supported.
    pub async fn create(overrides: BuildConfig) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loader = FsLoader::new(&cwd);
        Self::create_with(&loader, overrides, &cwd).await
    }

    /// The same pipeline with an injected loader and working root.
    pub async fn create_with(
        loader: &dyn ConfigLoader,
        overrides: BuildConfig,
        cwd: &Path,
    ) -> Result<Self> {
        let loaded = loader.load().await;

        // The user layer (loaded + overrides, no defaults) drives the
        // resolver's tri-state preset backfill.
        let user = merge([loaded.clone(), overrides.clone()]);
        let merged = merge([defaults(), loaded, overrides]);
        let resolved = resolve(merged, &user, cwd);
        validate(&resolved)?;

        Ok(Self {
            config: resolved,
            cwd: cwd.to_path_buf(),
        })
    }

    /// The resolved configuration.
    pub fn get(&self) -> &BuildConfig {
        &self.config
    }

    /// Working root the configuration was resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Merge a partial configuration into the handle, revalidating.
    ///
    /// The candidate value is validated before it is committed; on failure
    /// the handle keeps its previous configuration.
    pub fn merge(&mut self, partial: BuildConfig) -> Result<()> {
        let next = merge([self.config.clone(), partial]);
        validate(&next)?;
        self.config = next;
        Ok(())
    }

    /// Apply a field mutation, revalidating before committing.
    pub fn update(&mut self, mutate: impl FnOnce(&mut BuildConfig)) -> Result<()> {
        let mut next = self.config.clone();
        mutate(&mut next);
        validate(&next)?;
        self.config = next;
        Ok(())
    }

    pub fn into_inner(self) -> BuildConfig {
        self.config
    }
}
