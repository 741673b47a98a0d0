//! Preset backfill and path resolution.
//!
//! Resolution happens in a fixed order: preset backfill first (so the
//! tri-state checks see the caller's original field presence, not
//! normalization artifacts), then entry normalization, then path
//! absolutization against the explicitly threaded working directory.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::config::BuildConfig;
use crate::preset::PresetRegistry;
use crate::types::Entry;

/// Resolve a merged configuration.
///
/// `merged` is the full defaults+loaded+override merge. `user` is the merge
/// of loaded and override layers only: preset fields backfill only where the
/// user layer is silent, so a preset beats the hardcoded defaults but never
/// an explicit caller value ("explicitly false" is distinct from "unset").
/// `cwd` roots all relative paths; no I/O is performed.
pub fn resolve(merged: BuildConfig, user: &BuildConfig, cwd: &Path) -> BuildConfig {
    let mut resolved = merged;

    // 1. Preset backfill, keyed on user-layer silence.
    if let Some(target) = resolved.target {
        if let Some(preset) = PresetRegistry::new().get(target) {
            if user.formats.is_none() {
                resolved.formats = Some(preset.formats);
            }
            if user.dts.is_none() {
                resolved.dts = Some(preset.dts);
            }
            if user.sourcemap.is_none() {
                resolved.sourcemap = Some(preset.sourcemap);
            }
            if user.platform.is_none() {
                resolved.platform = Some(preset.platform);
            }
            if user.bundle.is_none() {
                resolved.bundle = Some(preset.bundle);
            }
            if user.treeshake.is_none() {
                if let Some(treeshake) = preset.treeshake {
                    resolved.treeshake = Some(treeshake);
                }
            }
            if user.minify.is_none() {
                if let Some(minify) = preset.minify {
                    resolved.minify = Some(minify);
                }
            }
            if user.splitting.is_none() {
                if let Some(splitting) = preset.splitting {
                    resolved.splitting = Some(splitting);
                }
            }
            // external only backfills when the user list is empty or absent
            let user_external_empty = user.external.as_ref().map_or(true, |e| e.is_empty());
            if user_external_empty {
                if let Some(external) = preset.external {
                    resolved.external = Some(external);
                }
            }
        }
    }

    // 2. Normalize entry to list form.
    // 3. Resolve entry paths and the output directory against cwd.
    resolved.entry = resolved.entry.map(|entry| {
        Entry::Many(
            entry
                .into_vec()
                .into_iter()
                .map(|path| absolutize(path, cwd))
                .collect(),
        )
    });

    let out_dir = resolved.out_dir.unwrap_or_else(|| PathBuf::from("./dist"));
    resolved.out_dir = Some(absolutize(out_dir, cwd));

    // 4. Resolve tsconfig if present.
    resolved.tsconfig = resolved.tsconfig.map(|path| absolutize(path, cwd));

    resolved
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        cwd.join(path).clean()
    }
}
