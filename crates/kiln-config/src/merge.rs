//! Ordered merging of partial configurations.
//!
//! A left-to-right fold: unset fields never overwrite, array-valued fields
//! replace wholesale, map-valued fields (`define`, `env`) merge shallowly
//! key-by-key. The array/map asymmetry is deliberate and preserved for
//! compatibility with existing config files — arrays do NOT union.

use std::collections::BTreeMap;

use crate::config::BuildConfig;

/// Fold partial configurations, later layers taking precedence.
///
/// The caller supplies layers lowest-precedence first; the orchestrator uses
/// defaults, then the loaded file config, then the caller override.
pub fn merge<I>(layers: I) -> BuildConfig
where
    I: IntoIterator<Item = BuildConfig>,
{
    let mut acc = BuildConfig::default();
    for layer in layers {
        merge_into(&mut acc, layer);
    }
    acc
}

fn merge_into(acc: &mut BuildConfig, layer: BuildConfig) {
    // Scalars and arrays: a set value in the later layer replaces wholesale.
    replace(&mut acc.entry, layer.entry);
    replace(&mut acc.out_dir, layer.out_dir);
    replace(&mut acc.formats, layer.formats);
    replace(&mut acc.target, layer.target);
    replace(&mut acc.dts, layer.dts);
    replace(&mut acc.sourcemap, layer.sourcemap);
    replace(&mut acc.clean, layer.clean);
    replace(&mut acc.external, layer.external);
    replace(&mut acc.minify, layer.minify);
    replace(&mut acc.platform, layer.platform);
    replace(&mut acc.global_name, layer.global_name);
    replace(&mut acc.banner, layer.banner);
    replace(&mut acc.footer, layer.footer);
    replace(&mut acc.tsconfig, layer.tsconfig);
    replace(&mut acc.splitting, layer.splitting);
    replace(&mut acc.treeshake, layer.treeshake);
    replace(&mut acc.pure, layer.pure);
    replace(&mut acc.keep_names, layer.keep_names);
    replace(&mut acc.bundle, layer.bundle);
    replace(&mut acc.shims, layer.shims);
    replace(&mut acc.legacy_output, layer.legacy_output);
    replace(&mut acc.metafile, layer.metafile);
    replace(&mut acc.silent, layer.silent);
    replace(&mut acc.verbose, layer.verbose);

    // Maps: shallow merge, later layer winning per key.
    merge_map(&mut acc.define, layer.define);
    merge_map(&mut acc.env, layer.env);
}

fn replace<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn merge_map(
    slot: &mut Option<BTreeMap<String, String>>,
    update: Option<BTreeMap<String, String>>,
) {
    if let Some(update) = update {
        match slot {
            Some(existing) => existing.extend(update),
            None => *slot = Some(update),
        }
    }
}
