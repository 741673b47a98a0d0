//! Closed enumerations used throughout the build configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output module format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// CommonJS modules (require/module.exports)
    Cjs,
    /// ECMAScript modules (import/export syntax)
    Esm,
    /// Immediately invoked function expression, for script tags
    Iife,
    /// Universal module definition
    Umd,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Cjs, Format::Esm, Format::Iife, Format::Umd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Cjs => "cjs",
            Format::Esm => "esm",
            Format::Iife => "iife",
            Format::Umd => "umd",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .iter()
            .find(|format| format.as_str() == s)
            .copied()
            .ok_or_else(|| invalid_value("formats", s, &Format::ALL.map(|f| f.as_str())))
    }
}

/// Named build target, selecting among the preset deployment shapes.
///
/// Distinct from [`Platform`], which constrains the engine's code-generation
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Library,
    Node,
    Bun,
    Browser,
    Cli,
    Universal,
}

impl Target {
    pub const ALL: [Target; 6] = [
        Target::Library,
        Target::Node,
        Target::Bun,
        Target::Browser,
        Target::Cli,
        Target::Universal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Library => "library",
            Target::Node => "node",
            Target::Bun => "bun",
            Target::Browser => "browser",
            Target::Cli => "cli",
            Target::Universal => "universal",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .find(|target| target.as_str() == s)
            .copied()
            .ok_or_else(|| invalid_value("target", s, &Target::ALL.map(|t| t.as_str())))
    }
}

/// Target platform environment for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Node,
    Browser,
    Neutral,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Node, Platform::Browser, Platform::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Browser => "browser",
            Platform::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .find(|platform| platform.as_str() == s)
            .copied()
            .ok_or_else(|| invalid_value("platform", s, &Platform::ALL.map(|p| p.as_str())))
    }
}

/// Source map generation: a plain on/off switch or an explicit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sourcemap {
    /// `true`/`false` in a config file
    Enabled(bool),
    /// `"inline"` or `"external"` in a config file
    Mode(SourcemapMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcemapMode {
    Inline,
    External,
}

/// Entry points, as written in a config file: a bare path or a list.
///
/// The resolver normalizes this to the list form before path resolution, so
/// downstream consumers can rely on a uniform shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl Entry {
    pub fn is_empty(&self) -> bool {
        match self {
            Entry::One(_) => false,
            Entry::Many(paths) => paths.is_empty(),
        }
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        match self {
            Entry::One(path) => vec![path],
            Entry::Many(paths) => paths,
        }
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        match self {
            Entry::One(path) => std::slice::from_ref(path),
            Entry::Many(paths) => paths,
        }
    }
}

impl From<&str> for Entry {
    fn from(path: &str) -> Self {
        Entry::One(PathBuf::from(path))
    }
}

impl From<PathBuf> for Entry {
    fn from(path: PathBuf) -> Self {
        Entry::One(path)
    }
}

impl From<Vec<PathBuf>> for Entry {
    fn from(paths: Vec<PathBuf>) -> Self {
        Entry::Many(paths)
    }
}

fn invalid_value(field: &str, value: &str, allowed: &[&str]) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        allowed: allowed.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_round_trips_through_str() {
        for format in Format::ALL {
            assert_eq!(format.as_str().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn invalid_format_names_allowed_values() {
        let err = "wasm".parse::<Format>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid value for 'formats'"));
        assert!(msg.contains("cjs, esm, iife, umd"));
    }

    #[test]
    fn invalid_target_names_allowed_values() {
        let err = "deno".parse::<Target>().unwrap_err();
        assert!(err
            .to_string()
            .contains("library, node, bun, browser, cli, universal"));
    }

    #[test]
    fn sourcemap_deserializes_bool_and_mode() {
        let enabled: Sourcemap = serde_json::from_str("true").unwrap();
        assert_eq!(enabled, Sourcemap::Enabled(true));

        let inline: Sourcemap = serde_json::from_str(r#""inline""#).unwrap();
        assert_eq!(inline, Sourcemap::Mode(SourcemapMode::Inline));
    }

    #[test]
    fn entry_deserializes_one_or_many() {
        let one: Entry = serde_json::from_str(r#""src/index.ts""#).unwrap();
        assert_eq!(one, Entry::One(PathBuf::from("src/index.ts")));

        let many: Entry = serde_json::from_str(r#"["a.ts", "b.ts"]"#).unwrap();
        assert_eq!(many.as_slice().len(), 2);
    }
}
