//! Build result normalization.
//!
//! Whatever the engine did, the caller sees one stable shape: a success
//! flag, the wall-clock duration, the files found in the output directory,
//! and error records on failure.

use std::path::{Path, PathBuf};

use kiln_config::Format;
use serde::Serialize;
use walkdir::WalkDir;

/// Normalized result of one build or rebuild.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub success: bool,
    pub duration_ms: u64,
    pub output_files: Vec<OutputFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BuildErrorRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// One produced file.
#[derive(Debug, Clone, Serialize)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Format tag inferred from the filename, not from engine metadata.
    pub format: Format,
    pub size: u64,
}

/// One build failure.
#[derive(Debug, Clone, Serialize)]
pub struct BuildErrorRecord {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// File name suffixes treated as build outputs.
const OUTPUT_SUFFIXES: [&str; 6] = [".js", ".mjs", ".cjs", ".d.ts", ".d.mts", ".d.cts"];

/// Infer the module format from a produced file's name.
///
/// `.cjs` → cjs, `.mjs` → esm, an `.iife.`/`.umd.` infix → that format,
/// anything else → esm.
pub fn infer_format(path: &Path) -> Format {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    if name.ends_with(".cjs") || name.ends_with(".d.cts") {
        Format::Cjs
    } else if name.ends_with(".mjs") || name.ends_with(".d.mts") {
        Format::Esm
    } else if name.contains(".iife.") {
        Format::Iife
    } else if name.contains(".umd.") {
        Format::Umd
    } else {
        Format::Esm
    }
}

/// Collect output file descriptors from the output directory.
///
/// Missing directories yield an empty list — an engine that produced
/// nothing is reported as such, not as a scan failure.
pub fn collect_outputs(out_dir: &Path) -> Vec<OutputFile> {
    if !out_dir.is_dir() {
        return Vec::new();
    }

    let mut outputs = Vec::new();
    for entry in WalkDir::new(out_dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !OUTPUT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        outputs.push(OutputFile {
            format: infer_format(entry.path()),
            path: entry.into_path(),
            size,
        });
    }

    outputs.sort_by(|a, b| a.path.cmp(&b.path));
    outputs
}
