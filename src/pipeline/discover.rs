//! Input discovery.

use crate::error::{Result, SbomQualityError};
use std::path::{Path, PathBuf};

/// Resolve the positional path argument into a list of SBOM files.
///
/// A file path is returned as-is; a directory is scanned one level deep
/// for `.json` files, sorted by name so batch order is reproducible. A
/// path that does not exist is a run-level error.
pub fn discover_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(SbomQualityError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "input path does not exist"),
        ));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .map_err(|e| SbomQualityError::io(path, e))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && has_json_extension(p))
        .collect();

    files.sort();
    tracing::debug!("discovered {} .json file(s) under {}", files.len(), path.display());
    Ok(files)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
