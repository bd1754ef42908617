//! File discovery
//!
//! Recursive traversal of a PipeTech export folder, glob filtering and
//! the flat copy used when relocating images before renaming.

use crate::error::{InspectPhotoError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk all subdirectories of `root` and return the files whose
/// basename matches the shell glob `pattern`.
///
/// The list is rebuilt from scratch on every call; order is traversal
/// order and not canonical across platforms. An existing folder with
/// no matches yields an empty list, a missing folder is an error.
pub fn scan(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(InspectPhotoError::FolderNotFound(
            root.display().to_string(),
        ));
    }

    let pattern = Pattern::new(pattern)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if pattern.matches(name) {
                files.push(path.to_path_buf());
            }
        }
    }

    Ok(files)
}

/// Strip the directory part off each path, preserving input order.
pub fn strip_directory(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Copy every match under `root` into the single flat `destination`
/// directory, without recreating subdirectories. Returns the number of
/// files copied.
///
/// An absolute `destination` is used verbatim; a relative one is
/// resolved against the current working directory. The directory must
/// already exist: the caller creates it before files land there.
/// Matches from different subdirectories that share a basename
/// silently overwrite each other (known collision hazard of the flat
/// layout). The first failing copy aborts the remainder.
pub fn copy_all(root: &Path, pattern: &str, destination: &Path) -> Result<usize> {
    let dest = resolve_destination(destination)?;

    let mut copied = 0;
    for src in scan(root, pattern)? {
        if let Some(name) = src.file_name() {
            std::fs::copy(&src, dest.join(name))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn resolve_destination(destination: &Path) -> Result<PathBuf> {
    if destination.is_absolute() {
        Ok(destination.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(destination))
    }
}
