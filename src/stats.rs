//! Summary metrics over a scanned file list.

use crate::error::{InspectPhotoError, Result};
use crate::grouper;
use crate::locator;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub file_count: usize,
    pub inspection_count: usize,
    pub folder_path: String,
}

/// Compute file/inspection counts and the folder path for a scanned
/// file list. The folder path is taken from the first element, so an
/// empty list is an explicit error rather than an out-of-bounds index.
pub fn stats(paths: &[PathBuf]) -> Result<Stats> {
    let first = paths.first().ok_or(InspectPhotoError::EmptyFileList)?;

    let names = locator::strip_directory(paths);
    let inspections = grouper::unique_inspection_ids(&names);

    let folder_path = first
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    Ok(Stats {
        file_count: paths.len(),
        inspection_count: inspections.len(),
        folder_path,
    })
}
