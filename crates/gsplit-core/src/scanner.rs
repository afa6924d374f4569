//! Directory scanner for discovering feature files

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning an input directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Discovered feature files, sorted by path
    pub files: Vec<PathBuf>,
    /// Total number of feature files found
    pub total_files: usize,
}

/// Check whether a path names a feature file.
///
/// The single predicate behind every "is this a feature file" decision: the
/// substring of the file name after the last '.' must equal "feature"
/// exactly, case-sensitive. A bare ".feature" name qualifies.
pub fn is_feature_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.rsplit_once('.'))
        .is_some_and(|(_, ext)| ext == "feature")
}

/// Recursively scan a directory for feature files.
///
/// Entries that cannot be read during the walk are skipped; one unreadable
/// subtree never aborts discovery of the rest.
pub fn scan_directory<P: AsRef<Path>>(root: P) -> Result<ScanResult> {
    let root = root.as_ref();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_feature_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    let total_files = files.len();

    Ok(ScanResult {
        root: root.to_path_buf(),
        files,
        total_files,
    })
}
