//! Corpus directory scanning

use crate::error::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Scan result
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub path: PathBuf,
    pub relative_path: String,
}

/// Scan options
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub pattern: String,
    pub recursive: bool,
    pub follow_symlinks: bool,
    pub exclude_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: "*.html".to_string(),
            recursive: false,
            follow_symlinks: true,
            exclude_hidden: false,
        }
    }
}

/// Scan a corpus directory for page files matching the pattern.
///
/// Results are sorted by relative path so page order never depends on the
/// filesystem's listing order.
pub fn scan_pages(root: &Path, options: &ScanOptions) -> Result<Vec<ScanResult>> {
    let pattern = Pattern::new(&options.pattern)?;
    let mut results = Vec::new();

    let mut walker = WalkDir::new(root).follow_links(options.follow_symlinks);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, options));

    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if pattern.matches(&relative) {
            results.push(ScanResult {
                path: path.to_path_buf(),
                relative_path: relative,
            });
        }
    }

    results.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(results)
}

fn should_skip(entry: &DirEntry, options: &ScanOptions) -> bool {
    options.exclude_hidden && entry.file_name().to_string_lossy().starts_with('.')
}
