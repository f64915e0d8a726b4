//! Corpus loading from a directory of HTML pages

use super::{extract_links, scan_pages, Corpus, ScanOptions};
use crate::error::{RankError, Result};
use std::path::Path;

/// Loader options
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    pub scan: ScanOptions,
}

impl LoaderOptions {
    /// Set the file glob pattern (default `*.html`)
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.scan.pattern = pattern.into();
        self
    }

    /// Descend into subdirectories
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.scan.recursive = recursive;
        self
    }
}

/// Load a corpus from a directory.
///
/// Each matching file becomes a page named by its path relative to `dir`.
/// Links to files outside the corpus and self-links are dropped.
pub fn load_corpus(dir: &Path, options: &LoaderOptions) -> Result<Corpus> {
    if !dir.exists() {
        return Err(RankError::invalid(format!(
            "corpus directory not found: {}",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(RankError::invalid(format!(
            "corpus path is not a directory: {}",
            dir.display()
        )));
    }

    let files = scan_pages(dir, &options.scan)?;
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let content = std::fs::read_to_string(&file.path)?;
        let links = extract_links(&content, &file.relative_path);
        tracing::debug!("{}: {} raw links", file.relative_path, links.len());
        entries.push((file.relative_path, links));
    }

    let corpus = Corpus::from_links(entries);
    if corpus.is_empty() {
        return Err(RankError::invalid(format!(
            "corpus contains no pages matching '{}': {}",
            options.scan.pattern,
            dir.display()
        )));
    }

    tracing::info!(
        "Loaded corpus with {} pages and {} links",
        corpus.len(),
        corpus.link_count()
    );
    Ok(corpus)
}
