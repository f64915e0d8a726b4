//! Link graph of a page corpus
//!
//! A [`Corpus`] is the immutable, closed link graph both ranking algorithms
//! read. Pages are stored in lexicographic order and addressed by dense
//! indices. Construction removes self-links and links to unknown pages.
//!
//! Sink pages (no outbound links) are modelled through [`Corpus::out_set`],
//! which yields the full page set for them, so every consumer sees the same
//! sink redistribution.

mod link_extractor;
mod loader;
mod scanner;

pub use link_extractor::extract_links;
pub use loader::{load_corpus, LoaderOptions};
pub use scanner::{scan_pages, ScanOptions, ScanResult};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Range;
use std::slice;

/// Immutable directed graph of pages and their outbound links
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    links: Vec<Vec<usize>>,
}

impl Corpus {
    /// Build a corpus from `(page, links)` pairs.
    ///
    /// Repeated pages merge their link sets. Self-links and links to pages
    /// that never appear as a key are dropped.
    pub fn from_links<I, P, L, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in entries {
            let set = raw.entry(page.into()).or_default();
            set.extend(targets.into_iter().map(|t| t.as_ref().to_string()));
        }

        let pages: Vec<String> = raw.keys().cloned().collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        let mut dropped = 0usize;
        let links: Vec<Vec<usize>> = raw
            .iter()
            .enumerate()
            .map(|(source, (_, targets))| {
                // BTreeSet iteration keeps each list sorted
                let kept: Vec<usize> = targets
                    .iter()
                    .filter_map(|t| index.get(t).copied())
                    .filter(|&t| t != source)
                    .collect();
                dropped += targets.len() - kept.len();
                kept
            })
            .collect();

        if dropped > 0 {
            tracing::debug!("Dropped {} self or dangling links", dropped);
        }

        Self {
            pages,
            index,
            links,
        }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of declared links
    pub fn link_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Page names in lexicographic order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(String::as_str)
    }

    /// Name of the page at `index`
    pub fn page_name(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Index of a page by name
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Declared outbound links of a page, sorted by index
    pub fn links(&self, index: usize) -> &[usize] {
        self.links.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Declared outbound links of a page, by name
    pub fn links_of(&self, page: &str) -> Option<Vec<&str>> {
        let index = self.index_of(page)?;
        Some(self.links(index).iter().map(|&t| self.pages[t].as_str()).collect())
    }

    pub fn is_sink(&self, index: usize) -> bool {
        self.links(index).is_empty()
    }

    /// Effective out-set used for ranking: the declared links, or every
    /// page in the corpus when the page is a sink.
    pub fn out_set(&self, index: usize) -> OutSet<'_> {
        match self.links(index) {
            [] => OutSet::Everything(self.len()),
            links => OutSet::Links(links),
        }
    }
}

/// Effective out-set of a page
#[derive(Debug, Clone, Copy)]
pub enum OutSet<'a> {
    Links(&'a [usize]),
    Everything(usize),
}

impl<'a> OutSet<'a> {
    pub fn len(&self) -> usize {
        match self {
            OutSet::Links(links) => links.len(),
            OutSet::Everything(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            OutSet::Links(links) => links.binary_search(&index).is_ok(),
            OutSet::Everything(n) => index < *n,
        }
    }

    /// Page index at `position` in ascending index order
    pub fn get(&self, position: usize) -> Option<usize> {
        match self {
            OutSet::Links(links) => links.get(position).copied(),
            OutSet::Everything(n) => (position < *n).then_some(position),
        }
    }

    pub fn iter(&self) -> OutSetIter<'a> {
        match *self {
            OutSet::Links(links) => OutSetIter::Links(links.iter()),
            OutSet::Everything(n) => OutSetIter::Everything(0..n),
        }
    }
}

/// Iterator over the page indices of an [`OutSet`]
#[derive(Debug, Clone)]
pub enum OutSetIter<'a> {
    Links(slice::Iter<'a, usize>),
    Everything(Range<usize>),
}

impl Iterator for OutSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            OutSetIter::Links(it) => it.next().copied(),
            OutSetIter::Everything(range) => range.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            OutSetIter::Links(it) => it.size_hint(),
            OutSetIter::Everything(range) => range.size_hint(),
        }
    }
}

impl ExactSizeIterator for OutSetIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        Corpus::from_links([
            ("b.html", vec!["a.html", "c.html", "b.html"]),
            ("a.html", vec!["b.html", "missing.html"]),
            ("c.html", vec![]),
        ])
    }

    #[test]
    fn test_pages_sorted() {
        let corpus = sample();
        let pages: Vec<&str> = corpus.pages().collect();
        assert_eq!(pages, vec!["a.html", "b.html", "c.html"]);
        assert_eq!(corpus.index_of("c.html"), Some(2));
        assert_eq!(corpus.index_of("missing.html"), None);
    }

    #[test]
    fn test_self_and_dangling_links_removed() {
        let corpus = sample();
        assert_eq!(corpus.links_of("a.html").unwrap(), vec!["b.html"]);
        assert_eq!(corpus.links_of("b.html").unwrap(), vec!["a.html", "c.html"]);
        assert_eq!(corpus.link_count(), 3);
    }

    #[test]
    fn test_sink_out_set_is_every_page() {
        let corpus = sample();
        let c = corpus.index_of("c.html").unwrap();
        assert!(corpus.is_sink(c));

        let out = corpus.out_set(c);
        assert_eq!(out.len(), 3);
        assert!(out.contains(c));
        assert_eq!(out.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(out.get(2), Some(2));
        assert_eq!(out.get(3), None);
    }

    #[test]
    fn test_linked_out_set() {
        let corpus = sample();
        let b = corpus.index_of("b.html").unwrap();
        let out = corpus.out_set(b);
        assert_eq!(out.len(), 2);
        assert!(out.contains(0));
        assert!(!out.contains(1));
        assert_eq!(out.iter().len(), 2);
        assert_eq!(out.get(1), Some(2));
        assert_eq!(out.get(2), None);
    }

    #[test]
    fn test_duplicate_entries_merge() {
        let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec![]), ("a", vec!["b"])]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.links_of("a").unwrap(), vec!["b"]);
    }
}
