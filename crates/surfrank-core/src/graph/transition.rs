//! Random-surfer transition model

use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Next-page distribution for a surfer standing on one page.
///
/// Covers every page of the corpus, indexed like [`Corpus`] pages.
#[derive(Debug, Clone)]
pub struct TransitionDistribution<'a> {
    corpus: &'a Corpus,
    source: usize,
    probabilities: Vec<f64>,
}

impl<'a> TransitionDistribution<'a> {
    /// Page the surfer is standing on
    pub fn source(&self) -> &'a str {
        self.corpus.page_name(self.source).unwrap_or_default()
    }

    /// Probability of moving to `page`, `None` if the page is unknown
    pub fn probability(&self, page: &str) -> Option<f64> {
        self.corpus
            .index_of(page)
            .map(|i| self.probabilities[i])
    }

    /// Probabilities indexed by page index
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// `(page, probability)` pairs in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.corpus.pages().zip(self.probabilities.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

/// Ensure `damping` lies strictly inside (0, 1)
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::invalid(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

/// Compute the next-page distribution for a surfer on `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// uniformly; otherwise it jumps to any page uniformly. A sink page links
/// to every page, which makes its distribution uniform.
pub fn transition_model<'a>(
    corpus: &'a Corpus,
    page: &str,
    damping: f64,
) -> Result<TransitionDistribution<'a>> {
    validate_damping(damping)?;
    if corpus.is_empty() {
        return Err(RankError::invalid("corpus is empty"));
    }
    let source = corpus
        .index_of(page)
        .ok_or_else(|| RankError::invalid(format!("page not in corpus: {}", page)))?;

    let n = corpus.len();
    let mut probabilities = vec![(1.0 - damping) / n as f64; n];
    let targets = corpus.out_set(source);
    let follow = damping / targets.len() as f64;
    for target in targets.iter() {
        probabilities[target] += follow;
    }

    Ok(TransitionDistribution {
        corpus,
        source,
        probabilities,
    })
}
