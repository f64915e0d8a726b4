//! PageRank estimation
//!
//! Two independent estimators over the same damped random-surfer chain:
//! - [`sampler`]: Monte Carlo visitation frequencies of a long random walk
//! - [`iteration`]: power iteration of the PageRank recurrence

pub mod iteration;
pub mod sampler;

pub use iteration::{
    iterate_pagerank, IterationReport, PowerIteration, SolverConfig, SolverState, Tolerance,
};
pub use sampler::{sample_pagerank, Sampler, SamplerConfig};

use crate::corpus::Corpus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rank of every page, iterated in lexicographic page order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranks(BTreeMap<String, f64>);

impl Ranks {
    /// Pair index-ordered scores with the corpus page names
    pub(crate) fn from_scores(corpus: &Corpus, scores: &[f64]) -> Self {
        Self(
            corpus
                .pages()
                .zip(scores.iter().copied())
                .map(|(page, score)| (page.to_string(), score))
                .collect(),
        )
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(page, &rank)| (page.as_str(), rank))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    /// Highest-ranked pages first; ties keep lexicographic order
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.0
    }
}
