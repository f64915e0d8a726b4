//! Random-surfer sampling
//!
//! Estimates PageRank as the visitation frequency of a simulated random
//! walk. Each step draws the next page from the transition model of the
//! current page. That distribution is a mixture: with probability `damping`
//! a uniform pick from the page's effective out-set, otherwise a uniform
//! pick from the whole corpus. Drawing the two stages directly is O(1) per
//! step and keeps no per-page state.

use super::Ranks;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use crate::graph::validate_damping;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Sampler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Probability of following a link (typically 0.85)
    pub damping: f64,
    /// Number of pages drawn
    pub samples: usize,
    /// Seed for the random stream; drawn from the OS when unset
    pub seed: Option<u64>,
    /// Number of independent walks the samples are split across
    pub workers: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 1_000_000,
            seed: None,
            workers: 1,
        }
    }
}

/// Monte Carlo PageRank estimator
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the number of samples
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.config.samples = samples;
        self
    }

    /// Seed the random stream for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Split the walk across `workers` parallel walks
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Run the sampler on a corpus.
    ///
    /// With one worker this is a single walk over one ChaCha8 stream. With
    /// more, each worker walks its share of the samples on its own stream
    /// of the same seed and the visit counts are summed.
    pub fn run(&self, corpus: &Corpus) -> Result<Ranks> {
        let SamplerConfig {
            damping,
            samples,
            seed,
            workers,
        } = self.config;
        validate(corpus, damping, samples)?;
        if workers == 0 {
            return Err(RankError::invalid("sampler needs at least one worker"));
        }

        let seed = seed.unwrap_or_else(rand::random);
        tracing::debug!(
            "Sampling {} pages with seed {} across {} worker(s)",
            samples,
            seed,
            workers
        );

        let counts = if workers == 1 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            walk_counts(corpus, damping, samples, &mut rng)
        } else {
            parallel_counts(corpus, damping, samples, seed, workers)
        };

        Ok(counts_to_ranks(corpus, &counts, samples))
    }
}

/// Estimate PageRank by sampling `samples` pages from a random walk.
///
/// The walk starts on a uniformly chosen page and draws every step from
/// `rng`, which is never reseeded.
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Ranks> {
    validate(corpus, damping, samples)?;
    let counts = walk_counts(corpus, damping, samples, rng);
    Ok(counts_to_ranks(corpus, &counts, samples))
}

fn validate(corpus: &Corpus, damping: f64, samples: usize) -> Result<()> {
    validate_damping(damping)?;
    if samples == 0 {
        return Err(RankError::invalid("sample count must be at least 1"));
    }
    if corpus.is_empty() {
        return Err(RankError::invalid("corpus is empty"));
    }
    Ok(())
}

/// Walk `steps` draws and count the visits to each page.
fn walk_counts<R: Rng>(corpus: &Corpus, damping: f64, steps: usize, rng: &mut R) -> Vec<u64> {
    let n = corpus.len();
    let mut counts = vec![0u64; n];
    if steps == 0 {
        return counts;
    }

    let mut current = rng.random_range(0..n);
    for _ in 0..steps {
        current = next_page(corpus, current, damping, rng);
        counts[current] += 1;
    }

    counts
}

/// Draw one step of the random surfer from `current`.
fn next_page<R: Rng>(corpus: &Corpus, current: usize, damping: f64, rng: &mut R) -> usize {
    if rng.random_bool(damping) {
        let out = corpus.out_set(current);
        // out-sets are never empty in a non-empty corpus
        out.get(rng.random_range(0..out.len())).unwrap_or(current)
    } else {
        rng.random_range(0..corpus.len())
    }
}

fn parallel_counts(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: u64,
    workers: usize,
) -> Vec<u64> {
    let workers = workers.min(samples);
    let base = samples / workers;
    let extra = samples % workers;

    (0..workers)
        .into_par_iter()
        .map(|part| {
            let steps = base + usize::from(part < extra);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(part as u64);
            walk_counts(corpus, damping, steps, &mut rng)
        })
        .reduce(
            || vec![0u64; corpus.len()],
            |mut acc, part| {
                for (total, count) in acc.iter_mut().zip(part) {
                    *total += count;
                }
                acc
            },
        )
}

fn counts_to_ranks(corpus: &Corpus, counts: &[u64], samples: usize) -> Ranks {
    debug_assert_eq!(counts.iter().sum::<u64>(), samples as u64);
    let total = samples as f64;
    let scores: Vec<f64> = counts.iter().map(|&c| c as f64 / total).collect();
    Ranks::from_scores(corpus, &scores)
}
