//! Power iteration of the PageRank recurrence
//!
//! Every sweep computes, for each page `p`,
//!
//! ```text
//! new(p) = (1 - d) / N + d * sum(old(i) / |out(i)|)  over pages i linking to p
//! ```
//!
//! where `out(i)` is the effective out-set from [`Corpus::out_set`], so a
//! sink spreads its rank over every page exactly as the transition model
//! does. Sweeps are double-buffered: a sweep only reads the previous
//! sweep's values.

use super::Ranks;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};
use crate::graph::validate_damping;

/// Per-page convergence criterion between consecutive sweeps
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// `|new - old| < eps`
    Absolute(f64),
    /// `|new - old| < eps * old`
    Relative(f64),
}

impl Tolerance {
    fn value(&self) -> f64 {
        match *self {
            Tolerance::Absolute(eps) | Tolerance::Relative(eps) => eps,
        }
    }

    fn is_settled(&self, old: f64, new: f64) -> bool {
        let delta = (new - old).abs();
        match *self {
            Tolerance::Absolute(eps) => delta < eps,
            Tolerance::Relative(eps) => delta < eps * old.abs(),
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(1e-4)
    }
}

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Convergence criterion
    pub tolerance: Tolerance,
    /// Sweep ceiling before reporting non-convergence
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: Tolerance::default(),
            max_iterations: 10_000,
        }
    }
}

impl SolverConfig {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Lifecycle of a [`PowerIteration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Uniform ranks, no sweep yet
    Initialized,
    /// At least one sweep done, some page still moving
    Iterating { iteration: usize },
    /// Every page settled; terminal
    Converged { iterations: usize },
}

/// Result of a converged solver run
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub ranks: Ranks,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Largest per-page change in the final sweep
    pub delta: f64,
}

/// Stepwise power-iteration solver
#[derive(Debug, Clone)]
pub struct PowerIteration<'a> {
    corpus: &'a Corpus,
    config: SolverConfig,
    scores: Vec<f64>,
    next: Vec<f64>,
    state: SolverState,
    delta: f64,
}

impl<'a> PowerIteration<'a> {
    /// Start from uniform ranks `1/N`
    pub fn new(corpus: &'a Corpus, config: SolverConfig) -> Result<Self> {
        validate_damping(config.damping)?;
        if corpus.is_empty() {
            return Err(RankError::invalid("corpus is empty"));
        }
        let eps = config.tolerance.value();
        if !(eps > 0.0) {
            return Err(RankError::invalid(format!(
                "tolerance must be positive, got {}",
                eps
            )));
        }

        let n = corpus.len();
        Ok(Self {
            corpus,
            config,
            scores: vec![1.0 / n as f64; n],
            next: vec![0.0; n],
            state: SolverState::Initialized,
            delta: f64::INFINITY,
        })
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn is_converged(&self) -> bool {
        matches!(self.state, SolverState::Converged { .. })
    }

    /// Number of sweeps performed so far
    pub fn iterations(&self) -> usize {
        match self.state {
            SolverState::Initialized => 0,
            SolverState::Iterating { iteration } => iteration,
            SolverState::Converged { iterations } => iterations,
        }
    }

    /// Largest per-page change of the last sweep
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Current ranks
    pub fn ranks(&self) -> Ranks {
        Ranks::from_scores(self.corpus, &self.scores)
    }

    /// Perform one synchronous sweep and return its largest per-page change.
    ///
    /// A converged solver is left untouched. Fails with
    /// [`RankError::NonConvergence`] once the sweep ceiling is reached.
    pub fn step(&mut self) -> Result<f64> {
        let iteration = match self.state {
            SolverState::Converged { .. } => return Ok(self.delta),
            SolverState::Initialized => 1,
            SolverState::Iterating { iteration } => iteration + 1,
        };
        if iteration > self.config.max_iterations {
            return Err(RankError::NonConvergence {
                iterations: iteration - 1,
                delta: self.delta,
            });
        }

        self.sweep();

        let tolerance = self.config.tolerance;
        let mut delta = 0.0f64;
        let mut settled = true;
        for (&old, &new) in self.scores.iter().zip(self.next.iter()) {
            delta = delta.max((new - old).abs());
            settled &= tolerance.is_settled(old, new);
        }

        std::mem::swap(&mut self.scores, &mut self.next);
        self.delta = delta;
        self.state = if settled {
            SolverState::Converged {
                iterations: iteration,
            }
        } else {
            SolverState::Iterating { iteration }
        };

        tracing::debug!("Sweep {}: max delta {:e}", iteration, delta);
        Ok(delta)
    }

    /// Sweep until converged
    pub fn run(mut self) -> Result<IterationReport> {
        while !self.is_converged() {
            self.step()?;
        }

        tracing::info!(
            "Power iteration converged after {} sweeps (delta {:e})",
            self.iterations(),
            self.delta
        );
        Ok(IterationReport {
            ranks: self.ranks(),
            iterations: self.iterations(),
            delta: self.delta,
        })
    }

    /// Fill `next` from `scores`
    fn sweep(&mut self) {
        let n = self.corpus.len() as f64;
        let damping = self.config.damping;

        self.next.fill((1.0 - damping) / n);
        for (source, &rank) in self.scores.iter().enumerate() {
            let targets = self.corpus.out_set(source);
            let share = damping * rank / targets.len() as f64;
            for target in targets.iter() {
                self.next[target] += share;
            }
        }
    }
}

/// Compute PageRank by power iteration with the default tolerance.
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Ranks> {
    let config = SolverConfig::default().with_damping(damping);
    Ok(PowerIteration::new(corpus, config)?.run()?.ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_pages() -> Corpus {
        Corpus::from_links([("A", vec!["B"]), ("B", vec!["A", "C"]), ("C", vec!["A"])])
    }

    #[test]
    fn test_three_page_scenario() {
        let corpus = three_pages();
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();

        assert!(ranks.get("A").unwrap() > ranks.get("C").unwrap());
        assert!((ranks.sum() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_single_page() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]);
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        assert!((ranks.get("A").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_state_machine() {
        let corpus = three_pages();
        let mut solver = PowerIteration::new(&corpus, SolverConfig::default()).unwrap();
        assert_eq!(solver.state(), SolverState::Initialized);
        assert_eq!(solver.iterations(), 0);

        solver.step().unwrap();
        assert_eq!(solver.state(), SolverState::Iterating { iteration: 1 });

        while !solver.is_converged() {
            solver.step().unwrap();
        }
        let iterations = solver.iterations();
        assert!(matches!(solver.state(), SolverState::Converged { .. }));

        // terminal: further steps change nothing
        let before = solver.ranks();
        solver.step().unwrap();
        assert_eq!(solver.ranks(), before);
        assert_eq!(solver.iterations(), iterations);
    }

    #[test]
    fn test_sweep_is_synchronous() {
        // After one sweep from uniform ranks every value must derive from 1/3
        let corpus = three_pages();
        let mut solver = PowerIteration::new(&corpus, SolverConfig::default()).unwrap();
        solver.step().unwrap();
        let ranks = solver.ranks();

        let t = 0.15 / 3.0;
        let third = 1.0 / 3.0;
        let expected_a = t + 0.85 * (third + third / 2.0);
        let expected_b = t + 0.85 * third;
        let expected_c = t + 0.85 * (third / 2.0);
        assert!((ranks.get("A").unwrap() - expected_a).abs() < 1e-12);
        assert!((ranks.get("B").unwrap() - expected_b).abs() < 1e-12);
        assert!((ranks.get("C").unwrap() - expected_c).abs() < 1e-12);
    }

    #[test]
    fn test_ceiling_reports_non_convergence() {
        let corpus = three_pages();
        let config = SolverConfig::default()
            .with_tolerance(Tolerance::Absolute(1e-300))
            .with_max_iterations(3);
        let err = PowerIteration::new(&corpus, config).unwrap().run().unwrap_err();
        assert!(matches!(err, RankError::NonConvergence { iterations: 3, .. }));
    }

    #[test]
    fn test_relative_tolerance_is_stricter_for_small_ranks() {
        let corpus = three_pages();
        let absolute = PowerIteration::new(&corpus, SolverConfig::default())
            .unwrap()
            .run()
            .unwrap();
        let relative = PowerIteration::new(
            &corpus,
            SolverConfig::default().with_tolerance(Tolerance::Relative(1e-4)),
        )
        .unwrap()
        .run()
        .unwrap();
        assert!(relative.iterations >= absolute.iterations);
        assert!((relative.ranks.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_inputs() {
        let corpus = three_pages();
        assert!(matches!(
            iterate_pagerank(&corpus, 0.0),
            Err(RankError::InvalidInput(_))
        ));
        assert!(matches!(
            iterate_pagerank(&Corpus::default(), 0.85),
            Err(RankError::InvalidInput(_))
        ));
        let config = SolverConfig::default().with_tolerance(Tolerance::Absolute(0.0));
        assert!(matches!(
            PowerIteration::new(&corpus, config),
            Err(RankError::InvalidInput(_))
        ));
    }
}
