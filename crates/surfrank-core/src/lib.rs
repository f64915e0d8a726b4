//! Surfrank Core Library
//!
//! PageRank estimation over a small, static corpus of interlinked pages.
//!
//! # Features
//! - Corpus loading from a directory of HTML pages
//! - Damped random-surfer transition model with sink redistribution
//! - Monte Carlo estimation from a seeded random walk
//! - Power iteration of the PageRank recurrence to a fixed tolerance

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use corpus::{load_corpus, Corpus, LoaderOptions, OutSet};
pub use error::{RankError, Error, Result};
pub use graph::{transition_model, TransitionDistribution};
pub use rank::{
    iterate_pagerank, sample_pagerank, IterationReport, PowerIteration, Ranks, Sampler,
    SamplerConfig, SolverConfig, SolverState, Tolerance,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "surfrank";
