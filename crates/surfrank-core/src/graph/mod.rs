//! Random-surfer Markov chain over a corpus

mod transition;

pub use transition::{transition_model, validate_damping, TransitionDistribution};
