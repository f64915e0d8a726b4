//! Error types for surfrank

use thiserror::Error;

/// Result type alias using RankError
pub type Result<T> = std::result::Result<T, RankError>;

/// Error type alias for convenience
pub type Error = RankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
    pub const NON_CONVERGENCE: i32 = 4;
}

/// Main error type for surfrank
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No convergence after {iterations} iterations (last delta {delta:e})")]
    NonConvergence { iterations: usize, delta: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Config(_) | Self::GlobPattern(_) => {
                exit_codes::INVALID_INPUT
            }
            Self::NonConvergence { .. } => exit_codes::NON_CONVERGENCE,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RankError::invalid("bad damping").exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            RankError::NonConvergence {
                iterations: 10,
                delta: 0.5
            }
            .exit_code(),
            exit_codes::NON_CONVERGENCE
        );
        let io = RankError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.exit_code(), exit_codes::GENERAL_ERROR);
    }
}
