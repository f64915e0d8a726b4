//! Configuration management

use crate::error::{RankError, Result};
use crate::rank::{SamplerConfig, SolverConfig, Tolerance};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking parameters shared by the sampler and the solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping anywhere
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Pages drawn by the sampler
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page convergence threshold of the solver
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Interpret `tolerance` relative to each page's rank
    #[serde(default)]
    pub relative_tolerance: bool,

    /// Solver sweep ceiling
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Sampler seed (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Parallel sampler walks
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            relative_tolerance: false,
            max_iterations: default_max_iterations(),
            seed: None,
            workers: default_workers(),
        }
    }
}

fn default_damping() -> f64 {
    0.85
}

fn default_samples() -> usize {
    1_000_000
}

fn default_tolerance() -> f64 {
    1e-4
}

fn default_max_iterations() -> usize {
    10_000
}

fn default_workers() -> usize {
    1
}

fn parse_override<T: std::str::FromStr>(var: &str, value: Option<String>) -> Result<Option<T>> {
    value
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| RankError::Config(format!("invalid value for {}: {:?}", var, raw)))
        })
        .transpose()
}

impl RankConfig {
    /// Load config from default path, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::read(&path)?
        } else {
            RankConfig::default()
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Override settings from `SURFRANK_DAMPING`, `SURFRANK_SAMPLES` and
    /// `SURFRANK_SEED`
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(damping) = parse_override("SURFRANK_DAMPING", lookup("SURFRANK_DAMPING"))? {
            self.damping = damping;
        }
        if let Some(samples) = parse_override("SURFRANK_SAMPLES", lookup("SURFRANK_SAMPLES"))? {
            self.samples = samples;
        }
        if let Some(seed) = parse_override("SURFRANK_SEED", lookup("SURFRANK_SEED"))? {
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Save config to a YAML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        crate::graph::validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::invalid("sample count must be at least 1"));
        }
        if !(self.tolerance > 0.0) {
            return Err(RankError::invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(RankError::invalid("sampler needs at least one worker"));
        }
        Ok(())
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            damping: self.damping,
            samples: self.samples,
            seed: self.seed,
            workers: self.workers,
        }
    }

    pub fn solver_config(&self) -> SolverConfig {
        let tolerance = if self.relative_tolerance {
            Tolerance::Relative(self.tolerance)
        } else {
            Tolerance::Absolute(self.tolerance)
        };
        SolverConfig {
            damping: self.damping,
            tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping: 0.5\nworkers: 4\n").unwrap();

        let config = RankConfig::load_from(&path).unwrap();
        assert_eq!(config.damping, 0.5);
        assert_eq!(config.workers, 4);
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.max_iterations, 10_000);
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let mut config: RankConfig = serde_yaml::from_str("samples: 500\ndamping: 0.5\n").unwrap();
        config
            .apply_overrides(|var| match var {
                "SURFRANK_SAMPLES" => Some("1234".to_string()),
                "SURFRANK_SEED" => Some("9".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.samples, 1234);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.damping, 0.5);
    }

    #[test]
    fn test_unparseable_override() {
        let mut config = RankConfig::default();
        let result = config.apply_overrides(|var| {
            (var == "SURFRANK_DAMPING").then(|| "high".to_string())
        });
        assert!(matches!(result, Err(RankError::Config(_))));
        assert_eq!(config.damping, 0.85);
    }

    #[test]
    fn test_invalid_yaml_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "damping: 1.0\n").unwrap();
        assert!(matches!(
            RankConfig::load_from(&path),
            Err(RankError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yml");
        let config = RankConfig {
            seed: Some(7),
            relative_tolerance: true,
            ..RankConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(RankConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_solver_config_tolerance_mode() {
        let mut config = RankConfig::default();
        assert_eq!(
            config.solver_config().tolerance,
            Tolerance::Absolute(config.tolerance)
        );
        config.relative_tolerance = true;
        assert_eq!(
            config.solver_config().tolerance,
            Tolerance::Relative(config.tolerance)
        );
    }
}
