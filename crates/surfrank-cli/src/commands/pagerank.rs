//! PageRank computation command

use crate::app::Cli;
use crate::output::{format_rankings, RankingResults};
use anyhow::{Context, Result};
use surfrank_core::{load_corpus, LoaderOptions, PowerIteration, RankConfig, Sampler};

/// Rank every page of the corpus by sampling and by iteration
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let options = LoaderOptions::default()
        .with_pattern(cli.pattern.clone())
        .with_recursive(cli.recursive);
    let corpus = load_corpus(&cli.corpus, &options)?;

    let sampled = Sampler::new(config.sampler_config()).run(&corpus)?;
    let report = PowerIteration::new(&corpus, config.solver_config())?.run()?;

    let results = RankingResults {
        samples: config.samples,
        sampled,
        iterations: report.iterations,
        iterated: report.ranks,
    };
    print!("{}", format_rankings(&results, cli.format));

    Ok(())
}

/// Config file (explicit or default), then `SURFRANK_*` variables, then flags
fn resolve_config(cli: &Cli) -> Result<RankConfig> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RankConfig::load()?,
    };

    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if cli.relative {
        config.relative_tolerance = true;
    }

    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);
    Ok(config)
}
