//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use surfrank_core::Ranks;

/// Results of both ranking methods on one corpus
pub struct RankingResults {
    pub samples: usize,
    pub sampled: Ranks,
    pub iterations: usize,
    pub iterated: Ranks,
}

/// Format ranking results
pub fn format_rankings(results: &RankingResults, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_results(results),
        OutputFormat::Csv => csv::format_results(results),
        OutputFormat::Md => markdown::format_results(results),
        OutputFormat::Cli => terminal::format_results(results),
    }
}
