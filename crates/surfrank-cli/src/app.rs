//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "surfrank")]
#[command(
    author,
    version,
    about = "Rank a directory of interlinked HTML pages with PageRank"
)]
pub struct Cli {
    /// Directory containing the HTML pages
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of pages drawn by the random surfer
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the random surfer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Parallel walks the samples are split across
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Per-page convergence threshold of the iterative solver
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Treat the tolerance as relative to each page's rank
    #[arg(long)]
    pub relative: bool,

    /// Also load pages from subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Glob pattern selecting page files
    #[arg(long, default_value = "*.html")]
    pub pattern: String,

    /// YAML config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requires_exactly_one_corpus() {
        assert!(Cli::try_parse_from(["surfrank"]).is_err());
        assert!(Cli::try_parse_from(["surfrank", "a", "b"]).is_err());

        let cli = Cli::try_parse_from(["surfrank", "corpus0", "-n", "10", "--seed", "3"]).unwrap();
        assert_eq!(cli.corpus, PathBuf::from("corpus0"));
        assert_eq!(cli.samples, Some(10));
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.format, OutputFormat::Cli);
    }
}
