//! Surfrank CLI
//!
//! Rank a directory of interlinked HTML pages with PageRank.

use clap::Parser;
use std::process;
use surfrank_core::error::exit_codes;
use surfrank_core::RankError;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::pagerank::run(&cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<RankError>()
            .map(RankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        process::exit(code);
    }
}
