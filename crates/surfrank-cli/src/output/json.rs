//! JSON output formatter

use super::RankingResults;

pub fn format_results(results: &RankingResults) -> String {
    let output = serde_json::json!({
        "sampling": {
            "samples": results.samples,
            "ranks": results.sampled,
        },
        "iteration": {
            "iterations": results.iterations,
            "ranks": results.iterated,
        },
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
