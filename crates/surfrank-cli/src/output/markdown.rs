//! Markdown output formatter

use super::RankingResults;
use surfrank_core::Ranks;

pub fn format_results(results: &RankingResults) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    output.push_str(&format!("## Sampling (n = {})\n\n", results.samples));
    push_table(&mut output, &results.sampled);

    output.push_str(&format!(
        "## Iteration ({} sweeps)\n\n",
        results.iterations
    ));
    push_table(&mut output, &results.iterated);

    output
}

fn push_table(output: &mut String, ranks: &Ranks) {
    output.push_str("| Page | Rank |\n|------|------|\n");
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
    }
    output.push('\n');
}
