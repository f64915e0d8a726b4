//! CSV output formatter

use super::RankingResults;
use surfrank_core::Ranks;

pub fn format_results(results: &RankingResults) -> String {
    let mut output = String::from("method,page,rank\n");
    push_rows(&mut output, "sampling", &results.sampled);
    push_rows(&mut output, "iteration", &results.iterated);
    output
}

fn push_rows(output: &mut String, method: &str, ranks: &Ranks) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("{},{},{:.4}\n", method, escape_csv(page), rank));
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
