//! Terminal output formatter

use super::RankingResults;
use surfrank_core::Ranks;

pub fn format_results(results: &RankingResults) -> String {
    let mut output = format!(
        "PageRank Results from Sampling (n = {})\n",
        results.samples
    );
    push_ranks(&mut output, &results.sampled);

    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &results.iterated);

    output
}

fn push_ranks(output: &mut String, ranks: &Ranks) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfrank_core::{iterate_pagerank, Corpus, Sampler};

    #[test]
    fn test_labeled_blocks_in_page_order() {
        let corpus = Corpus::from_links([("b.html", vec!["a.html"]), ("a.html", vec![])]);
        let results = RankingResults {
            samples: 100,
            sampled: Sampler::default().with_samples(100).with_seed(1).run(&corpus).unwrap(),
            iterations: 0,
            iterated: iterate_pagerank(&corpus, 0.85).unwrap(),
        };

        let text = format_results(&results);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "PageRank Results from Sampling (n = 100)");
        assert!(lines[1].starts_with("  a.html: 0."));
        assert!(lines[2].starts_with("  b.html: 0."));
        assert_eq!(lines[3], "PageRank Results from Iteration");
        // four decimal places
        assert_eq!(lines[4].split(": ").nth(1).unwrap().len(), 6);
    }
}
