// Suggestion accuracy evaluation
//
// Runs the ranker over (misspelled, expected) pairs and records the 1-based
// position at which the expected word comes back.

use std::fmt;

use serde::Serialize;

use crate::suggestion::{SuggestOptions, SuggestionRanker};

/// Outcome for one (input, expected) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub suggestions: Vec<String>,
    /// 1-based position of `expected` in `suggestions`.
    pub rank: Option<usize>,
}

/// Counts over a set of [`AccuracyResult`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_words: usize,
    pub top_one: usize,
    pub top_five: usize,
    pub top_eight: usize,
    pub any_position: usize,
    /// The ranker returned nothing.
    pub no_suggestions: usize,
    /// Suggestions came back but none was the expected word.
    pub only_wrong: usize,
}

impl Summary {
    pub fn new(results: &[AccuracyResult]) -> Self {
        let mut summary = Summary::default();

        for result in results {
            summary.total_words += 1;

            match result.rank {
                Some(rank) => {
                    summary.any_position += 1;
                    if rank == 1 {
                        summary.top_one += 1;
                    }
                    if rank <= 5 {
                        summary.top_five += 1;
                    }
                    if rank <= 8 {
                        summary.top_eight += 1;
                    }
                }
                None if result.suggestions.is_empty() => summary.no_suggestions += 1,
                None => summary.only_wrong += 1,
            }
        }

        summary
    }

    /// `count` as a percentage of all evaluated words; 0 for an empty run.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        count as f64 / self.total_words as f64 * 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#1] {:.2}% [^5] {:.2}% [^8] {:.2}% [any] {:.2}% [none] {:.2}% [wrong] {:.2}%",
            self.percent(self.top_one),
            self.percent(self.top_five),
            self.percent(self.top_eight),
            self.percent(self.any_position),
            self.percent(self.no_suggestions),
            self.percent(self.only_wrong),
        )
    }
}

/// Per-word results together with their summary.
#[derive(Debug, Clone, Serialize)]
pub struct AccuracyReport {
    pub summary: Summary,
    pub results: Vec<AccuracyResult>,
}

/// Rank suggestions for every `(input, expected)` pair.
///
/// Inputs are ranked whether or not they are valid words.
pub fn evaluate<I, S>(
    ranker: &SuggestionRanker<'_>,
    pairs: I,
    options: &SuggestOptions,
) -> AccuracyReport
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let results: Vec<AccuracyResult> = pairs
        .into_iter()
        .map(|(input, expected)| {
            let (input, expected) = (input.as_ref(), expected.as_ref());
            let suggestions: Vec<String> = ranker
                .rank(input, options)
                .into_iter()
                .map(|s| s.word)
                .collect();
            let rank = suggestions
                .iter()
                .position(|s| s == expected)
                .map(|i| i + 1);
            log::debug!("{input} -> {expected}: {rank:?}");
            AccuracyResult {
                input: input.to_string(),
                expected: expected.to_string(),
                suggestions,
                rank,
            }
        })
        .collect();

    AccuracyReport {
        summary: Summary::new(&results),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pada_core::Category;

    use crate::lexicon::Lexicon;
    use crate::morphology::SuffixCatalog;

    fn result(rank: Option<usize>, suggestions: &[&str]) -> AccuracyResult {
        AccuracyResult {
            input: "ಅ".to_string(),
            expected: "ಆ".to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            rank,
        }
    }

    #[test]
    fn summary_buckets_ranks() {
        let results = [
            result(Some(1), &["ಆ"]),
            result(Some(5), &["ಇ", "ಈ", "ಉ", "ಊ", "ಆ"]),
            result(Some(7), &["ಇ"; 8]),
            result(None, &[]),
            result(None, &["ಇ"]),
        ];
        let summary = Summary::new(&results);
        assert_eq!(summary.total_words, 5);
        assert_eq!(summary.top_one, 1);
        assert_eq!(summary.top_five, 2);
        assert_eq!(summary.top_eight, 3);
        assert_eq!(summary.any_position, 3);
        assert_eq!(summary.no_suggestions, 1);
        assert_eq!(summary.only_wrong, 1);
        assert_eq!(summary.percent(summary.top_five), 40.0);
    }

    #[test]
    fn empty_run_reports_zero_percent() {
        let summary = Summary::new(&[]);
        assert_eq!(summary.percent(summary.top_one), 0.0);
        assert_eq!(
            summary.to_string(),
            "[#1] 0.00% [^5] 0.00% [^8] 0.00% [any] 0.00% [none] 0.00% [wrong] 0.00%"
        );
    }

    #[test]
    fn rank_is_one_based() {
        let entries = [
            ("ಮನೆ", Category::Uncategorized),
            ("ಮರ", Category::Uncategorized),
        ];
        let lexicon = Lexicon::from_entries(entries).unwrap();
        let catalog = SuffixCatalog::paradigm();
        let ranker = SuggestionRanker::new(&lexicon, &catalog);

        let pairs = [("ಮನ", "ಮನೆ"), ("ಮನ", "ಭಾರತ")];
        let report = evaluate(&ranker, pairs, &SuggestOptions::default());
        assert_eq!(report.results[0].rank, Some(1));
        assert_eq!(report.results[1].rank, None);
        assert_eq!(report.summary.only_wrong, 1);
    }

    #[test]
    fn empty_lexicon_counts_as_no_suggestions() {
        let lexicon = Lexicon::new();
        let catalog = SuffixCatalog::paradigm();
        let ranker = SuggestionRanker::new(&lexicon, &catalog);

        let pairs = vec![("ಮನ".to_string(), "ಮನೆ".to_string())];
        let report = evaluate(&ranker, pairs, &SuggestOptions::default());
        assert_eq!(report.summary.no_suggestions, 1);
        assert!(report.results[0].suggestions.is_empty());
    }
}
