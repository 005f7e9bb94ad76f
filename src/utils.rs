// src/utils.rs
use crate::api::types::{ComparisonMetrics, Keyword, SentimentCounts};

/// How many keywords each list shows.
const KEYWORD_DISPLAY_CAP: usize = 10;

/// The slice of a keyword list that actually gets rendered: at most the
/// first ten entries, in the order the backend ranked them.
pub fn visible_keywords(keywords: &[Keyword]) -> &[Keyword] {
    &keywords[..keywords.len().min(KEYWORD_DISPLAY_CAP)]
}

/// Positive/neutral/negative shares of the sentiment bar, in percent.
/// A zero-review payload renders an all-zero bar instead of dividing by
/// zero; the backend never defines that case, so the display layer does.
pub fn sentiment_percentages(counts: &SentimentCounts, total_reviews: u64) -> [f64; 3] {
    if total_reviews == 0 {
        return [0.0; 3];
    }
    let total = total_reviews as f64;
    [
        counts.positive as f64 / total * 100.0,
        counts.neutral as f64 / total * 100.0,
        counts.negative as f64 / total * 100.0,
    ]
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_kib(size: u64) -> String {
    format!("{:.2} KB", size as f64 / 1024.0)
}

/// Which model the comparison tab recommends. Derived at render time from
/// the accuracy fields; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    LogisticRegression,
    Vader,
    Equal,
}

pub fn recommended_model(metrics: &ComparisonMetrics) -> Recommendation {
    if metrics.logistic_regression.accuracy > metrics.vader.accuracy {
        Recommendation::LogisticRegression
    } else if metrics.vader.accuracy > metrics.logistic_regression.accuracy {
        Recommendation::Vader
    } else {
        Recommendation::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AgreementStats, ModelScores};

    fn metrics(vader_accuracy: f64, lr_accuracy: f64) -> ComparisonMetrics {
        let scores = |accuracy| ModelScores {
            accuracy,
            precision: accuracy,
            recall: accuracy,
            f1: accuracy,
        };
        ComparisonMetrics {
            vader: scores(vader_accuracy),
            logistic_regression: scores(lr_accuracy),
            comparison: AgreementStats {
                agreement_percent: 75.0,
                test_size: 100,
            },
        }
    }

    #[test]
    fn percentages_match_counts_over_total() {
        let counts = SentimentCounts {
            positive: 60,
            negative: 15,
            neutral: 25,
        };
        let [positive, neutral, negative] = sentiment_percentages(&counts, 100);
        assert_eq!(format_percent(positive), "60.0%");
        assert_eq!(format_percent(neutral), "25.0%");
        assert_eq!(format_percent(negative), "15.0%");
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let counts = SentimentCounts {
            positive: 1,
            negative: 1,
            neutral: 1,
        };
        let segments = sentiment_percentages(&counts, 3);
        let sum: f64 = segments.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_renders_an_empty_bar() {
        let counts = SentimentCounts {
            positive: 0,
            negative: 0,
            neutral: 0,
        };
        assert_eq!(sentiment_percentages(&counts, 0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn higher_accuracy_wins_the_recommendation() {
        assert_eq!(
            recommended_model(&metrics(0.70, 0.82)),
            Recommendation::LogisticRegression
        );
        // Swapping the accuracies flips the recommendation.
        assert_eq!(
            recommended_model(&metrics(0.82, 0.70)),
            Recommendation::Vader
        );
    }

    #[test]
    fn exact_tie_is_reported_as_equal() {
        assert_eq!(recommended_model(&metrics(0.75, 0.75)), Recommendation::Equal);
    }

    #[test]
    fn keyword_lists_cap_at_ten_without_reordering() {
        // Deliberately not sorted by score; the display layer must not
        // re-rank what the backend sent.
        let scores = [0.2, 0.9, 0.1, 0.8, 0.3, 0.7, 0.4, 0.6, 0.5, 0.95, 0.05, 0.85];
        let keywords: Vec<Keyword> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| Keyword {
                word: format!("word{}", i),
                score_adj_mean_over_df: *score,
            })
            .collect();

        let visible = visible_keywords(&keywords);
        assert_eq!(visible.len(), 10);
        for (i, keyword) in visible.iter().enumerate() {
            assert_eq!(keyword.word, format!("word{}", i));
            assert_eq!(keyword.score_adj_mean_over_df, scores[i]);
        }
    }

    #[test]
    fn short_keyword_lists_are_shown_whole() {
        let keywords = vec![Keyword {
            word: "great".to_string(),
            score_adj_mean_over_df: 0.8,
        }];
        assert_eq!(visible_keywords(&keywords).len(), 1);
        assert!(visible_keywords(&[]).is_empty());
    }

    #[test]
    fn formats_upload_size() {
        assert_eq!(format_kib(2048), "2.00 KB");
        assert_eq!(format_kib(1536), "1.50 KB");
    }
}
