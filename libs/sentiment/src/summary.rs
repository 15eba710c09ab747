//! Single-pass reduction of scored feedback into summary statistics.

use serde::{Deserialize, Serialize};

use crate::score::{polarity, round_dp, sentiment_for_rating, Sentiment};

/// One feedback record with its derived polarity and sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFeedback {
    pub product_id: i64,
    pub feedback_text: String,
    pub rating: i32,
    pub polarity: f64,
    pub sentiment: Sentiment,
}

impl ScoredFeedback {
    pub fn new(product_id: i64, feedback_text: String, rating: i32) -> Self {
        Self {
            product_id,
            feedback_text,
            rating,
            polarity: polarity(rating),
            sentiment: sentiment_for_rating(rating),
        }
    }
}

/// The extremum entry kept in a summary (most positive or most negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeFeedback {
    pub text: String,
    pub polarity: f64,
    pub rating: i32,
}

impl From<&ScoredFeedback> for ExtremeFeedback {
    fn from(scored: &ScoredFeedback) -> Self {
        Self {
            text: scored.feedback_text.clone(),
            polarity: scored.polarity,
            rating: scored.rating,
        }
    }
}

/// Denormalized per-product summary, one per product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub product_id: i64,
    pub total_feedbacks: i64,
    pub average_polarity: f64,
    pub average_sentiment: Sentiment,
    pub most_positive_feedback: Option<ExtremeFeedback>,
    pub most_negative_feedback: Option<ExtremeFeedback>,
}

/// Reduce scored feedback into summary statistics.
///
/// The average polarity is rounded to 3 decimal places and defined as 0.0
/// for an empty slice. Extrema keep the *first* entry on ties, so the result
/// is deterministic as long as the caller supplies entries in insertion
/// order. The average label is positive above 0.2, negative below -0.2,
/// neutral in between.
pub fn summarize(product_id: i64, scored: &[ScoredFeedback]) -> FeedbackSummary {
    let total = scored.len() as i64;

    let average_polarity = if total == 0 {
        0.0
    } else {
        round_dp(
            scored.iter().map(|s| s.polarity).sum::<f64>() / total as f64,
            3,
        )
    };

    let mut most_positive: Option<&ScoredFeedback> = None;
    let mut most_negative: Option<&ScoredFeedback> = None;
    for entry in scored {
        // Strict comparisons keep the first entry seen on ties.
        match most_positive {
            Some(best) if entry.polarity <= best.polarity => {}
            _ => most_positive = Some(entry),
        }
        match most_negative {
            Some(worst) if entry.polarity >= worst.polarity => {}
            _ => most_negative = Some(entry),
        }
    }

    let average_sentiment = if average_polarity > 0.2 {
        Sentiment::Positive
    } else if average_polarity < -0.2 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    FeedbackSummary {
        product_id,
        total_feedbacks: total,
        average_polarity,
        average_sentiment,
        most_positive_feedback: most_positive.map(ExtremeFeedback::from),
        most_negative_feedback: most_negative.map(ExtremeFeedback::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(ratings: &[i32]) -> Vec<ScoredFeedback> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| ScoredFeedback::new(1, format!("feedback {i}"), r))
            .collect()
    }

    #[test]
    fn mixed_ratings_average_and_extrema() {
        let entries = scored(&[5, 5, 1]);
        let summary = summarize(1, &entries);

        assert_eq!(summary.total_feedbacks, 3);
        assert_eq!(summary.average_polarity, 0.333);
        assert_eq!(summary.average_sentiment, Sentiment::Positive);
        assert_eq!(summary.most_positive_feedback.as_ref().unwrap().polarity, 1.0);
        assert_eq!(
            summary.most_negative_feedback.as_ref().unwrap().polarity,
            -1.0
        );
    }

    #[test]
    fn single_neutral_rating_is_its_own_extrema() {
        let entries = scored(&[3]);
        let summary = summarize(7, &entries);

        assert_eq!(summary.total_feedbacks, 1);
        assert_eq!(summary.average_polarity, 0.0);
        assert_eq!(summary.average_sentiment, Sentiment::Neutral);
        assert_eq!(
            summary.most_positive_feedback,
            summary.most_negative_feedback
        );
    }

    #[test]
    fn ties_keep_the_first_entry_in_order() {
        let entries = scored(&[5, 5, 1, 1]);
        let summary = summarize(1, &entries);

        assert_eq!(
            summary.most_positive_feedback.unwrap().text,
            "feedback 0"
        );
        assert_eq!(
            summary.most_negative_feedback.unwrap().text,
            "feedback 2"
        );
    }

    #[test]
    fn empty_input_yields_zero_average_and_no_extrema() {
        let summary = summarize(42, &[]);

        assert_eq!(summary.total_feedbacks, 0);
        assert_eq!(summary.average_polarity, 0.0);
        assert_eq!(summary.average_sentiment, Sentiment::Neutral);
        assert!(summary.most_positive_feedback.is_none());
        assert!(summary.most_negative_feedback.is_none());
    }

    #[test]
    fn negative_average_crosses_label_threshold() {
        let summary = summarize(1, &scored(&[1, 1, 2]));
        assert_eq!(summary.average_polarity, -0.833);
        assert_eq!(summary.average_sentiment, Sentiment::Negative);
    }

    #[test]
    fn average_near_zero_stays_neutral() {
        // avg polarity = (0.5 - 0.5) / 2 = 0.0
        let summary = summarize(1, &scored(&[4, 2]));
        assert_eq!(summary.average_sentiment, Sentiment::Neutral);
    }
}
