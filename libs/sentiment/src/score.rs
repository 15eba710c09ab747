//! Mapping from an integer rating to a sentiment label and polarity score.

use serde::{Deserialize, Serialize};

/// Three-way sentiment label derived from a numeric rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// Label a rating: positive for 4 and above, neutral for exactly 3,
/// negative for 2 and below.
///
/// Ratings outside the nominal 1-5 range are not rejected; they fall through
/// the same thresholds (e.g. 0 is negative, 7 is positive).
pub fn sentiment_for_rating(rating: i32) -> Sentiment {
    if rating >= 4 {
        Sentiment::Positive
    } else if rating == 3 {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

/// Rescale a rating linearly onto a signed unit-style score: `(r - 3) / 2`,
/// rounded to 2 decimal places. Maps 1 to -1.0, 3 to 0.0, 5 to +1.0.
///
/// The formula extrapolates for out-of-range ratings (0 yields -1.5).
pub fn polarity(rating: i32) -> f64 {
    round_dp((rating - 3) as f64 / 2.0, 2)
}

pub(crate) fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_maps_nominal_ratings_onto_half_steps() {
        assert_eq!(polarity(1), -1.0);
        assert_eq!(polarity(2), -0.5);
        assert_eq!(polarity(3), 0.0);
        assert_eq!(polarity(4), 0.5);
        assert_eq!(polarity(5), 1.0);
    }

    #[test]
    fn polarity_extrapolates_out_of_range_ratings() {
        assert_eq!(polarity(0), -1.5);
        assert_eq!(polarity(7), 2.0);
    }

    #[test]
    fn labels_are_exhaustive_and_non_overlapping() {
        for rating in -2..=8 {
            let label = sentiment_for_rating(rating);
            if rating >= 4 {
                assert_eq!(label, Sentiment::Positive, "rating {rating}");
            } else if rating == 3 {
                assert_eq!(label, Sentiment::Neutral, "rating {rating}");
            } else {
                assert_eq!(label, Sentiment::Negative, "rating {rating}");
            }
        }
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::from_str::<Sentiment>("\"negative\"").unwrap(),
            Sentiment::Negative
        );
    }
}
