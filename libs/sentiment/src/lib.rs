//! Rating-based sentiment scoring and summary statistics.
//!
//! Everything in this crate is a pure function of its inputs: no I/O, no
//! async. The server crate feeds it feedback rows fetched from the store and
//! persists the resulting [`FeedbackSummary`].

mod score;
mod summary;

pub use score::{polarity, sentiment_for_rating, Sentiment};
pub use summary::{summarize, ExtremeFeedback, FeedbackSummary, ScoredFeedback};
