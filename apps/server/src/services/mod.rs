//! Business logic layer.

pub mod sentiment;

pub use sentiment::{SentimentAnalysis, SentimentService};
