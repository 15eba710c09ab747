//! Store seam for the sentiment aggregation service.

use async_trait::async_trait;
use pulse_sentiment::FeedbackSummary;

use crate::{models::Feedback, Result};

/// The store operations the aggregation needs: an existence check by key, a
/// filtered fetch by key, and an upsert-by-key. Any keyed store with an
/// indexed product id column can implement this.
#[async_trait]
pub trait SentimentStore: Send + Sync {
    async fn product_exists(&self, product_id: i64) -> Result<bool>;

    /// All feedback for the product, in insertion order. The order matters:
    /// extrema tie-breaks keep the first entry encountered.
    async fn feedback_for_product(&self, product_id: i64) -> Result<Vec<Feedback>>;

    /// Replace the whole summary row for the product, inserting if absent.
    async fn upsert_summary(&self, summary: &FeedbackSummary) -> Result<()>;
}
