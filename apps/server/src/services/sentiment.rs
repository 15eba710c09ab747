//! Sentiment aggregation service.
//!
//! `analyze` is the one operation with real semantics in this system: it
//! scores every rated feedback record for a product, reduces the set into
//! summary statistics and persists them as a single denormalized row,
//! replacing whatever was there before.

use std::sync::Arc;

use pulse_sentiment::{summarize, FeedbackSummary, ScoredFeedback};

use crate::{db::SentimentStore, Error, Result};

pub struct SentimentService {
    store: Arc<dyn SentimentStore>,
}

/// What one `analyze` call produced: the per-record scores and the summary
/// that was written to the store.
#[derive(Debug, Clone)]
pub struct SentimentAnalysis {
    pub analyzed: Vec<ScoredFeedback>,
    pub summary: FeedbackSummary,
}

impl SentimentService {
    pub fn new(store: Arc<dyn SentimentStore>) -> Self {
        Self { store }
    }

    /// Score all feedback for a product and upsert the summary row.
    ///
    /// Preconditions, checked in order and without writing anything on
    /// failure: the product must exist (otherwise `InvalidRequest`) and at
    /// least one feedback record must exist for it (otherwise `NotFound`).
    ///
    /// Records without a rating are skipped entirely; they appear in no
    /// count and no statistic. The summary write is a full replacement of
    /// the previous row for this product id, last writer wins; no atomicity
    /// with the fetch is attempted.
    pub async fn analyze(&self, product_id: i64) -> Result<SentimentAnalysis> {
        if !self.store.product_exists(product_id).await? {
            return Err(Error::InvalidRequest(format!(
                "product {product_id} does not exist"
            )));
        }

        let records = self.store.feedback_for_product(product_id).await?;
        if records.is_empty() {
            return Err(Error::NotFound(format!(
                "no feedback found for product {product_id}"
            )));
        }

        let analyzed: Vec<ScoredFeedback> = records
            .iter()
            .filter_map(|record| {
                record
                    .rating
                    .map(|rating| ScoredFeedback::new(product_id, record.feedback_text.clone(), rating))
            })
            .collect();

        let summary = summarize(product_id, &analyzed);
        self.store.upsert_summary(&summary).await?;

        tracing::debug!(
            product_id,
            total = summary.total_feedbacks,
            average_polarity = summary.average_polarity,
            "Sentiment summary upserted"
        );

        Ok(SentimentAnalysis { analyzed, summary })
    }
}
