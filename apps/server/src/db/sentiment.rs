//! Postgres-backed `SentimentStore` implementation.

use async_trait::async_trait;
use pulse_sentiment::FeedbackSummary;
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::{db::traits::SentimentStore, models::Feedback, Error, Result};

#[derive(Clone)]
pub struct PostgresSentimentStore {
    pool: PgPool,
}

impl PostgresSentimentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn extreme_json(extreme: &Option<pulse_sentiment::ExtremeFeedback>) -> Result<Option<JsonValue>> {
        extreme
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| Error::Internal(format!("failed to encode extreme feedback: {e}")))
    }
}

#[async_trait]
impl SentimentStore for PostgresSentimentStore {
    async fn product_exists(&self, product_id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM products WHERE product_id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.is_some())
    }

    async fn feedback_for_product(&self, product_id: i64) -> Result<Vec<Feedback>> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, product_id, user_name, feedback_text, rating, created_at
             FROM feedback
             WHERE product_id = $1
             ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(feedback)
    }

    async fn upsert_summary(&self, summary: &FeedbackSummary) -> Result<()> {
        // Full replacement of every column; NULL extrema overwrite any
        // previously stored value rather than merging with it.
        sqlx::query(
            "INSERT INTO sentiment_scores
                 (product_id, total_feedbacks, average_polarity, average_sentiment,
                  most_positive_feedback, most_negative_feedback)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (product_id) DO UPDATE SET
                 total_feedbacks = EXCLUDED.total_feedbacks,
                 average_polarity = EXCLUDED.average_polarity,
                 average_sentiment = EXCLUDED.average_sentiment,
                 most_positive_feedback = EXCLUDED.most_positive_feedback,
                 most_negative_feedback = EXCLUDED.most_negative_feedback",
        )
        .bind(summary.product_id)
        .bind(summary.total_feedbacks)
        .bind(summary.average_polarity)
        .bind(summary.average_sentiment.to_string())
        .bind(Self::extreme_json(&summary.most_positive_feedback)?)
        .bind(Self::extreme_json(&summary.most_negative_feedback)?)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(())
    }
}
