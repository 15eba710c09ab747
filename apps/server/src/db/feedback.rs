//! Feedback repository.

use sqlx::PgPool;

use crate::{
    models::{Feedback, FeedbackUpdate, NewFeedback},
    Error, Result,
};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, feedback: &NewFeedback) -> Result<Feedback> {
        let created = sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (product_id, user_name, feedback_text, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING id, product_id, user_name, feedback_text, rating, created_at",
        )
        .bind(feedback.product_id)
        .bind(&feedback.user_name)
        .bind(&feedback.feedback_text)
        .bind(feedback.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<Feedback>> {
        let feedback = sqlx::query_as::<_, Feedback>(
            "SELECT id, product_id, user_name, feedback_text, rating, created_at
             FROM feedback
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(feedback)
    }

    /// All feedback for one product, in insertion order.
    pub async fn list_for_product(&self, product_id: i64) -> Result<Vec<Feedback>> {
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

    /// Apply a partial update to one feedback row. Returns the number of
    /// rows matched.
    pub async fn update(&self, id: i64, changes: &FeedbackUpdate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE feedback
             SET user_name = COALESCE($2, user_name),
                 feedback_text = COALESCE($3, feedback_text),
                 rating = COALESCE($4, rating)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.user_name)
        .bind(&changes.feedback_text)
        .bind(changes.rating)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }
}
