//! Sentiment analysis handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{state::AppState, Result};

/// Score all feedback for a product, persist the summary and return both.
pub async fn analyze_sentiments(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Response> {
    let analysis = state.sentiment.analyze(product_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Sentiment analysis completed",
            "analyzed_feedbacks": analysis.analyzed,
            "stats": analysis.summary,
        })),
    )
        .into_response())
}
