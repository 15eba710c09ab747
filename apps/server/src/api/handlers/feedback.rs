//! Feedback handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    api::handlers::parse_body,
    models::{FeedbackUpdate, NewFeedback},
    state::AppState,
    Error, Result,
};

pub async fn insert_feedback(State(state): State<AppState>, body: String) -> Result<Response> {
    let payload: NewFeedback = parse_body(&body)?;

    // Feedback must reference an existing product.
    if !state.products.exists(payload.product_id).await? {
        return Err(Error::InvalidRequest(format!(
            "product {} does not exist",
            payload.product_id
        )));
    }

    let created = state.feedback.insert(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Feedback inserted successfully",
            "id": created.id,
        })),
    )
        .into_response())
}

pub async fn list_feedback(State(state): State<AppState>) -> Result<Response> {
    let feedback = state.feedback.list_all().await?;

    Ok((StatusCode::OK, Json(json!({ "feedbacks": feedback }))).into_response())
}

pub async fn list_feedback_for_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Response> {
    let feedback = state.feedback.list_for_product(product_id).await?;
    if feedback.is_empty() {
        return Err(Error::NotFound(format!(
            "no feedback found for product {product_id}"
        )));
    }

    Ok((StatusCode::OK, Json(feedback)).into_response())
}

pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: String,
) -> Result<Response> {
    let changes: FeedbackUpdate = parse_body(&body)?;

    let matched = state.feedback.update(id, &changes).await?;
    if matched == 0 {
        return Err(Error::NotFound(format!("feedback {id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Feedback updated successfully" })),
    )
        .into_response())
}

pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let deleted = state.feedback.delete(id).await?;
    if deleted == 0 {
        return Err(Error::NotFound(format!("feedback {id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Feedback deleted successfully" })),
    )
        .into_response())
}
