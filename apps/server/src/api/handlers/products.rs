//! Product registry handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    api::handlers::parse_body,
    models::{NewProduct, ProductUpdate},
    state::AppState,
    Error, Result,
};

pub async fn insert_product(State(state): State<AppState>, body: String) -> Result<Response> {
    let payload: NewProduct = parse_body(&body)?;

    if state.products.exists(payload.product_id).await? {
        return Err(Error::InvalidRequest(format!(
            "product {} already exists",
            payload.product_id
        )));
    }

    state.products.insert(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Product inserted successfully",
            "id": payload.product_id,
        })),
    )
        .into_response())
}

pub async fn list_products(State(state): State<AppState>) -> Result<Response> {
    let products = state.products.list_all().await?;

    Ok((StatusCode::OK, Json(json!({ "products": products }))).into_response())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Response> {
    let product = state
        .products
        .get(product_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("product {product_id} not found")))?;

    Ok((StatusCode::OK, Json(product)).into_response())
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    body: String,
) -> Result<Response> {
    let changes: ProductUpdate = parse_body(&body)?;

    let matched = state.products.update(product_id, &changes).await?;
    if matched == 0 {
        return Err(Error::NotFound(format!("product {product_id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product updated successfully" })),
    )
        .into_response())
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Response> {
    let deleted = state.products.delete(product_id).await?;
    if deleted == 0 {
        return Err(Error::NotFound(format!("product {product_id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product deleted successfully" })),
    )
        .into_response())
}
