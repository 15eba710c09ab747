//! HTTP surface: one router per service.

pub mod handlers;

use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, state::AppState};

/// Router for the product/feedback registry and sentiment analysis.
pub fn create_feedback_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(|| async { "Pulse Feedback Service" }))
        .route("/health", get(health))
        .route(
            "/products",
            post(handlers::products::insert_product).get(handlers::products::list_products),
        )
        .route(
            "/products/:product_id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/products/:product_id/feedback",
            get(handlers::feedback::list_feedback_for_product),
        )
        .route(
            "/products/:product_id/sentiment",
            get(handlers::sentiment::analyze_sentiments),
        )
        .route(
            "/feedback",
            post(handlers::feedback::insert_feedback).get(handlers::feedback::list_feedback),
        )
        .route(
            "/feedback/:id",
            put(handlers::feedback::update_feedback)
                .patch(handlers::feedback::update_feedback)
                .delete(handlers::feedback::delete_feedback),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the employee registry.
pub fn create_employee_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(|| async { "Pulse Employee Registry" }))
        .route("/health", get(health))
        .route(
            "/employees",
            post(handlers::employees::insert_employee).get(handlers::employees::list_employees),
        )
        .route(
            "/employees/:emp_id",
            get(handlers::employees::get_employee)
                .put(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the roster service.
pub fn create_roster_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(|| async { "Pulse Roster Service" }))
        .route("/health", get(health))
        .route(
            "/tasks",
            post(handlers::roster::create_entry).get(handlers::roster::list_entries),
        )
        .route(
            "/tasks/:emp_id",
            get(handlers::roster::get_entry)
                .put(handlers::roster::update_entry)
                .patch(handlers::roster::update_entry)
                .delete(handlers::roster::delete_entry),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.server.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
