//! Roster handlers (server-assigned employee ids).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    api::handlers::parse_body,
    models::{NewRosterEntry, RosterUpdate},
    state::AppState,
    Error, Result,
};

pub async fn create_entry(State(state): State<AppState>, body: String) -> Result<Response> {
    let payload: NewRosterEntry = parse_body(&body)?;

    let created = state.roster.insert(&payload).await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub async fn list_entries(State(state): State<AppState>) -> Result<Response> {
    let entries = state.roster.list_all().await?;

    Ok((StatusCode::OK, Json(entries)).into_response())
}

pub async fn get_entry(State(state): State<AppState>, Path(emp_id): Path<i64>) -> Result<Response> {
    let entry = state
        .roster
        .get(emp_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("employee {emp_id} not found")))?;

    Ok((StatusCode::OK, Json(entry)).into_response())
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(emp_id): Path<i64>,
    body: String,
) -> Result<Response> {
    let changes: RosterUpdate = parse_body(&body)?;

    let matched = state.roster.update(emp_id, &changes).await?;
    if matched == 0 {
        return Err(Error::NotFound(format!("employee {emp_id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Employee updated successfully" })),
    )
        .into_response())
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(emp_id): Path<i64>,
) -> Result<Response> {
    let deleted = state.roster.delete(emp_id).await?;
    if deleted == 0 {
        return Err(Error::NotFound(format!("employee {emp_id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Employee deleted successfully" })),
    )
        .into_response())
}
