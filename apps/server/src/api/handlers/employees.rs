//! Employee registry handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    api::handlers::parse_body,
    models::{EmployeeUpdate, NewEmployee},
    state::AppState,
    Error, Result,
};

pub async fn insert_employee(State(state): State<AppState>, body: String) -> Result<Response> {
    let payload: NewEmployee = parse_body(&body)?;

    if state.employees.exists(payload.emp_id).await? {
        return Err(Error::InvalidRequest(format!(
            "employee {} already exists",
            payload.emp_id
        )));
    }

    state.employees.insert(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Employee inserted successfully",
            "id": payload.emp_id,
        })),
    )
        .into_response())
}

pub async fn list_employees(State(state): State<AppState>) -> Result<Response> {
    let employees = state.employees.list_all().await?;
    if employees.is_empty() {
        return Err(Error::NotFound("no employees found".to_string()));
    }

    Ok((StatusCode::OK, Json(employees)).into_response())
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<i64>,
) -> Result<Response> {
    let employee = state
        .employees
        .get(emp_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("employee {emp_id} not found")))?;

    Ok((StatusCode::OK, Json(employee)).into_response())
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<i64>,
    body: String,
) -> Result<Response> {
    let update: EmployeeUpdate = parse_body(&body)?;

    let matched = state.employees.update(emp_id, &update).await?;
    if matched == 0 {
        return Err(Error::NotFound(format!("employee {emp_id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Employee updated successfully" })),
    )
        .into_response())
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<i64>,
) -> Result<Response> {
    let deleted = state.employees.delete(emp_id).await?;
    if deleted == 0 {
        return Err(Error::NotFound(format!("employee {emp_id} not found")));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Employee deleted successfully" })),
    )
        .into_response())
}
