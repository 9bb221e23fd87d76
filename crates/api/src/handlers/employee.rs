//! Handlers for the `/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state.employees.create(&input).await?;
    tracing::info!(employee_id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Employee", id))?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("Employee", id))?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.employees.delete(id).await? {
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Employee", id))
    }
}
