//! Handlers for the `/expenses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::expense::{CreateExpense, Expense, UpdateExpense};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/expenses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let expense = state.expenses.create(&input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /api/v1/expenses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    Ok(Json(state.expenses.list().await?))
}

/// GET /api/v1/expenses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Expense>> {
    let expense = state
        .expenses
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Expense", id))?;
    Ok(Json(expense))
}

/// PUT /api/v1/expenses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpense>,
) -> AppResult<Json<Expense>> {
    let expense = state
        .expenses
        .update(id, &input)
        .await?
        .ok_or(AppError::not_found("Expense", id))?;
    Ok(Json(expense))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.expenses.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Expense", id))
    }
}
