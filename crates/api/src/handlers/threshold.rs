//! Handlers for the `/api/thresholds` resource.
//!
//! Responses carry the computed `exceeded` flag alongside the stored fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::threshold::{CreateThreshold, ThresholdResponse, UpdateThresholdUsage};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/thresholds
///
/// Always inserts a new threshold. Answers 201 Created with the stored
/// record, including its id and `exceeded` flag, rather than a bare
/// confirmation string.
pub async fn set_threshold(
    State(state): State<AppState>,
    Json(input): Json<CreateThreshold>,
) -> AppResult<(StatusCode, Json<ThresholdResponse>)> {
    let threshold = state.thresholds.create(&input).await?;
    tracing::info!(
        threshold_id = threshold.id,
        employee = %threshold.employee_name,
        "Threshold set"
    );
    Ok((StatusCode::CREATED, Json(threshold.into())))
}

/// GET /api/thresholds
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ThresholdResponse>>> {
    let thresholds = state.thresholds.list().await?;
    Ok(Json(thresholds.into_iter().map(Into::into).collect()))
}

/// GET /api/thresholds/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ThresholdResponse>> {
    let threshold = state
        .thresholds
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Threshold", id))?;
    Ok(Json(threshold.into()))
}

/// PUT /api/thresholds/{id}/usage
pub async fn report_usage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateThresholdUsage>,
) -> AppResult<Json<ThresholdResponse>> {
    let threshold = state
        .thresholds
        .update_usage(id, input.current_usage)
        .await?
        .ok_or(AppError::not_found("Threshold", id))?;
    Ok(Json(threshold.into()))
}

/// DELETE /api/thresholds/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.thresholds.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Threshold", id))
    }
}
