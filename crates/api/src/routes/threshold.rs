//! Route definitions for the `/api/thresholds` resource.
//!
//! Mounted outside `/api/v1`; the threshold API has always lived at
//! `/api/thresholds`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::threshold;
use crate::state::AppState;

/// Routes mounted at `/api/thresholds`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> set_threshold
/// GET    /{id}          -> get_by_id
/// DELETE /{id}          -> delete
/// PUT    /{id}/usage    -> report_usage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(threshold::list).post(threshold::set_threshold))
        .route(
            "/{id}",
            get(threshold::get_by_id).delete(threshold::delete),
        )
        .route("/{id}/usage", put(threshold::report_usage))
}
