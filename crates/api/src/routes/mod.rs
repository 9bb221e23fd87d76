pub mod employee;
pub mod expense;
pub mod health;
pub mod threshold;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /employees              list, create
/// /employees/{id}         get, update, delete
///
/// /expenses               list, create
/// /expenses/{id}          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee::router())
        .nest("/expenses", expense::router())
}
