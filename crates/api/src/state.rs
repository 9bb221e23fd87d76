use std::sync::Arc;

use roster_db::repositories::{
    EmployeeRepository, ExpenseRepository, InMemoryStore, PgEmployeeRepo, PgExpenseRepo,
    PgThresholdRepo, ThresholdRepository,
};
use roster_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database pool, when running against PostgreSQL. Used by `/health`.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub expenses: Arc<dyn ExpenseRepository>,
    pub thresholds: Arc<dyn ThresholdRepository>,
}

impl AppState {
    /// State backed by the PostgreSQL repositories.
    pub fn with_pool(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            employees: Arc::new(PgEmployeeRepo::new(pool.clone())),
            expenses: Arc::new(PgExpenseRepo::new(pool.clone())),
            thresholds: Arc::new(PgThresholdRepo::new(pool.clone())),
            pool: Some(pool),
            config: Arc::new(config),
        }
    }

    /// State backed by a single in-memory store shared by all repositories.
    pub fn in_memory(store: Arc<InMemoryStore>, config: ServerConfig) -> Self {
        Self {
            pool: None,
            config: Arc::new(config),
            employees: store.clone(),
            expenses: store.clone(),
            thresholds: store,
        }
    }
}
