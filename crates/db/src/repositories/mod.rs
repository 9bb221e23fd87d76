//! Repository traits and their backends.
//!
//! Every table has a trait with explicit CRUD methods. Two backends
//! implement them: the PostgreSQL repos (`Pg*Repo`) used in production, and
//! [`InMemoryStore`], which backs tests and database-less local runs.
//!
//! Lookups return `Ok(None)` (or `Ok(false)` for deletes) when no row
//! matches; turning that into a not-found error is the caller's job.

use async_trait::async_trait;
use roster_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::models::expense::{CreateExpense, Expense, UpdateExpense};
use crate::models::threshold::{CreateThreshold, Threshold};

pub mod employee_repo;
pub mod expense_repo;
pub mod memory;
pub mod threshold_repo;

pub use employee_repo::PgEmployeeRepo;
pub use expense_repo::PgExpenseRepo;
pub use memory::InMemoryStore;
pub use threshold_repo::PgThresholdRepo;

/// CRUD operations on employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee, returning the stored row with its id.
    async fn create(&self, input: &CreateEmployee) -> Result<Employee, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, sqlx::Error>;

    /// All employees in ascending id order.
    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error>;

    /// Overwrite all fields. Returns `None` if no row with `id` exists.
    async fn update(
        &self,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// CRUD operations on expenses.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create(&self, input: &CreateExpense) -> Result<Expense, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Expense>, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Expense>, sqlx::Error>;

    async fn update(&self, id: DbId, input: &UpdateExpense)
        -> Result<Option<Expense>, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Operations on thresholds. `list` is the monitor's per-cycle scan.
#[async_trait]
pub trait ThresholdRepository: Send + Sync {
    async fn create(&self, input: &CreateThreshold) -> Result<Threshold, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Threshold>, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Threshold>, sqlx::Error>;

    /// Record the latest usage figure. Returns `None` if no row with `id` exists.
    async fn update_usage(
        &self,
        id: DbId,
        current_usage: f64,
    ) -> Result<Option<Threshold>, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}
