//! In-memory store implementing every repository trait.
//!
//! Ids are assigned from a per-table counter starting at 1 and are never
//! reused, matching `BIGSERIAL` behaviour. Rows are kept in a `BTreeMap`
//! so `list` returns ascending id order like the PostgreSQL repos.

use std::collections::BTreeMap;

use async_trait::async_trait;
use roster_core::types::DbId;
use tokio::sync::RwLock;

use super::{EmployeeRepository, ExpenseRepository, ThresholdRepository};
use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::models::expense::{CreateExpense, Expense, UpdateExpense};
use crate::models::threshold::{CreateThreshold, Threshold};

struct Table<T> {
    next_id: DbId,
    rows: BTreeMap<DbId, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn modify(&mut self, id: DbId, change: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        change(row);
        Some(row.clone())
    }

    fn remove(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }
}

/// Process-local record store. Cheap to share behind an `Arc`.
pub struct InMemoryStore {
    employees: RwLock<Table<Employee>>,
    expenses: RwLock<Table<Expense>>,
    thresholds: RwLock<Table<Threshold>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(Table::new()),
            expenses: RwLock::new(Table::new()),
            thresholds: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn create(&self, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let mut table = self.employees.write().await;
        Ok(table.insert_with(|id| Employee::from_input(id, input)))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self.employees.read().await.get(id))
    }

    async fn list(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Ok(self.employees.read().await.all())
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut table = self.employees.write().await;
        Ok(table.modify(id, |employee| employee.apply(input)))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.employees.write().await.remove(id))
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryStore {
    async fn create(&self, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let mut table = self.expenses.write().await;
        Ok(table.insert_with(|id| Expense::from_input(id, input)))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        Ok(self.expenses.read().await.get(id))
    }

    async fn list(&self) -> Result<Vec<Expense>, sqlx::Error> {
        Ok(self.expenses.read().await.all())
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let mut table = self.expenses.write().await;
        Ok(table.modify(id, |expense| expense.apply(input)))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.expenses.write().await.remove(id))
    }
}

#[async_trait]
impl ThresholdRepository for InMemoryStore {
    async fn create(&self, input: &CreateThreshold) -> Result<Threshold, sqlx::Error> {
        let mut table = self.thresholds.write().await;
        Ok(table.insert_with(|id| Threshold {
            id,
            supervisor_slack_id: input.supervisor_slack_id.clone(),
            employee_name: input.employee_name.clone(),
            limit_amount: input.limit_amount,
            current_usage: input.current_usage.unwrap_or(0.0),
        }))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Threshold>, sqlx::Error> {
        Ok(self.thresholds.read().await.get(id))
    }

    async fn list(&self) -> Result<Vec<Threshold>, sqlx::Error> {
        Ok(self.thresholds.read().await.all())
    }

    async fn update_usage(
        &self,
        id: DbId,
        current_usage: f64,
    ) -> Result<Option<Threshold>, sqlx::Error> {
        let mut table = self.thresholds.write().await;
        Ok(table.modify(id, |threshold| threshold.current_usage = current_usage))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.thresholds.write().await.remove(id))
    }
}
