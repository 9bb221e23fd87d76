//! PostgreSQL repository for the `expenses` table.

use async_trait::async_trait;
use roster_core::types::DbId;
use sqlx::PgPool;

use super::ExpenseRepository;
use crate::models::expense::{CreateExpense, Expense, UpdateExpense};

const COLUMNS: &str = "id, description, amount, category, date";

#[derive(Clone)]
pub struct PgExpenseRepo {
    pool: PgPool,
}

impl PgExpenseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepo {
    async fn create(&self, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (description, amount, category, date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = $1");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY id");
        sqlx::query_as::<_, Expense>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                description = $2,
                amount = $3,
                category = $4,
                date = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
