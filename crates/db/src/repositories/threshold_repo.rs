//! PostgreSQL repository for the `thresholds` table.

use async_trait::async_trait;
use roster_core::types::DbId;
use sqlx::PgPool;

use super::ThresholdRepository;
use crate::models::threshold::{CreateThreshold, Threshold};

const COLUMNS: &str = "id, supervisor_slack_id, employee_name, limit_amount, current_usage";

/// Threshold storage backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgThresholdRepo {
    pool: PgPool,
}

impl PgThresholdRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThresholdRepository for PgThresholdRepo {
    /// Insert a new threshold. Usage defaults to 0 when not supplied.
    async fn create(&self, input: &CreateThreshold) -> Result<Threshold, sqlx::Error> {
        let query = format!(
            "INSERT INTO thresholds (supervisor_slack_id, employee_name, limit_amount, current_usage)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Threshold>(&query)
            .bind(&input.supervisor_slack_id)
            .bind(&input.employee_name)
            .bind(input.limit_amount)
            .bind(input.current_usage.unwrap_or(0.0))
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Threshold>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM thresholds WHERE id = $1");
        sqlx::query_as::<_, Threshold>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Threshold>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM thresholds ORDER BY id");
        sqlx::query_as::<_, Threshold>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn update_usage(
        &self,
        id: DbId,
        current_usage: f64,
    ) -> Result<Option<Threshold>, sqlx::Error> {
        let query = format!(
            "UPDATE thresholds SET current_usage = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Threshold>(&query)
            .bind(id)
            .bind(current_usage)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM thresholds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
