//! Threshold entity model and DTOs.
//!
//! A threshold pairs an employee with a spending limit and the Slack id of
//! the supervisor to alert. Whether it is exceeded is derived from the
//! reported usage, never stored.

use roster_core::threshold::is_exceeded;
use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A threshold row from the `thresholds` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Threshold {
    pub id: DbId,
    pub supervisor_slack_id: String,
    pub employee_name: String,
    pub limit_amount: f64,
    pub current_usage: f64,
}

impl Threshold {
    /// Whether the reported usage is over the limit.
    pub fn is_exceeded(&self) -> bool {
        is_exceeded(self.current_usage, self.limit_amount)
    }
}

/// DTO for setting a new threshold (`POST /api/thresholds`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateThreshold {
    pub supervisor_slack_id: String,
    pub employee_name: String,
    pub limit_amount: f64,
    /// Defaults to zero when omitted.
    pub current_usage: Option<f64>,
}

/// DTO for reporting an employee's latest usage against their threshold.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateThresholdUsage {
    pub current_usage: f64,
}

/// API representation of a threshold, including the computed flag.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdResponse {
    #[serde(flatten)]
    pub threshold: Threshold,
    pub exceeded: bool,
}

impl From<Threshold> for ThresholdResponse {
    fn from(threshold: Threshold) -> Self {
        let exceeded = threshold.is_exceeded();
        Self {
            threshold,
            exceeded,
        }
    }
}
