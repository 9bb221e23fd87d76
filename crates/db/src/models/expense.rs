//! Expense entity model and DTOs.

use roster_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An expense row from the `expenses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Expense {
    pub id: DbId,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: Date,
}

/// DTO for recording a new expense.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: Date,
}

/// DTO for replacing an expense's fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: Date,
}

impl Expense {
    pub fn from_input(id: DbId, input: &CreateExpense) -> Self {
        Self {
            id,
            description: input.description.clone(),
            amount: input.amount,
            category: input.category.clone(),
            date: input.date,
        }
    }

    pub fn apply(&mut self, input: &UpdateExpense) {
        self.description.clone_from(&input.description);
        self.amount = input.amount;
        self.category.clone_from(&input.category);
        self.date = input.date;
    }
}
