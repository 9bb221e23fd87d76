//! Employee entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

/// DTO for replacing an employee's fields. Every field is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    /// Build a stored record from a create DTO and an assigned id.
    pub fn from_input(id: DbId, input: &CreateEmployee) -> Self {
        Self {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            department: input.department.clone(),
            salary: input.salary,
        }
    }

    /// Overwrite every mutable field from an update DTO.
    pub fn apply(&mut self, input: &UpdateEmployee) {
        self.name.clone_from(&input.name);
        self.email.clone_from(&input.email);
        self.department.clone_from(&input.department);
        self.salary = input.salary;
    }
}
