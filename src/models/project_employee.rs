//! Project staffing: which employees work on which project, and how much.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::Employee;
use super::money::{Money, MoneyError};

/// Assignment of an employee to a project with the employee record embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEmployee {
    pub project_id: Uuid,
    pub employee_id: Uuid,
    /// Share of the employee's time on this project, 0 to 100. `None` is full-time.
    #[serde(default)]
    pub allocation: Option<i32>,
    pub employee: Employee,
}

impl ProjectEmployee {
    /// Salary cost this assignment puts on the project.
    ///
    /// A missing salary costs nothing; a missing allocation counts as 100%.
    pub fn cost(&self) -> Result<Money, MoneyError> {
        let Some(salary) = self.employee.salary else {
            return Ok(Money::zero());
        };
        match self.allocation {
            Some(pct) => salary.percent(pct),
            None => Ok(salary),
        }
    }

    /// Whether the allocation lies outside the 0..=100 range.
    pub fn has_invalid_allocation(&self) -> bool {
        self.allocation.is_some_and(|pct| !(0..=100).contains(&pct))
    }
}
