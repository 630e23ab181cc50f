//! In-process repository over a fixed [`Dataset`].
//!
//! Serves the dashboard without a database while the frontend is being
//! developed, and backs the aggregation tests. A fetch can be configured to
//! fail so callers can exercise the error path.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DashboardRepository;
use crate::errors::AppError;
use crate::models::{Department, Employee, Office, OfficeFilter, Project, ProjectEmployee};

/// Demo data bundled with the binary.
const DEMO_DATASET: &str = include_str!("../../fixtures/demo.json");

/// Staffing row as stored, without the embedded employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub project_id: Uuid,
    pub employee_id: Uuid,
    #[serde(default)]
    pub allocation: Option<i32>,
}

/// Every record the in-memory repository can serve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Internal(format!("Invalid dataset JSON: {e}")))
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!("Failed to read dataset {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// The bundled demo dataset.
    pub fn demo() -> Result<Self, AppError> {
        Self::from_json(DEMO_DATASET)
    }
}

/// A fetch that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Projects,
    Employees,
    Departments,
    ProjectEmployees,
    Ping,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    data: Arc<Dataset>,
    failure: Option<(Fetch, String)>,
}

impl InMemoryRepository {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: Arc::new(data),
            failure: None,
        }
    }

    /// Make `fetch` fail with `message` on every call.
    pub fn failing(mut self, fetch: Fetch, message: impl Into<String>) -> Self {
        self.failure = Some((fetch, message.into()));
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    fn check(&self, fetch: Fetch) -> Result<(), AppError> {
        match &self.failure {
            Some((failing, message)) if *failing == fetch => {
                Err(AppError::Unavailable(message.clone()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DashboardRepository for InMemoryRepository {
    async fn find_projects(&self, filter: &OfficeFilter) -> Result<Vec<Project>, AppError> {
        self.check(Fetch::Projects)?;
        Ok(self
            .data
            .projects
            .iter()
            .filter(|p| filter.matches(p.office_id))
            .cloned()
            .collect())
    }

    async fn find_employees(&self, filter: &OfficeFilter) -> Result<Vec<Employee>, AppError> {
        self.check(Fetch::Employees)?;
        Ok(self
            .data
            .employees
            .iter()
            .filter(|e| filter.matches(e.office_id))
            .cloned()
            .collect())
    }

    async fn find_departments(&self, filter: &OfficeFilter) -> Result<Vec<Department>, AppError> {
        self.check(Fetch::Departments)?;
        Ok(self
            .data
            .departments
            .iter()
            .filter(|d| filter.matches(d.office_id))
            .cloned()
            .collect())
    }

    async fn find_project_employees(
        &self,
        filter: &OfficeFilter,
    ) -> Result<Vec<ProjectEmployee>, AppError> {
        self.check(Fetch::ProjectEmployees)?;
        let project_offices: HashMap<Uuid, Uuid> = self
            .data
            .projects
            .iter()
            .map(|p| (p.id, p.office_id))
            .collect();
        let employees: HashMap<Uuid, &Employee> =
            self.data.employees.iter().map(|e| (e.id, e)).collect();

        // Rows pointing at unknown projects or employees are dropped, as an
        // inner join would.
        Ok(self
            .data
            .assignments
            .iter()
            .filter(|a| {
                project_offices
                    .get(&a.project_id)
                    .is_some_and(|office| filter.matches(*office))
            })
            .filter_map(|a| {
                employees.get(&a.employee_id).map(|employee| ProjectEmployee {
                    project_id: a.project_id,
                    employee_id: a.employee_id,
                    allocation: a.allocation,
                    employee: (*employee).clone(),
                })
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check(Fetch::Ping)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
