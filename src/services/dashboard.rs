//! Dashboard statistics aggregation.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Department, Employee, Money, OfficeFilter, Project, ProjectEmployee, ProjectStatus,
};
use crate::repository::DashboardRepository;
use crate::services::clock::start_of_month;

/// Bucket for employees without a (visible) department.
pub const NO_DEPARTMENT_LABEL: &str = "No department";

/// Aggregated statistics for the dashboard overview.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: i64,
    pub active_projects: i64,
    pub total_employees: i64,
    pub total_departments: i64,
    pub completed_projects_this_month: i64,
    pub projects_by_status: ProjectsByStatus,
    pub employees_by_department: BTreeMap<String, i64>,
    pub annual_budget: Money,
    pub annual_expenses: Money,
    pub annual_profit: Money,
}

/// Project counts for every status, zero when a status has no projects.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProjectsByStatus {
    #[serde(rename = "PLANNING")]
    pub planning: i64,
    #[serde(rename = "ACTIVE")]
    pub active: i64,
    #[serde(rename = "ON_HOLD")]
    pub on_hold: i64,
    #[serde(rename = "COMPLETED")]
    pub completed: i64,
    #[serde(rename = "CANCELLED")]
    pub cancelled: i64,
}

impl ProjectsByStatus {
    pub fn get(&self, status: ProjectStatus) -> i64 {
        match status {
            ProjectStatus::Planning => self.planning,
            ProjectStatus::Active => self.active,
            ProjectStatus::OnHold => self.on_hold,
            ProjectStatus::Completed => self.completed,
            ProjectStatus::Cancelled => self.cancelled,
        }
    }

    fn increment(&mut self, status: ProjectStatus) {
        let slot = match status {
            ProjectStatus::Planning => &mut self.planning,
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::OnHold => &mut self.on_hold,
            ProjectStatus::Completed => &mut self.completed,
            ProjectStatus::Cancelled => &mut self.cancelled,
        };
        *slot += 1;
    }

    pub fn total(&self) -> i64 {
        ProjectStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// Records read for one aggregation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub project_employees: Vec<ProjectEmployee>,
}

/// Fetch a snapshot for `filter` and summarize it relative to `today`.
///
/// The four fetches run concurrently; the first failure aborts the whole
/// aggregation.
pub async fn get_stats(
    repo: &dyn DashboardRepository,
    filter: &OfficeFilter,
    today: NaiveDate,
) -> Result<DashboardStats, AppError> {
    let (projects, employees, departments, project_employees) = tokio::try_join!(
        repo.find_projects(filter),
        repo.find_employees(filter),
        repo.find_departments(filter),
        repo.find_project_employees(filter),
    )?;

    tracing::debug!(
        backend = repo.backend_name(),
        ?filter,
        projects = projects.len(),
        employees = employees.len(),
        departments = departments.len(),
        project_employees = project_employees.len(),
        "Fetched dashboard snapshot"
    );

    let snapshot = Snapshot {
        projects,
        employees,
        departments,
        project_employees,
    };
    summarize(&snapshot, today)
}

/// Reduce a snapshot into dashboard statistics.
///
/// Fails only when a monetary total leaves the representable range.
pub fn summarize(snapshot: &Snapshot, today: NaiveDate) -> Result<DashboardStats, AppError> {
    let month_start = start_of_month(today);

    let mut projects_by_status = ProjectsByStatus::default();
    let mut completed_projects_this_month = 0;
    let mut annual_budget = Money::zero();
    let mut negative_amounts = 0usize;

    for project in &snapshot.projects {
        projects_by_status.increment(project.status);
        if project.status == ProjectStatus::Completed
            && project.end_date.is_some_and(|end| end >= month_start)
        {
            completed_projects_this_month += 1;
        }
        if let Some(budget) = project.budget {
            if budget.is_negative() {
                negative_amounts += 1;
            }
            annual_budget = annual_budget.checked_add(budget)?;
        }
    }

    let employees_by_department =
        count_by_department(&snapshot.employees, &snapshot.departments);

    let mut annual_expenses = Money::zero();
    let mut invalid_allocations = 0usize;
    for row in &snapshot.project_employees {
        if row.has_invalid_allocation() {
            invalid_allocations += 1;
        }
        if row.employee.salary.is_some_and(|s| s.is_negative()) {
            negative_amounts += 1;
        }
        annual_expenses = annual_expenses.checked_add(row.cost()?)?;
    }

    if invalid_allocations > 0 || negative_amounts > 0 {
        tracing::warn!(
            invalid_allocations,
            negative_amounts,
            "Dashboard snapshot contains out-of-range values; using them as-is"
        );
    }

    Ok(DashboardStats {
        total_projects: snapshot.projects.len() as i64,
        active_projects: projects_by_status.active,
        total_employees: snapshot.employees.len() as i64,
        total_departments: snapshot.departments.len() as i64,
        completed_projects_this_month,
        projects_by_status,
        employees_by_department,
        annual_budget,
        annual_expenses,
        annual_profit: annual_budget.checked_sub(annual_expenses)?,
    })
}

/// Count employees per department name.
///
/// Employees whose department is missing or not part of `departments` land in
/// [`NO_DEPARTMENT_LABEL`]. Departments that share a name share a bucket.
fn count_by_department(
    employees: &[Employee],
    departments: &[Department],
) -> BTreeMap<String, i64> {
    let names: HashMap<Uuid, &str> = departments
        .iter()
        .map(|d| (d.id, d.name.as_str()))
        .collect();

    let mut counts = BTreeMap::new();
    for employee in employees {
        let name = employee
            .department_id
            .and_then(|id| names.get(&id).copied())
            .unwrap_or(NO_DEPARTMENT_LABEL);
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}
