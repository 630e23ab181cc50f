//! PostgreSQL-backed repository.
//!
//! Monetary NUMERIC columns are read as ten-thousandths of a unit so they
//! land in [`Money`] without going through floating point. The BIGINT cast
//! raises a database error for amounts out of range.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::DashboardRepository;
use crate::errors::AppError;
use crate::models::{
    Department, Employee, Money, OfficeFilter, Project, ProjectEmployee, ProjectStatus,
};

#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Intermediate row for projects, budget in ten-thousandths.
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    status: ProjectStatus,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    budget_minor: Option<i64>,
    office_id: Uuid,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
            budget: row.budget_minor.map(Money::from_minor),
            office_id: row.office_id,
        }
    }
}

/// Intermediate row for employees, salary in ten-thousandths.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    department_id: Option<Uuid>,
    salary_minor: Option<i64>,
    office_id: Uuid,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            department_id: row.department_id,
            salary: row.salary_minor.map(Money::from_minor),
            office_id: row.office_id,
        }
    }
}

/// Intermediate row for the staffing join with the employee columns flattened.
#[derive(Debug, sqlx::FromRow)]
struct ProjectEmployeeRow {
    project_id: Uuid,
    employee_id: Uuid,
    allocation: Option<i32>,
    first_name: String,
    last_name: String,
    department_id: Option<Uuid>,
    salary_minor: Option<i64>,
    office_id: Uuid,
}

impl From<ProjectEmployeeRow> for ProjectEmployee {
    fn from(row: ProjectEmployeeRow) -> Self {
        Self {
            project_id: row.project_id,
            employee_id: row.employee_id,
            allocation: row.allocation,
            employee: Employee {
                id: row.employee_id,
                first_name: row.first_name,
                last_name: row.last_name,
                department_id: row.department_id,
                salary: row.salary_minor.map(Money::from_minor),
                office_id: row.office_id,
            },
        }
    }
}

// `$1::uuid[] IS NULL` turns the office predicate off when no filter is bound.

#[async_trait]
impl DashboardRepository for PgRepository {
    async fn find_projects(&self, filter: &OfficeFilter) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, status, start_date, end_date,
                   ROUND(budget * 10000)::BIGINT AS budget_minor,
                   office_id
            FROM projects
            WHERE ($1::uuid[] IS NULL OR office_id = ANY($1))
            ORDER BY start_date DESC, id
            "#,
        )
        .bind(filter.ids())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_employees(&self, filter: &OfficeFilter) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, department_id,
                   ROUND(salary * 10000)::BIGINT AS salary_minor,
                   office_id
            FROM employees
            WHERE ($1::uuid[] IS NULL OR office_id = ANY($1))
            ORDER BY last_name, first_name, id
            "#,
        )
        .bind(filter.ids())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_departments(&self, filter: &OfficeFilter) -> Result<Vec<Department>, AppError> {
        let rows = sqlx::query_as::<_, Department>(
            r#"
            SELECT id, name, office_id
            FROM departments
            WHERE ($1::uuid[] IS NULL OR office_id = ANY($1))
            ORDER BY name, id
            "#,
        )
        .bind(filter.ids())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_project_employees(
        &self,
        filter: &OfficeFilter,
    ) -> Result<Vec<ProjectEmployee>, AppError> {
        let rows = sqlx::query_as::<_, ProjectEmployeeRow>(
            r#"
            SELECT pe.project_id, pe.employee_id, pe.allocation,
                   e.first_name, e.last_name, e.department_id,
                   ROUND(e.salary * 10000)::BIGINT AS salary_minor,
                   e.office_id
            FROM project_employees pe
            INNER JOIN projects p ON p.id = pe.project_id
            INNER JOIN employees e ON e.id = pe.employee_id
            WHERE ($1::uuid[] IS NULL OR p.office_id = ANY($1))
            ORDER BY pe.project_id, pe.employee_id
            "#,
        )
        .bind(filter.ids())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ProjectEmployee::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
