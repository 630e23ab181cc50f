//! Read access to the records the dashboard aggregates.
//!
//! Handlers never talk to a database client directly. They receive an
//! `Arc<dyn DashboardRepository>` through [`crate::AppState`], which is either a
//! [`PgRepository`] in production or an [`InMemoryRepository`] for local
//! frontend work and tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Department, Employee, OfficeFilter, Project, ProjectEmployee};

pub use memory::{Assignment, Dataset, Fetch, InMemoryRepository};
pub use postgres::PgRepository;

/// Office-scoped record fetches backing the dashboard.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Projects belonging to the filtered offices.
    async fn find_projects(&self, filter: &OfficeFilter) -> Result<Vec<Project>, AppError>;

    /// Employees belonging to the filtered offices.
    async fn find_employees(&self, filter: &OfficeFilter) -> Result<Vec<Employee>, AppError>;

    /// Departments belonging to the filtered offices.
    async fn find_departments(&self, filter: &OfficeFilter) -> Result<Vec<Department>, AppError>;

    /// Project staffing rows whose project belongs to the filtered offices,
    /// each with its employee embedded.
    async fn find_project_employees(
        &self,
        filter: &OfficeFilter,
    ) -> Result<Vec<ProjectEmployee>, AppError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
