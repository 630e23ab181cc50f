//! Domain records read by the dashboard and the value types they share.

pub mod department;
pub mod employee;
pub mod money;
pub mod office;
pub mod project;
pub mod project_employee;

pub use department::Department;
pub use employee::Employee;
pub use money::{Money, MoneyError};
pub use office::{Office, OfficeFilter, OfficeQuery};
pub use project::{Project, ProjectStatus};
pub use project_employee::ProjectEmployee;
