//! Employee records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department_id: Option<Uuid>,
    /// Annual gross salary.
    #[serde(default)]
    pub salary: Option<Money>,
    pub office_id: Uuid,
}

