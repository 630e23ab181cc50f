//! Offices and office scoping for queries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: Uuid,
    pub name: String,
}

/// Which offices a query covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OfficeFilter {
    /// Every office.
    #[default]
    All,
    /// Only rows belonging to one of these offices.
    Offices(Vec<Uuid>),
}

impl OfficeFilter {
    /// Build a filter from raw `officeIds` values.
    ///
    /// Blank values are ignored, so `?officeIds=` behaves like an absent
    /// parameter. No remaining values means all offices.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, AppError> {
        let mut ids = Vec::with_capacity(raw.len());
        for value in raw {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            let id = Uuid::parse_str(value)
                .map_err(|_| AppError::Validation(format!("Invalid office id '{value}'")))?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Ok(Self::All);
        }
        Ok(Self::Offices(ids))
    }

    pub fn matches(&self, office_id: Uuid) -> bool {
        match self {
            Self::All => true,
            Self::Offices(ids) => ids.contains(&office_id),
        }
    }

    /// Office ids to bind into an `= ANY($n)` predicate, `None` when unfiltered.
    pub fn ids(&self) -> Option<&[Uuid]> {
        match self {
            Self::All => None,
            Self::Offices(ids) => Some(ids),
        }
    }
}

/// Query string for office-scoped endpoints: `?officeIds=a&officeIds=b`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeQuery {
    #[serde(default)]
    pub office_ids: Vec<String>,
}

impl OfficeQuery {
    pub fn to_filter(&self) -> Result<OfficeFilter, AppError> {
        OfficeFilter::parse(&self.office_ids)
    }
}
