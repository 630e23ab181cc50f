//! Monetary amounts for budgets, salaries and dashboard totals.
//!
//! Amounts are held as integer ten-thousandths of the currency unit. Stored
//! amounts carry two decimals and allocations are whole percentages, so a
//! salary share is always exact at this scale. All arithmetic is checked.
//! On the wire amounts travel as decimal numbers of currency units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ten-thousandths per currency unit.
pub const MINOR_PER_UNIT: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Monetary amount out of range")]
    Overflow,

    #[error("Monetary amount must be finite")]
    NotFinite,
}

/// A monetary amount stored as ten-thousandths of the currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    #[cfg(test)]
    pub(crate) const fn from_units(units: i64) -> Self {
        Self(units * MINOR_PER_UNIT)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in ten-thousandths of the currency unit.
    pub const fn minor(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Amount as a float of currency units. Only used for serialization.
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / MINOR_PER_UNIT as f64
    }

    /// Convert a float of currency units, rounding to the nearest ten-thousandth.
    pub fn from_units_f64(units: f64) -> Result<Self, MoneyError> {
        if !units.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        let minor = (units * MINOR_PER_UNIT as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if minor < i64::MIN as f64 || minor >= i64::MAX as f64 {
            return Err(MoneyError::Overflow);
        }
        Ok(Self(minor as i64))
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        self.0.checked_add(other.0).map(Self).ok_or(MoneyError::Overflow)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        self.0.checked_sub(other.0).map(Self).ok_or(MoneyError::Overflow)
    }

    /// Apply a whole percentage.
    ///
    /// Exact for amounts with up to two decimals; finer amounts round half
    /// away from zero to the ten-thousandth.
    pub fn percent(&self, pct: i32) -> Result<Self, MoneyError> {
        let scaled = i128::from(self.0) * i128::from(pct);
        let half = if scaled < 0 { -50 } else { 50 };
        let minor = (scaled + half) / 100;
        i64::try_from(minor)
            .map(Self)
            .map_err(|_| MoneyError::Overflow)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Self::from_units_f64(units).map_err(serde::de::Error::custom)
    }
}
