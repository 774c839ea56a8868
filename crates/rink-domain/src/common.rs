//! Shared traits, percentages, and month helpers used across the projection model.

use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Exposes a stable identifier for editable entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// A whole percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Builds a percentage, rejecting anything above 100.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::InvalidPercentage(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Builds a percentage from raw input, pinning it into `[0, 100]`.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns `100 - self`.
    pub fn complement(self) -> Self {
        Self(100 - self.0)
    }

    /// Applies the percentage to `amount` without rounding.
    pub fn of(self, amount: f64) -> f64 {
        amount * f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Distinguishes weekday from weekend trading.
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        };
        f.write_str(label)
    }
}

/// Calendar months in index order (January = 0).
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Resolves a zero-based month index (January = 0).
pub fn month_from_index(index: u32) -> Result<Month, ValidationError> {
    MONTHS
        .get(index as usize)
        .copied()
        .ok_or(ValidationError::InvalidMonth(index))
}

/// Resolves a one-based month number (January = 1).
pub fn month_from_number(number: u32) -> Result<Month, ValidationError> {
    number
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize).copied())
        .ok_or(ValidationError::InvalidMonth(number))
}

/// Zero-based index of `month`.
pub fn month_index(month: Month) -> usize {
    month.number_from_month() as usize - 1
}
