use std::fmt;

use crate::pricing::PriceTierKind;

#[derive(Debug, Clone, PartialEq)]
/// Errors raised when a domain value would break one of its invariants.
pub enum ValidationError {
    /// Opening hours or session durations cannot produce a session count.
    InvalidSchedule(String),
    /// A standard/discounted pair does not add up to 100%.
    InvalidDistribution { standard: u8, discounted: u8 },
    /// A percentage fell outside `[0, 100]`.
    InvalidPercentage(i64),
    /// Expense amounts must be zero or positive.
    NegativeAmount(f64),
    /// Ticket prices must be finite and zero or positive.
    InvalidPrice { tier: PriceTierKind, price: f64 },
    /// Month numbers are `1..=12`, month indexes `0..=11`.
    InvalidMonth(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidSchedule(reason) => write!(f, "invalid schedule: {reason}"),
            ValidationError::InvalidDistribution {
                standard,
                discounted,
            } => write!(
                f,
                "distribution must total 100% (standard {standard}% + discounted {discounted}%)"
            ),
            ValidationError::InvalidPercentage(value) => {
                write!(f, "percentage {value} is outside 0-100")
            }
            ValidationError::NegativeAmount(amount) => {
                write!(f, "amount {amount} must not be negative")
            }
            ValidationError::InvalidPrice { tier, price } => {
                write!(f, "{tier} price {price} must be a non-negative number")
            }
            ValidationError::InvalidMonth(value) => write!(f, "month {value} is out of range"),
        }
    }
}

impl std::error::Error for ValidationError {}
