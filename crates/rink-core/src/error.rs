use rink_domain::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),
    #[error("Invalid distribution: standard {standard}% + discounted {discounted}% must equal 100%")]
    InvalidDistribution { standard: u8, discounted: u8 },
    #[error("Invalid percentage: {0} is outside 0-100")]
    InvalidPercentage(i64),
    #[error("Invalid calendar: {0}")]
    InvalidCalendar(String),
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
    #[error("Expense category not found: {0}")]
    CategoryNotFound(Uuid),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidSchedule(reason) => CoreError::InvalidSchedule(reason),
            ValidationError::InvalidDistribution {
                standard,
                discounted,
            } => CoreError::InvalidDistribution {
                standard,
                discounted,
            },
            ValidationError::InvalidPercentage(value) => CoreError::InvalidPercentage(value),
            other @ (ValidationError::NegativeAmount(_)
            | ValidationError::InvalidPrice { .. }
            | ValidationError::InvalidMonth(_)) => CoreError::Validation(other.to_string()),
        }
    }
}
