use chrono::{DateTime, Datelike, Month, Utc};

use rink_domain::MONTHS;

/// Clock abstracts access to the current timestamp so callers can pin the as-of month.
///
/// The projection services never call it; the month is always passed in explicitly.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar month. Defaults to the month of `now()`.
    fn current_month(&self) -> Month {
        let index = self.now().month0() as usize;
        MONTHS[index % MONTHS.len()]
    }
}
