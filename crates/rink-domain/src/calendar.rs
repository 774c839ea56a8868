//! Country working-day calendars used to apportion trading days.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Average calendar days in a month.
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;

/// Annual holiday and working-day counts for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCalendar {
    pub code: String,
    pub name: String,
    /// Public holidays per year; some countries observe half days.
    pub holiday_count: f64,
    pub working_days_per_year: u32,
}

impl CountryCalendar {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        holiday_count: f64,
        working_days_per_year: u32,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            name: name.into(),
            holiday_count,
            working_days_per_year,
        }
    }

    /// Weekday and weekend trading days in an average month.
    pub fn average_month(&self) -> PeriodDays {
        let weekdays = (f64::from(self.working_days_per_year) / 12.0).round();
        let weekend_days = (AVERAGE_DAYS_PER_MONTH - weekdays).round().max(0.0);
        PeriodDays {
            weekdays: weekdays as u32,
            weekend_days: weekend_days as u32,
        }
    }
}

/// Count of trading days in a period, split by day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDays {
    pub weekdays: u32,
    pub weekend_days: u32,
}

const REFERENCE: [(&str, &str, f64, u32); 5] = [
    ("FR", "France", 11.0, 250),
    ("GB", "United Kingdom", 8.0, 251),
    ("US", "United States", 11.0, 250),
    ("TR", "Turkey", 14.5, 249),
    ("DE", "Germany", 9.0, 252),
];

static CALENDARS: Lazy<Vec<CountryCalendar>> = Lazy::new(|| {
    REFERENCE
        .iter()
        .map(|(code, name, holidays, working_days)| {
            CountryCalendar::new(*code, *name, *holidays, *working_days)
        })
        .collect()
});

static BY_CODE: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    REFERENCE
        .iter()
        .enumerate()
        .map(|(idx, (code, ..))| (*code, idx))
        .collect()
});

/// Every country in the reference table, in display order.
pub fn countries() -> &'static [CountryCalendar] {
    &CALENDARS
}

/// Looks up a country by its two-letter code, ignoring case.
pub fn find_country(code: &str) -> Option<&'static CountryCalendar> {
    let normalized = code.trim().to_ascii_uppercase();
    BY_CODE
        .get(normalized.as_str())
        .and_then(|idx| CALENDARS.get(*idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let france = find_country(" fr ").expect("France is listed");
        assert_eq!(france.name, "France");
        assert_eq!(france.working_days_per_year, 250);
        assert!(find_country("XX").is_none());
    }

    #[test]
    fn turkey_keeps_half_day_holidays() {
        let turkey = find_country("TR").unwrap();
        assert_eq!(turkey.holiday_count, 14.5);
    }

    #[test]
    fn average_month_uses_rounded_working_days() {
        let france = find_country("FR").unwrap();
        let days = france.average_month();
        assert_eq!(days.weekdays, 21);
        assert_eq!(days.weekend_days, 9);

        let germany = find_country("DE").unwrap().average_month();
        assert_eq!(germany.weekdays, 21);
    }

    #[test]
    fn table_lists_five_countries() {
        let codes: Vec<&str> = countries().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["FR", "GB", "US", "TR", "DE"]);
    }
}
