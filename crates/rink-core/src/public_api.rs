//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Presentation layers (forms, reports, bindings) can rely on these without
//! depending on the full service surface area.

use rink_domain::{
    find_country, month_from_index, CountryCalendar, DayType, OperatingSchedule, PriceTierKind,
    ScenarioSnapshot,
};

use crate::{projection_service::ProjectionService, session_service::SessionService, CoreError};

/// Headline figures for a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProjectionSummary {
    pub as_of_month_index: u32,
    pub monthly_revenue: i64,
    pub monthly_expenses: i64,
    pub monthly_profit: i64,
    pub yearly_revenue: i64,
    pub yearly_expenses: i64,
    pub yearly_profit: i64,
    pub per_month_revenue: [i64; 12],
}

/// Projects `scenario` for the zero-based month index `as_of_month_index` (January = 0).
pub fn api_project(
    scenario: &ScenarioSnapshot,
    as_of_month_index: u32,
) -> Result<ApiProjectionSummary, CoreError> {
    let as_of = month_from_index(as_of_month_index)?;
    let result = ProjectionService::project(scenario, as_of)?;
    Ok(ApiProjectionSummary {
        as_of_month_index,
        monthly_revenue: result.monthly.revenue,
        monthly_expenses: result.monthly.expenses,
        monthly_profit: result.monthly.profit,
        yearly_revenue: result.yearly.revenue,
        yearly_expenses: result.yearly.expenses,
        yearly_profit: result.yearly.profit,
        per_month_revenue: result.yearly.per_month_revenue,
    })
}

/// Returns the number of sessions that fit in a day on `schedule`.
pub fn api_sessions_per_day(schedule: &OperatingSchedule) -> Result<u32, CoreError> {
    SessionService::sessions_per_day(schedule)
}

/// Resolves a calendar from the reference table.
pub fn api_country(code: &str) -> Result<CountryCalendar, CoreError> {
    find_country(code)
        .cloned()
        .ok_or_else(|| CoreError::UnknownCountry(code.trim().to_string()))
}

/// Sets one side of a day type's tier split; the other side becomes its complement.
pub fn api_set_distribution(
    scenario: &mut ScenarioSnapshot,
    day: DayType,
    tier: PriceTierKind,
    percent: i64,
) {
    scenario
        .pricing
        .for_day_mut(day)
        .distribution
        .set_share(tier, percent);
}
