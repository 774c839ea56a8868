//! Composes sessions, seasonal capacity, revenue, and expenses into a projection.

use chrono::Month;
use tracing::debug;

use rink_domain::{
    CountryCalendar, MonthlySummary, PeriodRevenue, ProjectionResult, ScenarioSnapshot,
    YearlySummary, MONTHS,
};

use crate::{
    expense_service::ExpenseService,
    revenue_service::{RevenueInputs, RevenueService},
    rounding::checked_total,
    session_service::SessionService,
    CoreError,
};

const MAX_WORKING_DAYS: u32 = 365;

pub struct ProjectionService;

impl ProjectionService {
    /// Derives monthly and yearly figures for `scenario` as seen from `as_of`.
    ///
    /// The monthly view uses the season of `as_of`; the yearly view sums twelve
    /// independently seasoned months. Yearly expenses are the raw category sum and
    /// monthly expenses are that sum divided by twelve.
    pub fn project(
        scenario: &ScenarioSnapshot,
        as_of: Month,
    ) -> Result<ProjectionResult, CoreError> {
        let inputs = Self::revenue_inputs(scenario)?;
        let months: Vec<PeriodRevenue> = MONTHS
            .iter()
            .map(|month| RevenueService::month_revenue(&inputs, *month))
            .collect::<Result<_, _>>()?;

        let mut per_month_revenue = [0_i64; 12];
        for (slot, month) in per_month_revenue.iter_mut().zip(&months) {
            *slot = month.total;
        }
        let yearly_revenue = checked_total(per_month_revenue, "yearly revenue")?;
        let monthly_revenue = per_month_revenue[rink_domain::month_index(as_of)];

        let expenses = ExpenseService::totals(&scenario.expenses)?;
        let result = ProjectionResult {
            as_of,
            monthly: MonthlySummary {
                revenue: monthly_revenue,
                expenses: expenses.monthly,
                profit: checked_total([monthly_revenue, -expenses.monthly], "monthly profit")?,
            },
            yearly: YearlySummary {
                revenue: yearly_revenue,
                expenses: expenses.yearly,
                profit: checked_total([yearly_revenue, -expenses.yearly], "yearly profit")?,
                per_month_revenue,
            },
            months,
        };
        debug!(
            as_of = ?as_of,
            monthly_revenue,
            yearly_revenue,
            yearly_profit = result.yearly.profit,
            "projection derived"
        );
        Ok(result)
    }

    /// Validates the snapshot and gathers the per-period revenue inputs.
    pub fn revenue_inputs(scenario: &ScenarioSnapshot) -> Result<RevenueInputs<'_>, CoreError> {
        scenario.validate()?;
        Self::validate_calendar(&scenario.calendar)?;
        let sessions = SessionService::session_counts(&scenario.hours)?;
        Ok(RevenueInputs {
            sessions,
            days: scenario.calendar.average_month(),
            capacity: &scenario.capacity,
            pricing: &scenario.pricing,
        })
    }

    fn validate_calendar(calendar: &CountryCalendar) -> Result<(), CoreError> {
        if calendar.working_days_per_year > MAX_WORKING_DAYS {
            return Err(CoreError::InvalidCalendar(format!(
                "{} lists {} working days per year",
                calendar.code, calendar.working_days_per_year
            )));
        }
        Ok(())
    }
}
