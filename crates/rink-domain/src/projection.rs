//! Derived revenue, expense, and profit figures.

use chrono::Month;

use crate::{
    capacity::Season,
    common::{month_index, DayType, Percent},
    pricing::PriceTierKind,
};

/// Unrounded revenue earned by each ticket tier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TierRevenue {
    pub standard: f64,
    pub discounted: f64,
}

impl TierRevenue {
    pub fn get(&self, tier: PriceTierKind) -> f64 {
        match tier {
            PriceTierKind::Standard => self.standard,
            PriceTierKind::Discounted => self.discounted,
        }
    }

    pub fn total(&self) -> f64 {
        self.standard + self.discounted
    }
}

/// Revenue for one day type within a period, with the figures it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTypeRevenue {
    pub sessions_per_day: u32,
    pub days: u32,
    pub capacity: Percent,
    pub visitors_per_session: u32,
    pub tiers: TierRevenue,
}

impl DayTypeRevenue {
    /// Tickets sold across the period.
    pub fn tickets(&self) -> u64 {
        u64::from(self.sessions_per_day)
            * u64::from(self.days)
            * u64::from(self.visitors_per_session)
    }
}

/// Revenue for a month, split by day type and tier. `total` is rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodRevenue {
    pub season: Season,
    pub weekday: DayTypeRevenue,
    pub weekend: DayTypeRevenue,
    pub total: i64,
}

impl PeriodRevenue {
    pub fn for_day(&self, day: DayType) -> &DayTypeRevenue {
        match day {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }

    pub fn tier_total(&self, tier: PriceTierKind) -> f64 {
        self.weekday.tiers.get(tier) + self.weekend.tiers.get(tier)
    }
}

/// Revenue, expenses, and profit for a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
}

/// Revenue, expenses, and profit for the full year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlySummary {
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
    /// Rounded revenue for each month, January first.
    pub per_month_revenue: [i64; 12],
}

/// Complete output of one projection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub as_of: Month,
    pub monthly: MonthlySummary,
    pub yearly: YearlySummary,
    /// Breakdown for each month, January first.
    pub months: Vec<PeriodRevenue>,
}

impl ProjectionResult {
    pub fn month(&self, month: Month) -> Option<&PeriodRevenue> {
        self.months.get(month_index(month))
    }
}
