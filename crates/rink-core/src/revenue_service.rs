//! Ticket revenue for a period, split by day type and price tier.

use chrono::Month;

use rink_domain::{
    CapacityProfile, DayType, DayTypeRevenue, Percent, PeriodDays, PeriodRevenue, PriceTier,
    PricingProfile, Season, TierRevenue,
};

use crate::{
    rounding::whole_units, season_service::SeasonService, session_service::SessionCounts,
    CoreError,
};

/// Everything the revenue calculation needs for one period.
#[derive(Debug, Clone, Copy)]
pub struct RevenueInputs<'a> {
    pub sessions: SessionCounts,
    pub days: PeriodDays,
    pub capacity: &'a CapacityProfile,
    pub pricing: &'a PricingProfile,
}

pub struct RevenueService;

impl RevenueService {
    /// Revenue per tier for `tickets` sold at `tier` prices.
    ///
    /// Each tier is an independent product; the multiplication order keeps
    /// whole-number inputs exact until the final division.
    pub fn tier_revenue(tickets: u64, tier: &PriceTier) -> TierRevenue {
        let tickets = tickets as f64;
        let share = |price: f64, percent: Percent| {
            tickets * price * f64::from(percent.value()) / 100.0
        };
        TierRevenue {
            standard: share(tier.standard_price, tier.distribution.standard()),
            discounted: share(tier.discounted_price, tier.distribution.discounted()),
        }
    }

    /// Revenue for one day type given its session count, day count, and utilisation.
    pub fn day_revenue(
        sessions_per_day: u32,
        days: u32,
        capacity: &CapacityProfile,
        utilisation: Percent,
        tier: &PriceTier,
    ) -> DayTypeRevenue {
        let visitors_per_session = capacity.visitors_at(utilisation);
        let tickets =
            u64::from(sessions_per_day) * u64::from(days) * u64::from(visitors_per_session);
        DayTypeRevenue {
            sessions_per_day,
            days,
            capacity: utilisation,
            visitors_per_session,
            tiers: Self::tier_revenue(tickets, tier),
        }
    }

    /// Revenue for a period trading under `season`; the total is rounded to whole currency.
    pub fn period_revenue(
        inputs: &RevenueInputs<'_>,
        season: Season,
    ) -> Result<PeriodRevenue, CoreError> {
        let utilisation = inputs.capacity.season(season);
        let day = |day: DayType, days: u32| {
            Self::day_revenue(
                inputs.sessions.for_day(day),
                days,
                inputs.capacity,
                utilisation.for_day(day),
                inputs.pricing.for_day(day),
            )
        };
        let weekday = day(DayType::Weekday, inputs.days.weekdays);
        let weekend = day(DayType::Weekend, inputs.days.weekend_days);
        let raw_total = weekday.tiers.total() + weekend.tiers.total();
        let total = whole_units(raw_total, "period revenue")?;
        Ok(PeriodRevenue {
            season,
            weekday,
            weekend,
            total,
        })
    }

    pub fn month_revenue(
        inputs: &RevenueInputs<'_>,
        month: Month,
    ) -> Result<PeriodRevenue, CoreError> {
        Self::period_revenue(inputs, SeasonService::season_for(month))
    }
}
