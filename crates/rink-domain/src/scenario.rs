//! The full set of inputs a projection is derived from.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    calendar::{find_country, CountryCalendar},
    capacity::{CapacityProfile, SeasonalCapacity},
    common::{Amounted, Percent},
    error::ValidationError,
    expense::ExpenseCategory,
    pricing::{PriceTier, PricingProfile, TierDistribution},
    schedule::{OperatingHours, OperatingSchedule},
    seed::initial_expenses,
};

/// Immutable input snapshot handed to the projection engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub hours: OperatingHours,
    pub pricing: PricingProfile,
    pub capacity: CapacityProfile,
    pub calendar: CountryCalendar,
    #[serde(default)]
    pub expenses: Vec<ExpenseCategory>,
}

impl ScenarioSnapshot {
    pub fn with_calendar(mut self, calendar: CountryCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_expenses(mut self, expenses: Vec<ExpenseCategory>) -> Self {
        self.expenses = expenses;
        self
    }

    /// Checks every input the projection reads: both schedules, both price
    /// tiers, and each expense amount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.hours.weekday.validate()?;
        self.hours.weekend.validate()?;
        self.pricing.weekday.validate()?;
        self.pricing.weekend.validate()?;
        for expense in self.expenses.iter().flat_map(|category| &category.expenses) {
            let amount = expense.amount();
            if !amount.is_finite() || amount < 0.0 {
                return Err(ValidationError::NegativeAmount(amount));
            }
        }
        Ok(())
    }

    pub fn category(&self, id: Uuid) -> Option<&ExpenseCategory> {
        self.expenses.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut ExpenseCategory> {
        self.expenses.iter_mut().find(|category| category.id == id)
    }
}

impl Default for ScenarioSnapshot {
    fn default() -> Self {
        let opening = NaiveTime::default() + Duration::hours(10);
        let closing = NaiveTime::default() + Duration::hours(22);
        let schedule = OperatingSchedule {
            start_time: opening,
            end_time: closing,
            session_duration_minutes: 45,
            break_duration_minutes: 15,
        };
        let seasonal = |weekday: i64, weekend: i64| {
            SeasonalCapacity::new(Percent::clamped(weekday), Percent::clamped(weekend))
        };
        let calendar = find_country("FR")
            .cloned()
            .unwrap_or_else(|| CountryCalendar::new("FR", "France", 11.0, 250));

        Self {
            hours: OperatingHours::uniform(schedule),
            pricing: PricingProfile {
                weekday: PriceTier::new(13.0, 11.0, TierDistribution::default()),
                weekend: PriceTier::new(15.0, 13.0, TierDistribution::default()),
            },
            capacity: CapacityProfile {
                max_capacity: 80,
                high_season: seasonal(85, 50),
                mid_season: seasonal(65, 40),
                low_season: seasonal(45, 30),
            },
            calendar,
            expenses: initial_expenses(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid_and_seeded() {
        let scenario = ScenarioSnapshot::default();
        assert!(scenario.hours.weekday.validate().is_ok());
        assert_eq!(scenario.hours.weekday, scenario.hours.weekend);
        assert_eq!(scenario.calendar.code, "FR");
        assert_eq!(scenario.expenses.len(), 6);
    }

    #[test]
    fn validate_rejects_unusable_prices() {
        let mut scenario = ScenarioSnapshot::default();
        assert_eq!(scenario.validate(), Ok(()));

        scenario.pricing.weekend.discounted_price = -1.0;
        assert!(matches!(
            scenario.validate(),
            Err(ValidationError::InvalidPrice {
                tier: crate::PriceTierKind::Discounted,
                ..
            })
        ));

        scenario.pricing.weekend.discounted_price = 0.0;
        scenario.pricing.weekday.standard_price = f64::NAN;
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn validate_checks_schedules_on_both_day_types() {
        let mut scenario = ScenarioSnapshot::default();
        scenario.hours.weekend.session_duration_minutes = 0;
        assert!(matches!(
            scenario.validate(),
            Err(ValidationError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn snapshot_survives_json_round_trip() {
        let scenario = ScenarioSnapshot::default();
        let json = serde_json::to_string(&scenario).unwrap();
        let restored: ScenarioSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, scenario);
    }
}
