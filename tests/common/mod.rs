#![allow(dead_code)]

use chrono::{NaiveTime, TimeZone, Utc};
use rink_projection::{
    domain::{
        find_country, CapacityProfile, OperatingHours, OperatingSchedule, Percent, PriceTier,
        PricingProfile, ScenarioSnapshot, SeasonalCapacity, TierDistribution,
    },
    FixedClock,
};

/// Clock frozen in the middle of the given month of 2025.
pub fn clock_in(month: u32) -> Box<FixedClock> {
    let instant = Utc
        .with_ymd_and_hms(2025, month, 15, 12, 0, 0)
        .single()
        .expect("valid instant");
    Box::new(FixedClock(instant))
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

fn pair(weekday: u8, weekend: u8) -> SeasonalCapacity {
    SeasonalCapacity::new(
        Percent::new(weekday).expect("percent"),
        Percent::new(weekend).expect("percent"),
    )
}

/// Four 2h sessions a day in France, 100 visitors at full capacity, no expenses.
pub fn france_scenario() -> ScenarioSnapshot {
    let split = TierDistribution::from_parts(70, 30).expect("split");
    let schedule = OperatingSchedule::new(time(10, 0), time(22, 0), 120, 30).expect("schedule");
    ScenarioSnapshot {
        hours: OperatingHours::uniform(schedule),
        pricing: PricingProfile {
            weekday: PriceTier::new(12.0, 8.0, split),
            weekend: PriceTier::new(15.0, 10.0, split),
        },
        capacity: CapacityProfile {
            max_capacity: 100,
            high_season: pair(80, 90),
            mid_season: pair(60, 70),
            low_season: pair(40, 50),
        },
        calendar: find_country("FR").expect("france").clone(),
        expenses: Vec::new(),
    }
}
