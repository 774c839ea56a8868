//! Venue capacity and its seasonal utilisation.

use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::common::{DayType, Percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Demand seasons of the skating year.
pub enum Season {
    /// November through February.
    High,
    /// March, April, September and October.
    Mid,
    /// May through August.
    Low,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::High, Season::Mid, Season::Low];

    /// Fixed partition of the calendar; every month belongs to exactly one season.
    pub fn for_month(month: Month) -> Self {
        match month {
            Month::November | Month::December | Month::January | Month::February => Season::High,
            Month::March | Month::April | Month::September | Month::October => Season::Mid,
            Month::May | Month::June | Month::July | Month::August => Season::Low,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Season::High => "High",
            Season::Mid => "Mid",
            Season::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Weekday and weekend utilisation for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalCapacity {
    pub weekday: Percent,
    pub weekend: Percent,
}

impl SeasonalCapacity {
    pub fn new(weekday: Percent, weekend: Percent) -> Self {
        Self { weekday, weekend }
    }

    pub fn for_day(&self, day: DayType) -> Percent {
        match day {
            DayType::Weekday => self.weekday,
            DayType::Weekend => self.weekend,
        }
    }
}

/// Maximum visitors per session plus utilisation for each season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityProfile {
    pub max_capacity: u32,
    pub high_season: SeasonalCapacity,
    pub mid_season: SeasonalCapacity,
    pub low_season: SeasonalCapacity,
}

impl CapacityProfile {
    pub fn season(&self, season: Season) -> SeasonalCapacity {
        match season {
            Season::High => self.high_season,
            Season::Mid => self.mid_season,
            Season::Low => self.low_season,
        }
    }

    pub fn season_mut(&mut self, season: Season) -> &mut SeasonalCapacity {
        match season {
            Season::High => &mut self.high_season,
            Season::Mid => &mut self.mid_season,
            Season::Low => &mut self.low_season,
        }
    }

    /// Visitors per session for `percent` of the maximum, rounded to whole people.
    pub fn visitors_at(&self, percent: Percent) -> u32 {
        percent.of(f64::from(self.max_capacity)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MONTHS;

    #[test]
    fn seasons_partition_the_year() {
        for season in Season::ALL {
            let months = MONTHS
                .iter()
                .filter(|month| Season::for_month(**month) == season)
                .count();
            assert_eq!(months, 4, "{season} season should span four months");
        }
    }

    #[test]
    fn winter_is_high_and_summer_is_low() {
        assert_eq!(Season::for_month(Month::November), Season::High);
        assert_eq!(Season::for_month(Month::June), Season::Low);
        assert_eq!(Season::for_month(Month::April), Season::Mid);
    }

    #[test]
    fn visitors_round_to_whole_people() {
        let profile = CapacityProfile {
            max_capacity: 85,
            high_season: SeasonalCapacity::new(Percent::clamped(50), Percent::clamped(90)),
            mid_season: SeasonalCapacity::new(Percent::ZERO, Percent::ZERO),
            low_season: SeasonalCapacity::new(Percent::ZERO, Percent::ZERO),
        };
        // 42.5 rounds away from zero
        assert_eq!(profile.visitors_at(Percent::clamped(50)), 43);
        assert_eq!(profile.visitors_at(Percent::FULL), 85);
    }
}
