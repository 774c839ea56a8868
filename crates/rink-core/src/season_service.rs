//! Maps calendar months to seasonal capacity utilisation.

use chrono::Month;

use rink_domain::{CapacityProfile, Season, SeasonalCapacity};

pub struct SeasonService;

impl SeasonService {
    pub fn season_for(month: Month) -> Season {
        Season::for_month(month)
    }

    /// Weekday and weekend utilisation that applies during `month`.
    pub fn capacity_for(profile: &CapacityProfile, month: Month) -> SeasonalCapacity {
        profile.season(Self::season_for(month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rink_domain::{Percent, MONTHS};

    fn profile() -> CapacityProfile {
        let pair = |weekday, weekend| {
            SeasonalCapacity::new(Percent::new(weekday).unwrap(), Percent::new(weekend).unwrap())
        };
        CapacityProfile {
            max_capacity: 100,
            high_season: pair(80, 90),
            mid_season: pair(60, 70),
            low_season: pair(40, 50),
        }
    }

    #[test]
    fn each_month_resolves_to_its_season_pair() {
        let profile = profile();
        let expected = [
            (80, 90), // Jan
            (80, 90),
            (60, 70),
            (60, 70),
            (40, 50), // May
            (40, 50),
            (40, 50),
            (40, 50),
            (60, 70), // Sep
            (60, 70),
            (80, 90), // Nov
            (80, 90),
        ];
        for (month, (weekday, weekend)) in MONTHS.iter().zip(expected) {
            let capacity = SeasonService::capacity_for(&profile, *month);
            assert_eq!(capacity.weekday.value(), weekday, "{month:?} weekday");
            assert_eq!(capacity.weekend.value(), weekend, "{month:?} weekend");
        }
    }

    #[test]
    fn november_is_high_and_june_is_low() {
        assert_eq!(SeasonService::season_for(Month::November), Season::High);
        assert_eq!(SeasonService::season_for(Month::June), Season::Low);
    }
}
