//! Derives how many sessions fit into an operating day.

use rink_domain::{DayType, OperatingHours, OperatingSchedule};

use crate::CoreError;

/// Sessions per day for weekdays and weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCounts {
    pub weekday: u32,
    pub weekend: u32,
}

impl SessionCounts {
    pub fn for_day(&self, day: DayType) -> u32 {
        match day {
            DayType::Weekday => self.weekday,
            DayType::Weekend => self.weekend,
        }
    }
}

pub struct SessionService;

impl SessionService {
    /// Number of whole session slots between opening and closing.
    ///
    /// A trailing partial slot is discarded.
    pub fn sessions_per_day(schedule: &OperatingSchedule) -> Result<u32, CoreError> {
        schedule.validate()?;
        let slot = i64::from(schedule.slot_minutes());
        let sessions = schedule.open_minutes().div_euclid(slot);
        u32::try_from(sessions)
            .map_err(|_| CoreError::InvalidSchedule(format!("{sessions} sessions per day")))
    }

    pub fn session_counts(hours: &OperatingHours) -> Result<SessionCounts, CoreError> {
        Ok(SessionCounts {
            weekday: Self::sessions_per_day(&hours.weekday)?,
            weekend: Self::sessions_per_day(&hours.weekend)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn schedule(start: (u32, u32), end: (u32, u32), session: u32, pause: u32) -> OperatingSchedule {
        OperatingSchedule {
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            session_duration_minutes: session,
            break_duration_minutes: pause,
        }
    }

    #[test]
    fn twelve_hour_day_fits_four_long_sessions() {
        let day = schedule((10, 0), (22, 0), 120, 30);
        assert_eq!(SessionService::sessions_per_day(&day), Ok(4));
    }

    #[test]
    fn partial_sessions_are_discarded() {
        // 725 open minutes, 150-minute slots
        let day = schedule((10, 0), (22, 5), 120, 30);
        assert_eq!(SessionService::sessions_per_day(&day), Ok(4));

        let short = schedule((10, 0), (11, 59), 60, 0);
        assert_eq!(SessionService::sessions_per_day(&short), Ok(1));
    }

    #[test]
    fn default_form_hours_give_twelve_sessions() {
        let day = schedule((10, 0), (22, 0), 45, 15);
        assert_eq!(SessionService::sessions_per_day(&day), Ok(12));
    }

    #[test]
    fn invalid_hours_are_reported() {
        let inverted = schedule((22, 0), (10, 0), 45, 15);
        assert!(matches!(
            SessionService::sessions_per_day(&inverted),
            Err(CoreError::InvalidSchedule(_))
        ));

        let equal = schedule((10, 0), (10, 0), 45, 15);
        assert!(SessionService::sessions_per_day(&equal).is_err());

        let empty_session = schedule((10, 0), (22, 0), 0, 15);
        assert!(matches!(
            SessionService::sessions_per_day(&empty_session),
            Err(CoreError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn weekday_and_weekend_are_counted_separately() {
        let hours = OperatingHours {
            weekday: schedule((16, 0), (22, 0), 45, 15),
            weekend: schedule((10, 0), (22, 0), 45, 15),
        };
        let counts = SessionService::session_counts(&hours).unwrap();
        assert_eq!(counts, SessionCounts { weekday: 6, weekend: 12 });
        assert_eq!(counts.for_day(DayType::Weekend), 12);
    }
}
