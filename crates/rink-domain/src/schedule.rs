//! Opening hours and session layout for a trading day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{common::DayType, error::ValidationError};

/// Opening window for a single day plus the length of each sellable session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingSchedule {
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub session_duration_minutes: u32,
    pub break_duration_minutes: u32,
}

impl OperatingSchedule {
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        session_duration_minutes: u32,
        break_duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        let schedule = Self {
            start_time,
            end_time,
            session_duration_minutes,
            break_duration_minutes,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Checks that the day is non-empty and a session has a length.
    ///
    /// A zero break is accepted; the combined slot then equals the session length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_time <= self.start_time {
            return Err(ValidationError::InvalidSchedule(format!(
                "closing time {} must be after opening time {}",
                self.end_time.format("%H:%M"),
                self.start_time.format("%H:%M")
            )));
        }
        if self.session_duration_minutes == 0 {
            return Err(ValidationError::InvalidSchedule(
                "session duration must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Minutes between opening and closing on the same calendar day.
    pub fn open_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Minutes consumed by one session and the break that follows it.
    pub fn slot_minutes(&self) -> u32 {
        self.session_duration_minutes
            .saturating_add(self.break_duration_minutes)
    }
}

/// Weekday and weekend schedules for the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub weekday: OperatingSchedule,
    pub weekend: OperatingSchedule,
}

impl OperatingHours {
    /// Uses the same schedule on every day of the week.
    pub fn uniform(schedule: OperatingSchedule) -> Self {
        Self {
            weekday: schedule.clone(),
            weekend: schedule,
        }
    }

    pub fn for_day(&self, day: DayType) -> &OperatingSchedule {
        match day {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }

    pub fn for_day_mut(&mut self, day: DayType) -> &mut OperatingSchedule {
        match day {
            DayType::Weekday => &mut self.weekday,
            DayType::Weekend => &mut self.weekend,
        }
    }
}

/// Serializes times of day as `HH:MM`; also accepts `HH:MM:SS` on input.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        NaiveTime::parse_from_str(trimmed, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|err| D::Error::custom(format!("invalid time `{trimmed}`: {err}")))
    }
}
