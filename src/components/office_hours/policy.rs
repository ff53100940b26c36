use crate::error::{config_error, AppResult};
use crate::utils::time::{weekday_from_number, weekday_name};
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default opening hour (inclusive)
pub const DEFAULT_START_HOUR: u32 = 9;
/// Default closing hour
pub const DEFAULT_END_HOUR: u32 = 18;
/// Monday to Friday as ISO weekday numbers
pub const DEFAULT_WEEKDAYS: [u8; 5] = [1, 2, 3, 4, 5];

/// Weekly office hours during which interviews may be booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeHoursPolicy {
    /// First hour a slot may start at (inclusive, 24-hour)
    pub start_hour: u32,
    /// Closing hour. Slots must start before it and may end exactly on it.
    pub end_hour: u32,
    /// ISO weekday numbers (1 = Monday .. 7 = Sunday) open for booking
    pub allowed_weekdays: BTreeSet<u8>,
}

impl Default for OfficeHoursPolicy {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            allowed_weekdays: DEFAULT_WEEKDAYS.into_iter().collect(),
        }
    }
}

impl OfficeHoursPolicy {
    /// Create a policy and check that it is well-formed
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        allowed_weekdays: impl IntoIterator<Item = u8>,
    ) -> AppResult<Self> {
        let policy = Self {
            start_hour,
            end_hour,
            allowed_weekdays: allowed_weekdays.into_iter().collect(),
        };
        policy.check()?;
        Ok(policy)
    }

    /// Open around the clock, every day of the week
    pub fn always_open() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            allowed_weekdays: (1..=7).collect(),
        }
    }

    /// Verify hour bounds and weekday numbers
    pub fn check(&self) -> AppResult<()> {
        if self.end_hour > 24 {
            return Err(config_error(&format!(
                "end_hour must be at most 24, got {}",
                self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(config_error(&format!(
                "start_hour ({}) must be earlier than end_hour ({})",
                self.start_hour, self.end_hour
            )));
        }
        if self.allowed_weekdays.is_empty() {
            return Err(config_error("allowed_weekdays must not be empty"));
        }
        if let Some(bad) = self
            .allowed_weekdays
            .iter()
            .find(|n| weekday_from_number(**n).is_none())
        {
            return Err(config_error(&format!(
                "allowed_weekdays entries must be between 1 and 7, got {}",
                bad
            )));
        }
        Ok(())
    }

    /// Whether bookings are allowed on the given weekday
    pub fn allows(&self, weekday: Weekday) -> bool {
        self.allowed_weekdays
            .contains(&(weekday.number_from_monday() as u8))
    }

    /// Whether the given date falls on an allowed weekday
    pub fn allows_date(&self, date: &impl Datelike) -> bool {
        self.allows(date.weekday())
    }

    /// Opening time formatted as `HH:00`
    pub fn opening_label(&self) -> String {
        format!("{:02}:00", self.start_hour)
    }

    /// Closing time formatted as `HH:00`
    pub fn closing_label(&self) -> String {
        format!("{:02}:00", self.end_hour)
    }

    /// Human readable list of the allowed days
    pub fn describe_weekdays(&self) -> String {
        if self.allowed_weekdays.iter().eq(DEFAULT_WEEKDAYS.iter()) {
            return "weekdays (Monday-Friday)".to_string();
        }
        let names: Vec<&str> = self
            .allowed_weekdays
            .iter()
            .filter_map(|n| weekday_from_number(*n))
            .map(weekday_name)
            .collect();
        names.join(", ")
    }
}
