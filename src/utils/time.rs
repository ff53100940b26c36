use chrono::{NaiveDate, Weekday};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

lazy_static! {
    /// `H:MM` or `HH:MM`, optionally followed by an AM/PM marker
    static ref CLOCK_TIME: Regex =
        Regex::new(r"^(\d{1,2}):(\d{2})(?:\s*([AaPp][Mm]))?$").expect("clock time pattern");

    /// Zero-padded `YYYY-MM-DD`
    static ref CALENDAR_DATE: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("calendar date pattern");
}

/// A wall-clock time in 24-hour form.
///
/// Values produced by [`parse_clock_time`] are always within `00:00..=23:59`.
/// Values produced by [`ClockTime::plus_minutes`] keep counting hours past
/// midnight instead of wrapping, so `23:30` plus 60 minutes is `24:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create a time of day, rejecting out-of-range values
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Build a time from minutes since midnight
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hour: total / 60,
            minute: total % 60,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Add a duration, carrying whole hours out of the minute field
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes_since_midnight().saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a time string in `H:MM`/`HH:MM` format with an optional AM/PM marker
pub fn parse_clock_time(time_str: &str) -> Option<ClockTime> {
    let caps = CLOCK_TIME.captures(time_str.trim())?;
    let hour = caps[1].parse::<u32>().ok()?;
    let minute = caps[2].parse::<u32>().ok()?;

    let hour = match caps.get(3).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(marker) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (marker.as_str(), hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                ("PM", 12) => 12,
                (_, h) => h + 12,
            }
        }
        None => hour,
    };

    ClockTime::new(hour, minute)
}

/// Parse a calendar date in `YYYY-MM-DD` format
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    // chrono alone also takes unpadded fields and a leading sign
    if !CALENDAR_DATE.is_match(date_str) {
        return None;
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Map an ISO weekday number (1 = Monday .. 7 = Sunday) to a weekday
pub fn weekday_from_number(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// English name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
