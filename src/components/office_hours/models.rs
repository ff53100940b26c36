use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Message returned for an accepted slot
pub const SLOT_AVAILABLE: &str = "Time slot is available";

/// Outcome of checking a proposed interview slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationVerdict {
    /// Verdict for an accepted slot
    pub fn available() -> Self {
        Self {
            is_valid: true,
            message: SLOT_AVAILABLE.to_string(),
        }
    }

    /// Verdict for a rejected slot
    pub fn rejected(rejection: &Rejection) -> Self {
        Self {
            is_valid: false,
            message: rejection.to_string(),
        }
    }
}

impl From<Result<ScheduledSlot, Rejection>> for ValidationVerdict {
    fn from(result: Result<ScheduledSlot, Rejection>) -> Self {
        match result {
            Ok(_) => Self::available(),
            Err(rejection) => Self::rejected(&rejection),
        }
    }
}

/// Reason a proposed slot cannot be booked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("Invalid time format")]
    InvalidTimeFormat,

    #[error("Interviews can only be scheduled on {allowed}")]
    OutsideWeekday { allowed: String },

    #[error("Interviews can only start during office hours ({opens}-{closes})")]
    StartOutsideWindow {
        start: ClockTime,
        opens: String,
        closes: String,
    },

    #[error(
        "Interview duration is too long: it would end at {end}, after office hours close at {closes}"
    )]
    EndExceedsWindow { end: ClockTime, closes: String },
}

/// A slot that fits inside office hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSlot {
    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: u32,
}
