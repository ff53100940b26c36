use super::models::{Rejection, ScheduledSlot, ValidationVerdict};
use super::policy::OfficeHoursPolicy;
use crate::error::AppResult;
use crate::utils::time::{parse_clock_time, parse_date};

/// Decides whether a proposed interview slot fits inside office hours.
///
/// The validator only reads its policy, so a single instance can be shared
/// across threads. It performs no I/O and keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct OfficeHoursValidator {
    policy: OfficeHoursPolicy,
}

impl OfficeHoursValidator {
    /// Create a validator for the given policy, rejecting malformed policies
    pub fn new(policy: OfficeHoursPolicy) -> AppResult<Self> {
        policy.check()?;
        Ok(Self { policy })
    }

    /// The policy this validator enforces
    pub fn policy(&self) -> &OfficeHoursPolicy {
        &self.policy
    }

    /// Check a slot and report the verdict with a readable message
    pub fn validate(
        &self,
        date: &str,
        start_time: &str,
        duration_minutes: u32,
    ) -> ValidationVerdict {
        self.check(date, start_time, duration_minutes).into()
    }

    /// Check a slot, returning the parsed slot or the first rule it breaks.
    ///
    /// Rules are applied in order: date format, weekday, time format,
    /// start inside the window, end inside the window.
    pub fn check(
        &self,
        date: &str,
        start_time: &str,
        duration_minutes: u32,
    ) -> Result<ScheduledSlot, Rejection> {
        let policy = &self.policy;

        let date = parse_date(date).ok_or(Rejection::InvalidDateFormat)?;
        if !policy.allows_date(&date) {
            return Err(Rejection::OutsideWeekday {
                allowed: policy.describe_weekdays(),
            });
        }

        let start = parse_clock_time(start_time).ok_or(Rejection::InvalidTimeFormat)?;
        let end = start.plus_minutes(duration_minutes);

        if start.hour() < policy.start_hour || start.hour() >= policy.end_hour {
            return Err(Rejection::StartOutsideWindow {
                start,
                opens: policy.opening_label(),
                closes: policy.closing_label(),
            });
        }

        // Ending exactly on the closing hour is allowed
        if end.minutes_since_midnight() > policy.end_hour * 60 {
            return Err(Rejection::EndExceedsWindow {
                end,
                closes: policy.closing_label(),
            });
        }

        Ok(ScheduledSlot {
            date,
            start,
            end,
            duration_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::ClockTime;

    const MONDAY: &str = "2025-11-17";
    const SATURDAY: &str = "2025-11-15";
    const SUNDAY: &str = "2025-11-16";

    fn validator() -> OfficeHoursValidator {
        OfficeHoursValidator::default()
    }

    #[test]
    fn test_start_boundaries() {
        let v = validator();

        // Opening hour is inclusive
        assert!(v.validate(MONDAY, "09:00", 60).is_valid);
        assert!(matches!(
            v.check(MONDAY, "08:59", 30),
            Err(Rejection::StartOutsideWindow { .. })
        ));

        // Closing hour is exclusive for the start
        assert!(matches!(
            v.check(MONDAY, "18:00", 0),
            Err(Rejection::StartOutsideWindow { .. })
        ));
        assert!(matches!(
            v.check(MONDAY, "06:00", 30),
            Err(Rejection::StartOutsideWindow { .. })
        ));
    }

    #[test]
    fn test_end_boundaries() {
        let v = validator();

        // Ending exactly at closing is fine
        let slot = v.check(MONDAY, "17:00", 60).unwrap();
        assert_eq!(slot.end, ClockTime::new(18, 0).unwrap());

        // One minute past closing is not
        assert_eq!(
            v.check(MONDAY, "17:01", 60),
            Err(Rejection::EndExceedsWindow {
                end: ClockTime::new(18, 1).unwrap(),
                closes: "18:00".to_string(),
            })
        );
        assert!(!v.validate(MONDAY, "17:00", 61).is_valid);
    }

    #[test]
    fn test_multi_hour_carry() {
        let v = validator();

        let slot = v.check(MONDAY, "09:45", 480).unwrap();
        assert_eq!(slot.end.to_string(), "17:45");

        let slot = v.check(MONDAY, "2:00 PM", 90).unwrap();
        assert_eq!(slot.start.to_string(), "14:00");
        assert_eq!(slot.end.to_string(), "15:30");

        // Nine hours from opening lands right on closing
        assert!(v.validate(MONDAY, "09:00", 540).is_valid);
        assert!(!v.validate(MONDAY, "09:00", 541).is_valid);
    }

    #[test]
    fn test_noon_and_midnight() {
        let v = validator();
        assert!(v.validate(MONDAY, "12:00 PM", 30).is_valid);
        assert!(matches!(
            v.check(MONDAY, "12:00 AM", 30),
            Err(Rejection::StartOutsideWindow { start, .. }) if start.hour() == 0
        ));
    }

    #[test]
    fn test_weekends_rejected_regardless_of_time() {
        let v = validator();
        for date in [SATURDAY, SUNDAY] {
            for time in ["10:00", "06:00", "garbage"] {
                let verdict = v.validate(date, time, 30);
                assert!(!verdict.is_valid);
                assert_eq!(
                    verdict.message,
                    "Interviews can only be scheduled on weekdays (Monday-Friday)"
                );
            }
        }
    }

    #[test]
    fn test_format_errors_date_first() {
        let v = validator();
        assert_eq!(v.check("2025-13-45", "10:00", 30), Err(Rejection::InvalidDateFormat));
        assert_eq!(v.check("2025-13-45", "9", 30), Err(Rejection::InvalidDateFormat));
        assert_eq!(v.check(MONDAY, "9", 30), Err(Rejection::InvalidTimeFormat));
        assert_eq!(v.check(MONDAY, "25:99", 30), Err(Rejection::InvalidTimeFormat));

        // Dates must be zero-padded with no sign or padding
        for date in ["2025-1-7", "+2025-11-17", "2025-11-17 "] {
            assert_eq!(v.check(date, "10:00", 30), Err(Rejection::InvalidDateFormat));
            assert_eq!(v.validate(date, "10:00", 30).message, "Invalid date format");
        }
    }

    #[test]
    fn test_validate_is_deterministic() {
        let v = validator();
        for (date, time, duration) in [
            (MONDAY, "10:00", 45),
            (MONDAY, "17:30", 45),
            (SATURDAY, "10:00", 45),
            ("nope", "10:00", 45),
        ] {
            assert_eq!(
                v.validate(date, time, duration),
                v.validate(date, time, duration)
            );
        }
    }

    #[test]
    fn test_accepted_slots_stay_inside_window() {
        let v = validator();
        let policy = v.policy().clone();
        for hour in 0..24u32 {
            for minute in [0u32, 15, 30, 59] {
                for duration in [0u32, 1, 30, 60, 90, 240, 600] {
                    let time = format!("{:02}:{:02}", hour, minute);
                    if let Ok(slot) = v.check(MONDAY, &time, duration) {
                        assert!(slot.start.hour() >= policy.start_hour);
                        assert!(slot.start.hour() < policy.end_hour);
                        assert!(slot.end.minutes_since_midnight() <= policy.end_hour * 60);
                    }
                }
            }
        }
    }

    #[test]
    fn test_always_open_policy() {
        let v = OfficeHoursValidator::new(OfficeHoursPolicy::always_open()).unwrap();
        assert!(v.validate(SUNDAY, "12:00 AM", 30).is_valid);
        assert!(v.validate(SATURDAY, "23:00", 60).is_valid);
        assert_eq!(
            v.check(SATURDAY, "23:30", 60),
            Err(Rejection::EndExceedsWindow {
                end: ClockTime::from_minutes(24 * 60 + 30),
                closes: "24:00".to_string(),
            })
        );
    }

    #[test]
    fn test_new_rejects_malformed_policy() {
        let policy = OfficeHoursPolicy {
            start_hour: 9,
            end_hour: u32::MAX,
            allowed_weekdays: (1..=5).collect(),
        };
        assert!(OfficeHoursValidator::new(policy).is_err());

        let policy = OfficeHoursPolicy {
            start_hour: 9,
            end_hour: 18,
            allowed_weekdays: Default::default(),
        };
        assert!(OfficeHoursValidator::new(policy).is_err());
    }

    #[test]
    fn test_six_day_policy() {
        let policy = OfficeHoursPolicy::new(8, 14, 1u8..=6).unwrap();
        let v = OfficeHoursValidator::new(policy).unwrap();

        assert!(v.validate(SATURDAY, "08:00", 360).is_valid);
        assert!(!v.validate(SATURDAY, "08:00", 361).is_valid);

        let verdict = v.validate(SUNDAY, "10:00", 30);
        assert!(!verdict.is_valid);
        assert_eq!(
            verdict.message,
            "Interviews can only be scheduled on Monday, Tuesday, Wednesday, Thursday, Friday, Saturday"
        );

        let verdict = v.validate(MONDAY, "14:00", 30);
        assert_eq!(
            verdict.message,
            "Interviews can only start during office hours (08:00-14:00)"
        );
    }
}
