use core::str::FromStr;

use thiserror::Error;

use crate::utils::StrExt;

/// The length of a full-time working day.
///
/// This does not depend on how many days a week are worked.
pub const HOURS_PER_DAY: u64 = 8;

const SECONDS_PER_HOUR: u64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no time has been entered")]
    Empty,
    #[error("\"{component}\" of \"{input}\" is not a whole number")]
    InvalidComponent { input: String, component: String },
}

/// Parses a time in the format `HOURS:MINUTES:SECONDS`.
///
/// Components that are missing or left empty are zero, so `"8"`, `"8:30"` and
/// `":30"` are valid. The components are not limited to clock ranges.
pub fn parse_worked_time(input: &str) -> Result<(u64, u64, u64), ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let [hours, minutes, seconds] = input.split_exact::<3>(":").map(|component| {
        match component.map(str::trim) {
            None | Some("") => Ok(0),
            Some(component) => component
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidComponent {
                    input: input.to_string(),
                    component: component.to_string(),
                }),
        }
    });

    Ok((hours?, minutes?, seconds?))
}

/// The time somebody has worked in the current month.
///
/// Minutes and seconds are never carried over into hours, adding `00:45`
/// twice results in `90` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkedTime {
    hours: u64,
    minutes: u64,
    seconds: u64,
    fractional_hours: f64,
}

impl WorkedTime {
    #[must_use]
    pub const fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            fractional_hours: 0.0,
        }
    }

    /// The hours including the ones added as a decimal number.
    pub fn hours(&self) -> f64 {
        self.hours as f64 + self.fractional_hours
    }

    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn add_clock(&mut self, hours: u64, minutes: u64) {
        self.hours = self.hours.saturating_add(hours);
        self.minutes = self.minutes.saturating_add(minutes);
    }

    pub fn add_hours(&mut self, hours: f64) {
        self.fractional_hours += hours;
    }

    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        (self.hours as f64 + self.fractional_hours) * SECONDS_PER_HOUR as f64
            + self.minutes as f64 * 60.0
            + self.seconds as f64
    }

    #[must_use]
    pub fn as_hours(&self) -> f64 {
        self.total_seconds() / SECONDS_PER_HOUR as f64
    }

    /// The worked time in full-time working days.
    #[must_use]
    pub fn as_days(&self) -> f64 {
        self.total_seconds() / (HOURS_PER_DAY * SECONDS_PER_HOUR) as f64
    }
}

impl FromStr for WorkedTime {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (hours, minutes, seconds) = parse_worked_time(string)?;

        Ok(Self::new(hours, minutes, seconds))
    }
}

#[must_use]
pub fn worked_days(hours: u64, minutes: u64, seconds: u64) -> f64 {
    WorkedTime::new(hours, minutes, seconds).as_days()
}

#[must_use]
pub fn working_hours(days: f64) -> f64 {
    days * HOURS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_worked_time() {
        assert_eq!(parse_worked_time("8:30:00"), Ok((8, 30, 0)));
        assert_eq!(parse_worked_time("8:30:15"), Ok((8, 30, 15)));
        assert_eq!(parse_worked_time("8:30"), Ok((8, 30, 0)));
        assert_eq!(parse_worked_time("8"), Ok((8, 0, 0)));
        assert_eq!(parse_worked_time(":30"), Ok((0, 30, 0)));
        assert_eq!(parse_worked_time("8::15"), Ok((8, 0, 15)));
        assert_eq!(parse_worked_time(" 120:90:75 \n"), Ok((120, 90, 75)));
    }

    #[test]
    fn test_parse_worked_time_errors() {
        assert_eq!(parse_worked_time(""), Err(ParseError::Empty));
        assert_eq!(parse_worked_time("  \n"), Err(ParseError::Empty));

        assert_eq!(
            parse_worked_time("eight"),
            Err(ParseError::InvalidComponent {
                input: "eight".to_string(),
                component: "eight".to_string(),
            })
        );
        assert_eq!(
            parse_worked_time("8:-5"),
            Err(ParseError::InvalidComponent {
                input: "8:-5".to_string(),
                component: "-5".to_string(),
            })
        );
        // a fourth component is most likely a typo, so it is not silently dropped
        assert_eq!(
            parse_worked_time("8:30:15:00"),
            Err(ParseError::InvalidComponent {
                input: "8:30:15:00".to_string(),
                component: "15:00".to_string(),
            })
        );
        assert!(parse_worked_time("8.5").is_err());
    }

    #[test]
    fn test_worked_days() {
        assert_eq!(worked_days(8, 0, 0), 1.0);
        assert_eq!(worked_days(4, 0, 0), 0.5);
        assert_eq!(worked_days(0, 0, 0), 0.0);
        assert_eq!(worked_days(2, 0, 0), 0.25);
        assert_eq!(worked_days(0, 480, 0), 1.0);
        assert_eq!(worked_days(0, 0, 28800), 1.0);
    }

    #[test]
    fn test_working_hours_round_trip() {
        for hours in 0..=500 {
            assert_eq!(working_hours(worked_days(hours, 0, 0)), hours as f64);
        }
    }

    #[test]
    fn test_accumulation_does_not_carry() {
        let mut worked = WorkedTime::new(1, 0, 0);
        worked.add_clock(0, 45);
        worked.add_clock(0, 45);

        assert_eq!(worked.hours(), 1.0);
        assert_eq!(worked.minutes(), 90);
        assert_eq!(worked.total_seconds(), 3600.0 + 90.0 * 60.0);
        assert_eq!(worked.as_hours(), 2.5);
    }

    #[test]
    fn test_add_hours() {
        let mut worked: WorkedTime = "8:30".parse().unwrap();
        worked.add_hours(1.5);

        assert_eq!(worked.hours(), 9.5);
        assert_eq!(worked.minutes(), 30);
        assert_eq!(worked.as_hours(), 10.0);
        assert_eq!(worked.as_days(), 1.25);
    }

    #[test]
    fn test_large_components_do_not_overflow() {
        let worked: WorkedTime = "99999999999999999".parse().unwrap();
        assert_eq!(worked.hours(), 99999999999999999_u64 as f64);
        assert!(worked.as_days().is_finite());

        let mut worked = WorkedTime::new(u64::MAX, u64::MAX, u64::MAX);
        worked.add_clock(u64::MAX, 1);
        assert_eq!(worked.hours(), u64::MAX as f64);
        assert_eq!(worked.minutes(), u64::MAX);
        assert!(worked.total_seconds().is_finite());
    }
}
