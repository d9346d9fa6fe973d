use derive_more::Display;
use serde::Deserialize;
use thiserror::Error;

use crate::time::{is_holiday, Date, HolidayInterval, Month, WeekDay, Year};

/// How many days of a week, counted from monday, are working days.
///
/// A company with a 4-day week works monday through thursday, so
/// fridays are never counted, even if they are not a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Display)]
#[serde(try_from = "u8")]
#[display("{_0}")]
pub struct WorkingDaysPerWeek(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a valid number of working days per week, expected a number from 1 to 7")]
pub struct InvalidWorkingDays(u8);

impl WorkingDaysPerWeek {
    pub const FIVE_DAY_WEEK: Self = Self(5);
    pub const FOUR_DAY_WEEK: Self = Self(4);

    pub const fn new(days: u8) -> Result<Self, InvalidWorkingDays> {
        if days == 0 || days > 7 {
            return Err(InvalidWorkingDays(days));
        }

        Ok(Self(days))
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the `week_day` is one of the working days.
    #[must_use]
    pub const fn includes(&self, week_day: WeekDay) -> bool {
        week_day.index() < self.0 as usize
    }
}

impl TryFrom<u8> for WorkingDaysPerWeek {
    type Error = InvalidWorkingDays;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Counts the working days in the `month` of the `year`.
///
/// A day is a working day if it is one of the `working_days` of the week
/// and not inside of one of the `holidays`. Malformed holidays are ignored.
///
/// With `end_day` only the days up to and including that day of the month
/// are counted. Days past the end of the month are clamped to the last day.
#[must_use]
pub fn count_working_days(
    year: Year,
    month: Month,
    holidays: &[HolidayInterval],
    working_days: WorkingDaysPerWeek,
    end_day: Option<usize>,
) -> usize {
    let first_day = Date::first_day(year, month);
    let last_day = Date::last_day(year, month);

    let end = match end_day {
        None => last_day,
        Some(0) => return 0,
        Some(day) => first_day.with_day(day).unwrap_or(last_day),
    };

    first_day
        .iter_through(end)
        .filter(|date| working_days.includes(date.week_day()))
        .filter(|date| !is_holiday(*date, holidays))
        .count()
}
