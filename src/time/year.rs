use derive_more::Display;

use crate::time::{Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// The week day of 0000-01-01, the earliest date that can be represented.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// The number of days in this year before the first day of `month`.
    #[must_use]
    const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;
        let mut current = 1;

        while current < month.as_usize() {
            result += self.number_of_days_in_month(Month::new(current));
            current += 1;
        }

        result
    }

    /// The number of days between 0000-01-01 and the first day of this year.
    #[must_use]
    pub(super) const fn days_since_base_date(&self) -> usize {
        // number of leap years in 0..self (year 0 is one)
        let leap_years = (self.0 + 3) / 4 - (self.0 + 99) / 100 + (self.0 + 399) / 400;

        self.0 * 365 + leap_years
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let days = self.days_since_base_date() + self.days_before_month(month) + day - 1;

        Self::BASE_WEEK_DAY + days
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
