use core::fmt;
use core::iter;
use core::str::FromStr;

use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day as a date in the month.
    ///
    /// This is the day before the first day of the following month,
    /// which for december is in the next year.
    #[must_use]
    pub fn last_day(year: Year, month: Month) -> Self {
        let next_year = match month {
            Month::December => year.next(),
            _ => year,
        };

        Self::first_day(next_year, month.next()).prev_day()
    }

    /// Returns the same date with the day of the month replaced.
    pub fn with_day(self, day: usize) -> Result<Self, InvalidDate> {
        Self::new(self.year, self.month, day)
    }
}

impl Date {
    pub fn week_day(&self) -> WeekDay {
        self.year.week_day(self.month, self.day)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub fn next_day(self) -> Self {
        if self.day < self.year.number_of_days_in_month(self.month) {
            return Self {
                day: self.day + 1,
                ..self
            };
        }

        match self.month {
            Month::December => Self::first_day(self.year.next(), Month::January),
            month => Self::first_day(self.year, month.next()),
        }
    }

    #[must_use]
    pub fn prev_day(self) -> Self {
        if self.day > 1 {
            return Self {
                day: self.day - 1,
                ..self
            };
        }

        let year = match self.month {
            Month::January => self.year.prev(),
            _ => self.year,
        };
        let month = self.month.prev();

        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    /// Iterates over all dates from `self` through `end` (inclusive).
    ///
    /// The iterator is empty if `end` is before `self`.
    pub fn iter_through(self, end: Self) -> impl Iterator<Item = Self> + Clone {
        iter::successors(Some(self), |date| Some(date.next_day()))
            .take_while(move |date| *date <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str, component: &str) -> Result<usize, InvalidDate> {
    component
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(string, year)?);
            let month = Month::try_from(parse_or_err(string, month)?).map_err(|_| {
                InvalidDate::ParseDateError {
                    input: string.to_string(),
                }
            })?;
            let day = parse_or_err(string, day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<toml::value::Date> for Date {
    type Error = InvalidDate;

    fn try_from(date: toml::value::Date) -> Result<Self, Self::Error> {
        let month =
            Month::try_from(date.month as usize).map_err(|_| InvalidDate::ParseDateError {
                input: date.to_string(),
            })?;

        Self::new(Year::new(date.year as usize), month, date.day as usize)
    }
}
