use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const fn new(number: usize) -> Self {
        Self::months()[number - 1]
    }

    pub const fn months() -> [Self; 12] {
        [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self::months()[self.as_usize() % 12]
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self::months()[(self.as_usize() + 10) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_usize().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Error)]
#[error("invalid month number")]
pub struct InvalidNumberForMonth;

impl TryFrom<usize> for Month {
    type Error = InvalidNumberForMonth;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::months()
            .into_iter()
            .find(|month| *month as usize == value)
            .ok_or(InvalidNumberForMonth)
    }
}
