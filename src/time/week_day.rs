use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// The position of the day in a week that starts on monday.
    ///
    /// Monday is `0` and Sunday is `6`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.as_usize() - 1
    }

    #[must_use]
    pub const fn week() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

impl Add<usize> for WeekDay {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::week()[(self.index() + rhs % 7) % 7]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_starts_on_monday() {
        assert_eq!(WeekDay::Monday.index(), 0);
        assert_eq!(WeekDay::Thursday.index(), 3);
        assert_eq!(WeekDay::Sunday.index(), 6);
    }

    #[test]
    fn test_add_wraps_around() {
        assert_eq!(WeekDay::Saturday + 0, WeekDay::Saturday);
        assert_eq!(WeekDay::Saturday + 2, WeekDay::Monday);
        assert_eq!(WeekDay::Sunday + 1, WeekDay::Monday);
        assert_eq!(WeekDay::Monday + 13, WeekDay::Sunday);
    }
}
