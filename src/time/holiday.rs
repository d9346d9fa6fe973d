use serde::Deserialize;
use serde_json::Value;

use crate::time::Date;

/// An inclusive range of dates on which nobody is expected to work.
///
/// Entries with a missing or unreadable bound are kept as a malformed
/// interval that does not contain any date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct HolidayInterval {
    bounds: Option<(Date, Date)>,
    name: Option<String>,
}

impl HolidayInterval {
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self {
            bounds: Some((start, end)),
            name: None,
        }
    }

    #[must_use]
    pub const fn single_day(date: Date) -> Self {
        Self::new(date, date)
    }

    #[must_use]
    pub const fn malformed() -> Self {
        Self {
            bounds: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn start(&self) -> Option<Date> {
        self.bounds.map(|(start, _)| start)
    }

    pub fn end(&self) -> Option<Date> {
        self.bounds.map(|(_, end)| end)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        self.bounds.is_none()
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        match self.bounds {
            Some((start, end)) => start <= date && date <= end,
            None => false,
        }
    }
}

/// Returns `true` when any of the `holidays` contains the `date`.
#[must_use]
pub fn is_holiday(date: Date, holidays: &[HolidayInterval]) -> bool {
    holidays.iter().any(|holiday| holiday.contains(date))
}

/// Reads the calendar date of a `YYYY-MM-DD` string, ignoring a
/// trailing time of day like in `2024-01-01T00:00:00`.
fn date_of(value: Option<&Value>) -> Option<Date> {
    let text = value?.as_str()?.trim();
    let date = text.split_once('T').map_or(text, |(date, _)| date);

    date.parse().ok()
}

/// The api returns a list of translations, like `[{"language": "CZ", "text": "Nový rok"}]`.
fn name_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(name) => Some(name.clone()),
        Value::Array(names) => names
            .iter()
            .find_map(|name| name.get("text")?.as_str())
            .map(str::to_string),
        _ => None,
    }
}

impl From<Value> for HolidayInterval {
    fn from(value: Value) -> Self {
        let start = date_of(value.get("startDate"));
        let end = date_of(value.get("endDate"));

        Self {
            bounds: start.zip(end),
            name: name_of(value.get("name")),
        }
    }
}
