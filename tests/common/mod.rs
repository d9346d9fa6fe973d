use std::cell::RefCell;
use std::io::Cursor;

use month_hours::input::{Config, ConfigBuilder};
use month_hours::time::{Date, HolidayInterval, WorkingDaysPerWeek};
use month_hours::{HolidayQuery, HolidaySource, HolidaySourceError, Report};

/// Returns a fixed list of holidays and remembers what was asked for.
#[derive(Debug, Default)]
pub struct FixedHolidays {
    holidays: Vec<HolidayInterval>,
    queries: RefCell<Vec<HolidayQuery>>,
}

impl FixedHolidays {
    pub fn new(holidays: impl IntoIterator<Item = HolidayInterval>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
            queries: RefCell::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn queries(&self) -> Vec<HolidayQuery> {
        self.queries.borrow().clone()
    }
}

impl HolidaySource for FixedHolidays {
    fn holidays(&self, query: &HolidayQuery) -> Result<Vec<HolidayInterval>, HolidaySourceError> {
        self.queries.borrow_mut().push(query.clone());
        Ok(self.holidays.clone())
    }
}

/// Behaves like a server that does not respond with 200 OK.
#[derive(Debug)]
pub struct FailingHolidays {
    pub url: &'static str,
    pub status: i32,
}

impl HolidaySource for FailingHolidays {
    fn holidays(&self, _: &HolidayQuery) -> Result<Vec<HolidayInterval>, HolidaySourceError> {
        Err(HolidaySourceError::Status {
            url: self.url.to_string(),
            status: self.status,
        })
    }
}

#[must_use]
pub fn make_config(working_days: u8) -> Config {
    ConfigBuilder::new(
        "2024-01-01".parse().unwrap(),
        "2024-12-31".parse().unwrap(),
        "CZ",
        WorkingDaysPerWeek::new(working_days).expect("working days should be valid"),
    )
    .build()
    .expect("config should be valid")
}

/// Runs the whole program with `input` as stdin and returns the report and stdout.
pub fn run(
    config: &Config,
    source: &impl HolidaySource,
    today: Date,
    input: &str,
) -> (anyhow::Result<Report>, String) {
    let mut output = Vec::new();
    let result = month_hours::run(
        config,
        source,
        today,
        Cursor::new(input.as_bytes()),
        &mut output,
    );

    (
        result,
        String::from_utf8(output).expect("output should be valid utf-8"),
    )
}
