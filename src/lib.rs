mod holiday_source;
mod report;
mod utils;

pub mod input;
pub mod time;

use std::io::{BufRead, Write};

use log::{info, warn};

pub use crate::holiday_source::*;
pub use crate::report::*;

use crate::input::{Config, Prompt};
use crate::time::{Date, HolidayInterval, WorkedTime};

/// Calculates the report for the month of `today`.
#[must_use]
pub fn calculate_report(
    config: &Config,
    holidays: &[HolidayInterval],
    worked: WorkedTime,
    today: Date,
) -> Report {
    if !config.covers(today) {
        warn!(
            "{} is outside of {} - {}, holidays will be missing",
            today,
            config.start_date(),
            config.end_date()
        );
    }

    let stats = MonthWorkStats::for_month_of(today, holidays, config.working_days_per_week());
    let report = Report::calculate(worked, stats);

    info!("remaining: {}", report.remaining());

    report
}

/// Asks for the worked time, fetches the holidays and writes the report to `output`.
///
/// If the holidays can not be fetched, only the failing request is written
/// and no report is generated.
pub fn run<S, R, W>(
    config: &Config,
    source: &S,
    today: Date,
    input: R,
    mut output: W,
) -> anyhow::Result<Report>
where
    S: HolidaySource + ?Sized,
    R: BufRead,
    W: Write,
{
    let worked = Prompt::new(input, &mut output).read_worked_time()?;
    info!("worked: {:?}", worked);

    let holidays = match source.holidays(&HolidayQuery::from(config)) {
        Ok(holidays) => holidays,
        Err(error) => {
            writeln!(output, "{}", error)?;
            return Err(error.into());
        }
    };

    let report = calculate_report(config, &holidays, worked, today);
    write!(output, "{}", report)?;

    Ok(report)
}
