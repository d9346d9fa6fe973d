use core::fmt;

use log::debug;

use crate::time::{
    count_working_days, working_hours, Date, HolidayInterval, WorkedTime, WorkingDaysPerWeek,
    HOURS_PER_DAY,
};

/// The working days of a month, both in total and up to some day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthWorkStats {
    total_working_days: f64,
    total_working_hours: f64,
    elapsed_working_days: f64,
}

impl MonthWorkStats {
    #[must_use]
    pub fn new(total_working_days: usize, elapsed_working_days: usize) -> Self {
        let total_working_days = total_working_days as f64;

        Self {
            total_working_days,
            total_working_hours: working_hours(total_working_days),
            elapsed_working_days: elapsed_working_days as f64,
        }
    }

    /// Counts the working days of the month of `today`, the elapsed
    /// working days include `today`.
    #[must_use]
    pub fn for_month_of(
        today: Date,
        holidays: &[HolidayInterval],
        working_days: WorkingDaysPerWeek,
    ) -> Self {
        let total = count_working_days(today.year(), today.month(), holidays, working_days, None);
        let elapsed = count_working_days(
            today.year(),
            today.month(),
            holidays,
            working_days,
            Some(today.day()),
        );

        debug!(
            "{:04}-{:02} has {} working days, {} of them until {}",
            today.year().as_usize(),
            today.month(),
            total,
            elapsed,
            today
        );

        Self::new(total, elapsed)
    }

    pub const fn total_working_days(&self) -> f64 {
        self.total_working_days
    }

    pub const fn total_working_hours(&self) -> f64 {
        self.total_working_hours
    }

    pub const fn elapsed_working_days(&self) -> f64 {
        self.elapsed_working_days
    }
}

/// The time that still has to be worked in the month.
///
/// The minutes and seconds are what remains of the fractional hours,
/// truncated towards zero, `167.9375` hours are `167:56:15`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemainingTime {
    days: f64,
    hours: f64,
    minutes: i64,
    seconds: i64,
}

impl RemainingTime {
    pub const fn days(&self) -> f64 {
        self.days
    }

    pub const fn hours(&self) -> f64 {
        self.hours
    }

    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    pub const fn seconds(&self) -> i64 {
        self.seconds
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}",
            self.hours.trunc(),
            self.minutes,
            self.seconds
        )
    }
}

#[must_use]
pub fn remaining_time(
    total_working_days: f64,
    total_working_hours: f64,
    worked_days: f64,
) -> RemainingTime {
    let days = total_working_days - worked_days;
    let hours = total_working_hours - working_hours(worked_days);
    let minutes = hours.fract() * 60.0;
    let seconds = minutes.fract() * 60.0;

    RemainingTime {
        days,
        hours,
        minutes: minutes.trunc() as i64,
        seconds: seconds.trunc() as i64,
    }
}

/// The hours worked more (positive) or less (negative) than expected
/// after `elapsed_working_days`.
#[must_use]
pub fn banked_hours(worked_hours: f64, elapsed_working_days: f64) -> f64 {
    worked_hours - elapsed_working_days * HOURS_PER_DAY as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    worked: WorkedTime,
    stats: MonthWorkStats,
    worked_days: f64,
    remaining: RemainingTime,
    banked_hours: f64,
}

impl Report {
    #[must_use]
    pub fn calculate(worked: WorkedTime, stats: MonthWorkStats) -> Self {
        let worked_days = worked.as_days();

        Self {
            worked,
            stats,
            worked_days,
            remaining: remaining_time(
                stats.total_working_days(),
                stats.total_working_hours(),
                worked_days,
            ),
            banked_hours: banked_hours(worked.as_hours(), stats.elapsed_working_days()),
        }
    }

    pub const fn worked(&self) -> &WorkedTime {
        &self.worked
    }

    pub const fn stats(&self) -> &MonthWorkStats {
        &self.stats
    }

    pub const fn worked_days(&self) -> f64 {
        self.worked_days
    }

    pub const fn remaining(&self) -> &RemainingTime {
        &self.remaining
    }

    pub const fn banked_hours(&self) -> f64 {
        self.banked_hours
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "You worked for {} HOURS | {} MINUTES | {} SECONDS \n",
            self.worked.hours(),
            self.worked.minutes(),
            self.worked.seconds()
        )?;
        writeln!(
            f,
            "In the current month, there are -> {} DAYS | {} HOURS",
            self.stats.total_working_days(),
            self.stats.total_working_hours()
        )?;
        writeln!(
            f,
            "You need to work for            -> {:.2} DAYS | {:.2} HOURS",
            self.remaining.days(),
            self.remaining.hours()
        )?;
        writeln!(
            f,
            "Your banked hours are           -> {:.2} HOURS",
            self.banked_hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;
    use crate::time::{worked_days, Month, Year};

    #[test]
    fn test_remaining_time() {
        let remaining = remaining_time(22.0, 176.0, worked_days(8, 0, 0));

        assert_eq!(remaining.days(), 21.0);
        assert_eq!(remaining.hours(), 168.0);
        assert_eq!(remaining.minutes(), 0);
        assert_eq!(remaining.seconds(), 0);
    }

    #[test]
    fn test_remaining_time_cascades() {
        // 225 seconds are 3 minutes and 45 seconds
        let remaining = remaining_time(22.0, 176.0, worked_days(0, 0, 225));

        assert_eq!(remaining.hours(), 175.9375);
        assert_eq!(remaining.minutes(), 56);
        assert_eq!(remaining.seconds(), 15);
        assert_eq!(remaining.to_string(), "175:56:15");

        let remaining = remaining_time(22.0, 176.0, worked_days(8, 30, 0));
        assert_eq!(remaining.days(), 20.9375);
        assert_eq!(remaining.hours(), 167.5);
        assert_eq!(remaining.minutes(), 30);
        assert_eq!(remaining.seconds(), 0);
    }

    #[test]
    fn test_remaining_time_overtime() {
        let remaining = remaining_time(1.0, 8.0, worked_days(9, 30, 0));

        assert_eq!(remaining.hours(), -1.5);
        assert_eq!(remaining.minutes(), -30);
        assert_eq!(remaining.seconds(), 0);
    }

    #[test]
    fn test_banked_hours() {
        assert_eq!(banked_hours(64.0, 8.0), 0.0);
        assert_eq!(banked_hours(60.5, 8.0), -3.5);
        assert_eq!(banked_hours(70.0, 8.0), 6.0);
        assert_eq!(banked_hours(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_month_work_stats() {
        let stats = MonthWorkStats::for_month_of(
            date!(2024:04:10),
            &[],
            WorkingDaysPerWeek::FIVE_DAY_WEEK,
        );

        assert_eq!(stats, MonthWorkStats::new(22, 8));
        assert_eq!(stats.total_working_days(), 22.0);
        assert_eq!(stats.total_working_hours(), 176.0);
        assert_eq!(stats.elapsed_working_days(), 8.0);
    }

    #[test]
    fn test_month_work_stats_on_first_day() {
        let holidays = [HolidayInterval::single_day(date!(2024:04:01))];
        let today = Date::first_day(Year::new(2024), Month::April);

        assert_eq!(
            MonthWorkStats::for_month_of(today, &[], WorkingDaysPerWeek::FIVE_DAY_WEEK)
                .elapsed_working_days(),
            1.0
        );
        assert_eq!(
            MonthWorkStats::for_month_of(today, &holidays, WorkingDaysPerWeek::FIVE_DAY_WEEK)
                .elapsed_working_days(),
            0.0
        );
    }

    #[test]
    fn test_report() {
        let report = Report::calculate(WorkedTime::new(8, 0, 0), MonthWorkStats::new(22, 1));

        assert_eq!(report.worked_days(), 1.0);
        assert_eq!(report.remaining().days(), 21.0);
        assert_eq!(report.remaining().hours(), 168.0);
        assert_eq!(report.banked_hours(), 0.0);
    }

    #[test]
    fn test_report_banked_hours_include_minutes() {
        let report = Report::calculate(WorkedTime::new(60, 30, 0), MonthWorkStats::new(22, 8));

        assert_eq!(report.banked_hours(), -3.5);
    }

    #[test]
    fn test_display() {
        let mut worked = WorkedTime::new(8, 30, 0);
        worked.add_hours(1.5);

        let report = Report::calculate(worked, MonthWorkStats::new(18, 2));

        assert_eq!(
            report.to_string(),
            concat!(
                "You worked for 9.5 HOURS | 30 MINUTES | 0 SECONDS \n",
                "\n",
                "In the current month, there are -> 18 DAYS | 144 HOURS\n",
                "You need to work for            -> 16.75 DAYS | 134.00 HOURS\n",
                "Your banked hours are           -> -6.00 HOURS\n",
            )
        );
    }
}
