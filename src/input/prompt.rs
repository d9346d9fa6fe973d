use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::time::{parse_worked_time, WorkedTime};

pub const WORKED_TIME_PROMPT: &str = "Enter worked hours (HOURS:MINUTES:SECONDS): ";
pub const ADDITIONAL_TIME_PROMPT: &str =
    "Enter additional hours (Medical Leave / Vacation) [HOURS:MINUTES or HOURS | ENTER to skip]: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter the hours in the correct format.";

/// The result of reading a single line from the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptState<T> {
    AwaitingInput,
    Accepted(T),
    Skipped,
    Rejected(String),
}

/// Leave or vacation time that counts as worked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdditionalTime {
    /// Entered as `HOURS:MINUTES`, seconds are ignored.
    Clock { hours: u64, minutes: u64 },
    /// Entered as a decimal number of hours.
    Hours(f64),
}

impl AdditionalTime {
    pub fn add_to(self, worked: &mut WorkedTime) {
        match self {
            Self::Clock { hours, minutes } => worked.add_clock(hours, minutes),
            Self::Hours(hours) => worked.add_hours(hours),
        }
    }
}

#[must_use]
pub fn classify_worked_time(line: &str) -> PromptState<WorkedTime> {
    match line.parse::<WorkedTime>() {
        Ok(worked) => PromptState::Accepted(worked),
        Err(error) => PromptState::Rejected(error.to_string()),
    }
}

#[must_use]
pub fn classify_additional_time(line: &str) -> PromptState<AdditionalTime> {
    let line = line.trim();

    if line.is_empty() || line == "0" {
        return PromptState::Skipped;
    }

    if line.contains(':') {
        return match parse_worked_time(line) {
            Ok((hours, minutes, _)) => PromptState::Accepted(AdditionalTime::Clock { hours, minutes }),
            Err(error) => PromptState::Rejected(error.to_string()),
        };
    }

    match line.parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours >= 0.0 => {
            PromptState::Accepted(AdditionalTime::Hours(hours))
        }
        Ok(hours) => PromptState::Rejected(format!("{} is not a valid number of hours", hours)),
        Err(error) => PromptState::Rejected(format!("\"{}\": {}", line, error)),
    }
}

/// Asks the user for the worked time on `output` and reads the answers from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns `None` once the input has been closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }

    /// Repeats the `prompt` until the answer is either accepted or skipped.
    fn ask<T>(
        &mut self,
        prompt: &str,
        classify: impl Fn(&str) -> PromptState<T>,
    ) -> io::Result<PromptState<T>> {
        let mut state = PromptState::AwaitingInput;

        loop {
            state = match state {
                PromptState::AwaitingInput => match self.read_line(prompt)? {
                    Some(line) => classify(&line),
                    None => PromptState::Skipped,
                },
                PromptState::Rejected(reason) => {
                    debug!("rejected input: {}", reason);
                    writeln!(self.output, "{}", INVALID_INPUT)?;
                    PromptState::AwaitingInput
                }
                done => return Ok(done),
            };
        }
    }

    pub fn worked_time(&mut self) -> anyhow::Result<WorkedTime> {
        match self.ask(WORKED_TIME_PROMPT, classify_worked_time)? {
            PromptState::Accepted(worked) => Ok(worked),
            _ => Err(anyhow::anyhow!("no worked hours have been entered")),
        }
    }

    /// Adds leave and vacation time to `worked` until the user skips.
    pub fn additional_time(&mut self, worked: &mut WorkedTime) -> io::Result<()> {
        while let PromptState::Accepted(additional) =
            self.ask(ADDITIONAL_TIME_PROMPT, classify_additional_time)?
        {
            info!("adding {:?}", additional);
            additional.add_to(worked);
        }

        Ok(())
    }

    /// Reads the worked time followed by any additional time.
    pub fn read_worked_time(&mut self) -> anyhow::Result<WorkedTime> {
        let mut worked = self.worked_time()?;
        self.additional_time(&mut worked)?;

        Ok(worked)
    }
}
