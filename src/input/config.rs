use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::input::toml_input::ConfigFile;
use crate::time::{Date, Month, WorkingDaysPerWeek};
use crate::utils;

pub const DEFAULT_HOLIDAY_API: &str = "https://openholidaysapi.org/PublicHolidays";
pub const DEFAULT_COUNTRY_CODE: &str = "CZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    start_date: Date,
    end_date: Date,
    country_code: String,
    language_code: String,
    working_days_per_week: WorkingDaysPerWeek,
    holiday_api: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the country code must not be empty")]
    EmptyCountryCode,
    #[error("the start date {start} is after the end date {end}")]
    InvertedRange { start: Date, end: Date },
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    start_date: Date,
    end_date: Date,
    country_code: String,
    language_code: Option<String>,
    working_days_per_week: WorkingDaysPerWeek,
    holiday_api: Option<String>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new(
        start_date: Date,
        end_date: Date,
        country_code: impl Into<String>,
        working_days_per_week: WorkingDaysPerWeek,
    ) -> Self {
        Self {
            start_date,
            end_date,
            country_code: country_code.into(),
            language_code: None,
            working_days_per_week,
            holiday_api: None,
        }
    }

    /// The language of the holiday names, defaults to the country code.
    pub fn language_code(&mut self, language_code: impl Into<String>) -> &mut Self {
        self.language_code = Some(language_code.into());
        self
    }

    pub fn holiday_api(&mut self, holiday_api: impl Into<String>) -> &mut Self {
        self.holiday_api = Some(holiday_api.into());
        self
    }

    pub fn build(&self) -> Result<Config, ConfigError> {
        let country_code = self.country_code.trim();
        if country_code.is_empty() {
            return Err(ConfigError::EmptyCountryCode);
        }

        if self.start_date > self.end_date {
            return Err(ConfigError::InvertedRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(Config {
            start_date: self.start_date,
            end_date: self.end_date,
            country_code: country_code.to_string(),
            language_code: self
                .language_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .unwrap_or(country_code)
                .to_string(),
            working_days_per_week: self.working_days_per_week,
            holiday_api: self
                .holiday_api
                .clone()
                .unwrap_or_else(|| DEFAULT_HOLIDAY_API.to_string()),
        })
    }
}

impl Config {
    /// The configuration used when no file is given: a 4-day week in the
    /// czech republic, with holidays for the whole year of `today`.
    #[must_use]
    pub fn default_for(today: Date) -> ConfigBuilder {
        ConfigBuilder::new(
            Date::first_day(today.year(), Month::January),
            Date::last_day(today.year(), Month::December),
            DEFAULT_COUNTRY_CODE,
            WorkingDaysPerWeek::FOUR_DAY_WEEK,
        )
    }

    pub fn try_from_toml(toml: &str) -> anyhow::Result<ConfigBuilder> {
        let file: ConfigFile = toml::from_str(toml)?;

        Ok(ConfigBuilder::from(file))
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let path = path.as_ref();
        let contents = utils::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;

        Self::try_from_toml(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn working_days_per_week(&self) -> WorkingDaysPerWeek {
        self.working_days_per_week
    }

    pub fn holiday_api(&self) -> &str {
        &self.holiday_api
    }

    /// Returns `true` if holidays are requested for the `date`.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
