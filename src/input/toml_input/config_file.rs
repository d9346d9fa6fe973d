use serde::Deserialize;

use crate::input::ConfigBuilder;
use crate::time::{Date, WorkingDaysPerWeek};
use crate::utils;

/// The contents of the configuration file.
///
/// ```toml
/// start_date = 2024-01-01
/// end_date = 2024-12-31
/// country_code = "CZ"
/// working_days_per_week = 4
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(deserialize_with = "utils::serde_toml_local_date::deserialize")]
    start_date: Date,
    #[serde(deserialize_with = "utils::serde_toml_local_date::deserialize")]
    end_date: Date,
    country_code: String,
    language_code: Option<String>,
    working_days_per_week: WorkingDaysPerWeek,
    holiday_api: Option<String>,
}

impl ConfigFile {
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn working_days_per_week(&self) -> WorkingDaysPerWeek {
        self.working_days_per_week
    }

    pub fn holiday_api(&self) -> Option<&str> {
        self.holiday_api.as_deref()
    }
}

impl From<ConfigFile> for ConfigBuilder {
    fn from(file: ConfigFile) -> Self {
        let mut builder = ConfigBuilder::new(
            file.start_date,
            file.end_date,
            file.country_code,
            file.working_days_per_week,
        );

        if let Some(language_code) = file.language_code {
            builder.language_code(language_code);
        }

        if let Some(holiday_api) = file.holiday_api {
            builder.holiday_api(holiday_api);
        }

        builder
    }
}
