use log::{debug, info, trace, warn};
use thiserror::Error;

use crate::input::Config;
use crate::time::{Date, HolidayInterval};

/// Which holidays should be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    country_code: String,
    language_code: String,
    valid_from: Date,
    valid_to: Date,
}

impl HolidayQuery {
    #[must_use]
    pub fn new(
        country_code: impl Into<String>,
        language_code: impl Into<String>,
        valid_from: Date,
        valid_to: Date,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            language_code: language_code.into(),
            valid_from,
            valid_to,
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn valid_from(&self) -> Date {
        self.valid_from
    }

    pub fn valid_to(&self) -> Date {
        self.valid_to
    }
}

impl From<&Config> for HolidayQuery {
    fn from(config: &Config) -> Self {
        Self::new(
            config.country_code(),
            config.language_code(),
            config.start_date(),
            config.end_date(),
        )
    }
}

#[derive(Debug, Error)]
pub enum HolidaySourceError {
    #[error("Failed to get data from {url}")]
    Request {
        url: String,
        #[source]
        source: minreq::Error,
    },
    #[error("Failed to get data from {url}")]
    Status { url: String, status: i32 },
    #[error("Failed to get data from {url}")]
    Body {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HolidaySourceError {
    /// The target of the failed request.
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => url,
        }
    }
}

/// Something that knows the public holidays of a country.
pub trait HolidaySource {
    fn holidays(&self, query: &HolidayQuery) -> Result<Vec<HolidayInterval>, HolidaySourceError>;
}

/// The public holidays from <https://www.openholidaysapi.org/>.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenHolidaysApi {
    base_url: String,
}

impl OpenHolidaysApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url(&self, query: &HolidayQuery) -> String {
        format!(
            "{}?countryIsoCode={}&languageIsoCode={}&validFrom={}&validTo={}",
            self.base_url,
            query.country_code(),
            query.language_code(),
            query.valid_from(),
            query.valid_to()
        )
    }
}

impl From<&Config> for OpenHolidaysApi {
    fn from(config: &Config) -> Self {
        Self::new(config.holiday_api())
    }
}

/// Parses the body of a holiday response, a json array of holidays.
pub fn parse_holidays(body: &[u8]) -> Result<Vec<HolidayInterval>, serde_json::Error> {
    let holidays: Vec<HolidayInterval> = serde_json::from_slice(body)?;

    let malformed = holidays.iter().filter(|holiday| holiday.is_malformed()).count();
    if malformed > 0 {
        warn!(
            "ignoring {} of {} holidays without a valid start and end date",
            malformed,
            holidays.len()
        );
    }

    Ok(holidays)
}

impl HolidaySource for OpenHolidaysApi {
    fn holidays(&self, query: &HolidayQuery) -> Result<Vec<HolidayInterval>, HolidaySourceError> {
        let url = self.url(query);
        trace!("requesting holidays from: {}", url);

        let response = minreq::get(&url)
            .with_header("accept", "application/json")
            .send()
            .map_err(|source| HolidaySourceError::Request {
                url: url.clone(),
                source,
            })?;

        if response.status_code != 200 {
            debug!(
                "holiday api responded with {} {}",
                response.status_code, response.reason_phrase
            );
            return Err(HolidaySourceError::Status {
                url,
                status: response.status_code,
            });
        }

        let holidays = parse_holidays(response.as_bytes())
            .map_err(|source| HolidaySourceError::Body { url, source })?;

        info!("received {} holidays", holidays.len());
        for holiday in &holidays {
            if let (Some(start), Some(end)) = (holiday.start(), holiday.end()) {
                trace!("{} - {}: {}", start, end, holiday.name().unwrap_or("unnamed"));
            }
        }

        Ok(holidays)
    }
}
