use std::fs;
use std::io;
use std::path::Path;

use log::trace;

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub mod serde_toml_local_date {
    use core::fmt;

    use toml::value::{Date, Datetime};

    use serde::de::{self, Deserialize};

    // NOTE: `toml::value::Datetime` is used, because
    // `toml::value::Date` does not implement `Deserialize`

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: de::Deserializer<'de>,
        T: TryFrom<Date>,
        T::Error: fmt::Display,
    {
        let date = Datetime::deserialize(deserializer)?
            .date
            .ok_or_else(|| de::Error::custom("expected a date"))?;

        T::try_from(date).map_err(de::Error::custom)
    }
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}
