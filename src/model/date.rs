//! Strict `YYYY-MM-DD` deserialization for calendar dates.
//!
//! chrono's own `NaiveDate` deserializer also accepts single-digit months and days,
//! surrounding whitespace and signed years. These helpers accept only the
//! ten-character ISO 8601 calendar date form.

use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `value` as a `YYYY-MM-DD` date.
pub fn parse(value: &str) -> Result<NaiveDate, String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(format!("invalid date '{}', expected YYYY-MM-DD", value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{}': {}", value, e))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(D::Error::custom)
}

/// Optional variant; `null` or an absent field (with `#[serde(default)]`) is `None`.
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| parse(&value).map_err(D::Error::custom))
            .transpose()
    }
}
