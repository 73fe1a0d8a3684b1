//! Creation timestamp type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated creation timestamp.
///
/// Remote rows carry RFC 3339 strings while the local store historically
/// persisted date-only values, so parsing accepts both. The original string
/// is kept for display and serialization; ordering compares the parsed
/// instant.
///
/// # Example
///
/// ```
/// use kindred_core::Timestamp;
///
/// let a = Timestamp::parse("2024-01-15T10:00:00Z").unwrap();
/// let b = Timestamp::parse("2024-02-20").unwrap();
/// assert!(a < b);
/// assert_eq!(a.as_str(), "2024-01-15T10:00:00Z");
/// ```
#[derive(Clone, Debug)]
pub struct Timestamp {
    raw: String,
    instant: DateTime<Utc>,
}

impl Timestamp {
    /// Parse a timestamp string, validating that it names a point in time.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is neither an RFC 3339 timestamp nor
    /// a `YYYY-MM-DD` date.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();

        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self {
                raw: s.to_string(),
                instant: instant.with_timezone(&Utc),
            });
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let instant = date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc())
                .ok_or_else(|| InvalidInputError::Timestamp {
                    value: s.to_string(),
                    reason: "date out of range".to_string(),
                })?;
            return Ok(Self {
                raw: s.to_string(),
                instant,
            });
        }

        Err(InvalidInputError::Timestamp {
            value: s.to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DD".to_string(),
        }
        .into())
    }

    /// The current time.
    pub fn now() -> Self {
        let instant = Utc::now();
        Self {
            raw: instant.to_rfc3339(),
            instant,
        }
    }

    /// Returns the original timestamp string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(serde::de::Error::custom)
    }
}
