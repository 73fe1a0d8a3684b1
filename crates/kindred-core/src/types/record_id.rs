//! Record id type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Prefix marking a record as authored by the local content store.
const OWNED_PREFIX: &str = "user-";

/// A validated record identifier.
///
/// Record ids are unique within their domain. Ids carrying the `user-`
/// prefix were minted by the local content store and mark the record as
/// owned (editable and deletable) by this client; all other ids belong to
/// the remote source. The two namespaces do not overlap by construction.
///
/// # Example
///
/// ```
/// use kindred_core::RecordId;
///
/// let local = RecordId::new("user-1712345678-3f9a1c").unwrap();
/// assert!(local.is_owned());
///
/// let remote = RecordId::new("r1").unwrap();
/// assert!(!remote.is_owned());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new record id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or contains surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();

        if s.is_empty() {
            return Err(InvalidInputError::RecordId {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.trim() != s {
            return Err(InvalidInputError::RecordId {
                value: s.to_string(),
                reason: "must not contain surrounding whitespace".to_string(),
            }
            .into());
        }

        Ok(Self(s.to_string()))
    }

    /// Build a locally-owned id from its timestamp and random components.
    pub fn owned(millis: u64, suffix: &str) -> Self {
        Self(format!("{}{}-{}", OWNED_PREFIX, millis, suffix))
    }

    /// Returns true iff this id was minted by the local content store.
    pub fn is_owned(&self) -> bool {
        self.0.starts_with(OWNED_PREFIX)
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
