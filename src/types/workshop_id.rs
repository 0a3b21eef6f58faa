use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

lazy_static! {
    static ref WORKSHOP_URL: Regex = Regex::new(
        r"https?://steamcommunity\.com/(?:workshop|sharedfiles)/filedetails/\?id=([0-9]+)"
    )
    .unwrap();
    static ref DIGITS: Regex = Regex::new(r"([0-9]+)").unwrap();
}

/// Numeric key of a published Steam Workshop item.
///
/// Always a non-empty run of ASCII digits. "No identifier" is spelled
/// `Option::None` rather than an empty id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkshopId(String);

impl WorkshopId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkshopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WorkshopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a workshop id")]
pub struct InvalidWorkshopId(pub String);

impl FromStr for WorkshopId {
    type Err = InvalidWorkshopId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidWorkshopId(s.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for WorkshopId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Pull a workshop id out of free-form input.
///
/// A workshop page URL wins over any other digits in the string; failing
/// that, the first run of digits is taken. Returns `None` when the input
/// holds no digits at all.
pub fn find_workshop_id(input: &str) -> Option<WorkshopId> {
    WORKSHOP_URL
        .captures(input)
        .or_else(|| DIGITS.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| WorkshopId(m.as_str().to_string()))
}
