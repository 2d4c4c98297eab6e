//! # Commit Timestamps
//!
//! Wall-clock time recorded in transaction effects. Always UTC, always
//! whole seconds; the JSON form is `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! Timestamps are informational only. They never feed a digest or an id,
//! so two ledgers replaying the same transactions derive the same objects
//! regardless of when they ran.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UTC instant with seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Wrap `dt`, dropping its sub-second part.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// RFC 3339 rendering with a `Z` suffix.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if !raw.ends_with('Z') {
            return Err(serde::de::Error::custom(format!(
                "timestamp must be UTC with a Z suffix: {raw:?}"
            )));
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Self::from_utc(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}
