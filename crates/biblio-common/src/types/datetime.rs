use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
use std::fmt;
use std::str::FromStr;

/// Layouts with a numeric offset that RFC 3339 rejects, e.g. `+0000`.
const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Layouts accepted for timestamps that carry no zone information.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Length of a bare `YYYY-MM-DD` date.
const DATE_LEN: usize = 10;

/// Catalog timestamp, always held in UTC
///
/// The BiblioCommons API is not consistent about how it writes dates. This type accepts:
/// - RFC 3339 with `Z` or a numeric offset, e.g. `"2012-03-01T14:22:05-05:00"`
/// - a naive date-time with `T` or a space separator, e.g. `"2012-03-01 14:22:05"`
/// - a bare date, e.g. `"2012-03-01"` (midnight)
///
/// Offsets are folded into UTC on parse, and input without zone information is taken to
/// already be UTC. Serialization always emits RFC 3339 with a trailing `Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Datetime {
    dt: DateTime<Utc>,
}

impl Datetime {
    /// Wraps an existing UTC timestamp.
    pub fn new(dt: DateTime<Utc>) -> Self {
        Self { dt }
    }

    /// The underlying UTC timestamp.
    #[inline]
    #[must_use]
    pub fn as_utc(&self) -> &DateTime<Utc> {
        &self.dt
    }

    /// RFC 3339 rendering in UTC, with sub-second digits only when present.
    pub fn to_rfc3339(&self) -> String {
        self.dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl FromStr for Datetime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rfc3339_err = match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => return Ok(dt.into()),
            Err(e) => e,
        };
        for format in ZONED_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, format) {
                return Ok(dt.into());
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(naive.and_utc().into());
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc().into()),
            // Anything longer than a date was meant as a date-time.
            Err(_) if s.len() > DATE_LEN => Err(rfc3339_err),
            Err(e) => Err(e),
        }
    }
}

impl<'de> Deserialize<'de> for Datetime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&value).map_err(D::Error::custom)
    }
}

impl Serialize for Datetime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl AsRef<DateTime<Utc>> for Datetime {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.dt
    }
}

impl From<DateTime<Utc>> for Datetime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt)
    }
}

impl From<DateTime<FixedOffset>> for Datetime {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::new(dt.with_timezone(&Utc))
    }
}

impl From<Datetime> for DateTime<Utc> {
    fn from(value: Datetime) -> Self {
        value.dt
    }
}

impl TryFrom<&str> for Datetime {
    type Error = chrono::ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
