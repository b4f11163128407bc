//! Normalization of upstream EPG timestamps.
//!
//! The EPG API mixes several timestamp representations in its payloads: full RFC 3339
//! values with an offset, naive local date-times, bare dates, empty strings, and two
//! sentinel literals for "beginning of time" and "end of time" that carry a bogus
//! `+01:00` offset. [`Time`] absorbs all of them and stores one absolute instant expressed
//! in the [`REFERENCE_ZONE`]. The corrected sentinels stay in UTC so they render as the
//! literals they stand for.

use crate::error::{EpgError, Result};
use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat,
    TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;

/// Time zone used to resolve zone-naive upstream timestamps (Sweden)
pub const REFERENCE_ZONE: Tz = chrono_tz::Europe::Stockholm;

/// Upstream literal for "no start"; the offset is wrong and gets replaced with `+00:00`
const MIN_SENTINEL: &str = "0001-01-01T00:00:00+01:00";

/// Upstream literal for "no end"; the offset is wrong and gets replaced with `+00:00`
const MAX_SENTINEL: &str = "9999-12-31T23:59:59+01:00";

const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A normalized EPG timestamp.
///
/// Either the zero value (the upstream attribute was empty) or an absolute instant in the
/// reference zone. Values are only created by parsing upstream strings or via [`Time::zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Time(Option<Instant>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Instant {
    Zoned(DateTime<Tz>),
    /// "No start"/"no end" sentinel, pinned to UTC
    Sentinel(DateTime<Utc>),
}

impl Time {
    /// The absent/unknown timestamp
    pub const fn zero() -> Self {
        Self(None)
    }

    /// Parse an upstream timestamp, resolving naive values in [`REFERENCE_ZONE`]
    pub fn parse(value: &str) -> Result<Self> {
        Self::parse_in(value, REFERENCE_ZONE)
    }

    /// Parse an upstream timestamp, resolving naive values in `zone`
    pub fn parse_in(value: &str, zone: Tz) -> Result<Self> {
        if value.is_empty() {
            return Ok(Self::zero());
        }

        if value == MIN_SENTINEL || value == MAX_SENTINEL {
            let corrected = value.replace("+01:00", "+00:00");
            return DateTime::parse_from_rfc3339(&corrected)
                .map(|dt| Self(Some(Instant::Sentinel(dt.with_timezone(&Utc)))))
                .map_err(|e| EpgError::time_parse(value, e.to_string()));
        }

        let parsed = match value.len() {
            20 | 25 => parse_rfc3339(value, zone),
            19 => NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT)
                .map_err(|e| e.to_string())
                .and_then(|naive| resolve_local(naive, zone)),
            10 => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|e| e.to_string())
                .and_then(|d| resolve_local(d.and_time(NaiveTime::MIN), zone)),
            len => Err(format!("unrecognized timestamp format (length {})", len)),
        };

        parsed
            .map(|dt| Self(Some(Instant::Zoned(dt))))
            .map_err(|reason| EpgError::time_parse(value, reason))
    }

    /// Check if this is the absent timestamp
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// Check if this is one of the "no start"/"no end" sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self.0, Some(Instant::Sentinel(_)))
    }

    /// The instant in the reference zone, if present
    pub fn as_datetime(&self) -> Option<DateTime<Tz>> {
        match self.0? {
            Instant::Zoned(dt) => Some(dt),
            Instant::Sentinel(dt) => Some(dt.with_timezone(&REFERENCE_ZONE)),
        }
    }

    /// The instant in UTC, if present
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self.0? {
            Instant::Zoned(dt) => Some(dt.with_timezone(&Utc)),
            Instant::Sentinel(dt) => Some(dt),
        }
    }

    /// RFC 3339 rendering with the reference zone's offset at this instant.
    ///
    /// Sentinels render in UTC (`9999-12-31T23:59:59Z`).
    pub fn to_rfc3339(&self) -> Option<String> {
        match self.0? {
            Instant::Zoned(dt) => Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
            Instant::Sentinel(dt) => Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

fn parse_rfc3339(value: &str, zone: Tz) -> std::result::Result<DateTime<Tz>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&zone))
        .map_err(|e| e.to_string())
}

/// Resolve a wall-clock time in `zone`.
///
/// Ambiguous times (clocks turned back) take the earlier instant. Skipped times (clocks
/// turned forward) are read with the offset that was in effect before the transition.
fn resolve_local(naive: NaiveDateTime, zone: Tz) -> std::result::Result<DateTime<Tz>, String> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let day_before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or_else(|| "local time out of range".to_string())?;
            let offset = zone
                .from_local_datetime(&day_before)
                .earliest()
                .map(|dt| dt.offset().fix())
                .ok_or_else(|| format!("local time {} does not exist in {}", naive, zone))?;
            Ok(zone.from_utc_datetime(&(naive - offset)))
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FORMAT: &str = "%Y-%m-%d %H:%M:%S %z %Z";
        match &self.0 {
            Some(Instant::Zoned(dt)) => write!(f, "{}", dt.format(FORMAT)),
            Some(Instant::Sentinel(dt)) => write!(f, "{}", dt.format(FORMAT)),
            None => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Time::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_rfc3339() {
            Some(rendered) => serializer.serialize_str(&rendered),
            None => serializer.serialize_none(),
        }
    }
}

/// Format a year, month and day as `YYYY-MM-DD`
pub fn date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format the calendar date of `value` as `YYYY-MM-DD`
pub fn date_at(value: &impl Datelike) -> String {
    date(value.year(), value.month(), value.day())
}
