//! # Ledger Time
//!
//! The ledger counts seconds from 2000-01-01T00:00:00Z, not from the
//! Unix epoch. [`RippleTime`] holds a real [`DateTime<Utc>`] internally
//! and does the 946,684,800-second shift at the serde boundary, so the
//! rest of a program never sees the offset and never applies it twice.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RIPPLE_EPOCH_OFFSET;
use crate::error::CodecError;

/// A point in time, carried in JSON as whole seconds since the ledger
/// epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RippleTime(DateTime<Utc>);

impl RippleTime {
    /// Build from a count of seconds since the ledger epoch.
    pub fn from_secs(secs: i64) -> Result<Self, CodecError> {
        let unix = secs
            .checked_add(RIPPLE_EPOCH_OFFSET)
            .ok_or_else(|| CodecError::NumericParse {
                text: secs.to_string(),
                reason: "timestamp out of range",
            })?;
        Utc.timestamp_opt(unix, 0)
            .single()
            .map(Self)
            .ok_or_else(|| CodecError::NumericParse {
                text: secs.to_string(),
                reason: "timestamp out of range",
            })
    }

    /// Seconds since the ledger epoch. Sub-second precision, if any was
    /// smuggled in through [`From<DateTime<Utc>>`], is dropped.
    pub fn secs(&self) -> i64 {
        self.0.timestamp() - RIPPLE_EPOCH_OFFSET
    }

    /// The wrapped timestamp.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for RippleTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<RippleTime> for DateTime<Utc> {
    fn from(t: RippleTime) -> Self {
        t.0
    }
}

impl fmt::Display for RippleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%b-%d %H:%M:%S"))
    }
}

impl fmt::Debug for RippleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RippleTime({})", self)
    }
}

impl Serialize for RippleTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.secs())
    }
}

impl<'de> Deserialize<'de> for RippleTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        RippleTime::from_secs(secs).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_ledger_epoch() {
        let t = RippleTime::from_secs(0).unwrap();
        assert_eq!(t.datetime(), Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(t.secs(), 0);
    }

    #[test]
    fn a_day_later() {
        let t = RippleTime::from_secs(86_400).unwrap();
        assert_eq!(t.datetime(), Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn json_integer_roundtrip() {
        let t: RippleTime = serde_json::from_str("435301270").unwrap();
        assert_eq!(t.secs(), 435_301_270);
        assert_eq!(serde_json::to_string(&t).unwrap(), "435301270");
    }

    #[test]
    fn json_must_be_an_integer() {
        assert!(serde_json::from_str::<RippleTime>("\"0\"").is_err());
        assert!(serde_json::from_str::<RippleTime>("1.5").is_err());
    }

    #[test]
    fn absurd_offsets_error_instead_of_panicking() {
        assert!(RippleTime::from_secs(i64::MAX).is_err());
        assert!(RippleTime::from_secs(i64::MIN).is_err());
        assert!(serde_json::from_str::<RippleTime>("9223372036854775807").is_err());
    }

    #[test]
    fn conversions_preserve_whole_seconds() {
        let dt = Utc.with_ymd_and_hms(2015, 10, 17, 12, 30, 45).unwrap();
        let t = RippleTime::from(dt);
        assert_eq!(DateTime::<Utc>::from(t), dt);
        assert_eq!(RippleTime::from_secs(t.secs()).unwrap(), t);
    }

    #[test]
    fn ordering_follows_the_clock() {
        let earlier = RippleTime::from_secs(100).unwrap();
        let later = RippleTime::from_secs(200).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn display_is_human_readable() {
        let t = RippleTime::from_secs(0).unwrap();
        assert_eq!(t.to_string(), "2000-Jan-01 00:00:00");
    }
}
