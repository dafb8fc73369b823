//! Time sources for measurement timestamps
//!
//! Every measurement in a batch carries the same wall-clock timestamp: the
//! moment the cycle was processed. The engine never reads a clock itself;
//! callers hand it a `DateTime<Utc>` directly or a [`TimeSource`]:
//! - System clock (std builds)
//! - Fixed time (tests, replay of recorded observations)
//! - Any RTC or GNSS-backed clock the host provides

use chrono::{DateTime, Utc};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of wall-clock time
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock stopped at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Convert a millisecond timestamp to a UTC date-time
///
/// Timestamps beyond chrono's range saturate to the Unix epoch.
pub fn to_datetime(timestamp: Timestamp) -> DateTime<Utc> {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Convert a UTC date-time back to milliseconds, clamping pre-epoch to 0
pub fn to_timestamp(datetime: &DateTime<Utc>) -> Timestamp {
    u64::try_from(datetime.timestamp_millis()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_moves_only_when_told() {
        let mut clock = FixedTime::new(1_000);
        assert_eq!(clock.now(), 1_000);
        clock.advance(500);
        assert_eq!(clock.now(), 1_500);
        clock.set(42);
        assert_eq!(clock.now(), 42);
        clock.advance(u64::MAX);
        assert_eq!(clock.now(), u64::MAX);
    }

    #[test]
    fn datetime_round_trip() {
        let ts = 1_700_000_000_123;
        assert_eq!(to_timestamp(&to_datetime(ts)), ts);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(to_datetime(u64::MAX), DateTime::UNIX_EPOCH);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_is_after_2020() {
        assert!(SystemTime.now() > 1_577_836_800_000);
    }
}
