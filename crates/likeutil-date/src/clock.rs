use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering::SeqCst;
use std::time::Duration;

use jiff::Timestamp;

use ClockSource::{FixedOffset, Mock, System};

use crate::error::Result;

/// A source of time with millisecond resolution.
#[derive(Debug, Clone)]
pub enum ClockSource {
    /// Clock source based on the system clock.
    System,

    /// Maintains a fixed number of milliseconds offset (positive or negative) from the system
    /// clock.
    FixedOffset(i64),

    /// Manually driven clock. Clones share the same underlying time.
    Mock(Arc<AtomicI64>),
}

impl ClockSource {
    pub fn new_mock(now_millis: i64) -> ClockSource {
        Mock(Arc::new(AtomicI64::new(now_millis)))
    }
}

impl ClockSource {
    /// Milliseconds since the UNIX epoch, negative before 1970.
    pub fn epoch_millis(&self) -> i64 {
        match self {
            System => Timestamp::now().as_millisecond(),
            FixedOffset(offset) => System.epoch_millis().saturating_add(*offset),
            Mock(now) => now.load(SeqCst),
        }
    }

    /// Whole seconds since the UNIX epoch, rounded toward negative infinity.
    pub fn epoch_seconds(&self) -> i64 {
        self.epoch_millis().div_euclid(1000)
    }

    /// The current time of this clock as a [`Timestamp`].
    pub fn timestamp(&self) -> Result<Timestamp> {
        Ok(Timestamp::from_millisecond(self.epoch_millis())?)
    }

    /// Sets the current time of this Mock clock. Does nothing for other clocks.
    pub fn set_time(&mut self, now_millis: i64) {
        if let Mock(n) = self {
            n.store(now_millis, SeqCst);
        }
    }

    /// Moves this Mock clock forward by `delta`. Does nothing for other clocks.
    pub fn advance(&mut self, delta: Duration) {
        match self {
            System | FixedOffset(_) => {}
            Mock(n) => {
                let delta = i64::try_from(delta.as_millis()).unwrap_or(i64::MAX);
                n.fetch_add(delta, SeqCst);
            }
        }
    }
}

/// Milliseconds since the UNIX epoch from the system clock.
pub fn millis() -> i64 {
    System.epoch_millis()
}

/// Seconds since the UNIX epoch from the system clock.
pub fn seconds() -> i64 {
    System.epoch_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now() {
        let timestamp = millis();

        let clock = ClockSource::new_mock(timestamp);
        assert_eq!(clock.epoch_millis(), timestamp);
        assert_eq!(clock.epoch_seconds(), timestamp / 1000);

        let clock = System;
        assert!(clock.epoch_millis() >= timestamp);
        assert!(clock.epoch_seconds() >= timestamp / 1000);

        let clock = FixedOffset(10_000);
        assert!(clock.epoch_millis() >= timestamp + 10_000);
    }

    #[test]
    fn seconds_agree_with_millis() {
        let before = millis();
        let secs = seconds();
        let after = millis();

        assert!(secs >= before / 1000);
        assert!(secs <= after / 1000);
        // Any time after 2020-01-01
        assert!(secs > 1_577_836_800);
    }

    #[test]
    fn seconds_floor_before_epoch() {
        let clock = ClockSource::new_mock(-1);
        assert_eq!(clock.epoch_seconds(), -1);

        let clock = ClockSource::new_mock(1_999);
        assert_eq!(clock.epoch_seconds(), 1);
    }

    #[test]
    fn time_manipulation() {
        let now = millis();
        let mut clock = ClockSource::new_mock(now - 1);
        assert_eq!(clock.epoch_millis(), now - 1);

        // set_time should override the initial time value
        clock.set_time(now);

        clock.advance(Duration::from_millis(1_500));
        assert_eq!(clock.epoch_millis(), now + 1_500);
    }

    #[test]
    fn cloned_clocks_share_underlying_time() {
        let mut clock1 = ClockSource::new_mock(1_000);
        let clock2 = clock1.clone();

        clock1.set_time(2_000);

        assert_eq!(clock1.epoch_millis(), 2_000);
        assert_eq!(clock2.epoch_millis(), 2_000);
    }

    #[test]
    fn mock_timestamp() {
        let clock = ClockSource::new_mock(1_709_647_629_123);
        let ts = clock.timestamp().unwrap();

        assert_eq!(ts.as_second(), 1_709_647_629);
        assert_eq!(ts.as_millisecond(), 1_709_647_629_123);
    }

    #[test]
    fn mutators_leave_real_clocks_alone() {
        let mut system = System;
        system.set_time(0);
        system.advance(Duration::from_secs(3_600));
        assert!(system.epoch_seconds() > 1_577_836_800);

        let mut fixed = FixedOffset(-1_000);
        fixed.set_time(0);
        fixed.advance(Duration::from_secs(3_600));
        assert!(matches!(fixed, FixedOffset(-1_000)));
        assert!((seconds() - 1 - fixed.epoch_seconds()).abs() <= 1);
    }

    #[test]
    fn fixed_offset() {
        let clock = FixedOffset(-10_217_000);

        let fixed_time = clock.epoch_seconds();
        let system_time = seconds();

        // allow for a second boundary between the two reads
        assert!((system_time - 10_217 - fixed_time).abs() <= 1);
    }
}
