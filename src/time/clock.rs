use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::utils::{MICROS_PER_SECOND, NANOS_PER_SECOND};

/// A timestamp or duration split into whole seconds and a sub-second part.
///
/// `nanos` is always in `[0, 1e9)`. A negative duration (end before start)
/// is represented with negative `seconds` and a positive `nanos`, so
/// `-0.25s` is `{ seconds: -1, nanos: 750_000_000 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimClock {
    seconds: i64,
    nanos: u32,
}

impl SimClock {
    pub const ZERO: SimClock = SimClock {
        seconds: 0,
        nanos: 0,
    };

    /// Build a timestamp, normalising any nanosecond overflow into seconds.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let carry = (nanos as i64) / NANOS_PER_SECOND;
        Self {
            seconds: seconds + carry,
            nanos: (nanos as i64 % NANOS_PER_SECOND) as u32,
        }
    }

    pub fn from_nanos(total: i64) -> Self {
        Self {
            seconds: total.div_euclid(NANOS_PER_SECOND),
            nanos: total.rem_euclid(NANOS_PER_SECOND) as u32,
        }
    }

    /// Saturates at the representable range instead of overflowing.
    pub fn from_micros(total: i64) -> Self {
        Self::from_nanos(total.saturating_mul(1_000))
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self {
            seconds: duration.as_secs() as i64,
            nanos: duration.subsec_nanos(),
        }
    }

    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Works out `end - start`, borrowing a second when the sub-second
    /// part of `end` is smaller than that of `start`.
    pub fn diff(end: SimClock, start: SimClock) -> SimClock {
        if end.nanos < start.nanos {
            SimClock {
                seconds: end.seconds - start.seconds - 1,
                nanos: (NANOS_PER_SECOND as u32) + end.nanos - start.nanos,
            }
        } else {
            SimClock {
                seconds: end.seconds - start.seconds,
                nanos: end.nanos - start.nanos,
            }
        }
    }

    /// Works out `a + b`, carrying sub-second overflow into the seconds.
    pub fn sum(a: SimClock, b: SimClock) -> SimClock {
        let nanos = a.nanos + b.nanos;
        if nanos >= NANOS_PER_SECOND as u32 {
            SimClock {
                seconds: a.seconds + b.seconds + 1,
                nanos: nanos - NANOS_PER_SECOND as u32,
            }
        } else {
            SimClock {
                seconds: a.seconds + b.seconds,
                nanos,
            }
        }
    }

    pub fn to_seconds(&self) -> f64 {
        self.seconds as f64 + self.nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Whole microseconds. Meant for short differences; absolute wall
    /// times may overflow.
    pub fn to_micros(&self) -> i64 {
        self.seconds * MICROS_PER_SECOND + (self.nanos / 1_000) as i64
    }

    /// Whole milliseconds. Same overflow caveat as [`SimClock::to_micros`].
    pub fn to_millis(&self) -> i64 {
        self.seconds * 1_000 + (self.nanos / 1_000_000) as i64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}s", self.seconds, self.nanos)
    }
}
