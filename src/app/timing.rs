//! Monotonic millisecond timestamps with wrap-safe arithmetic.
//!
//! The RTOS tick counter is converted to milliseconds and truncated to
//! 32 bits, so it rolls over after ~49.7 days.  Elapsed time is always
//! computed with wrapping subtraction, which stays correct across one
//! rollover as long as the real interval is shorter than 2^32 ms.

use core::fmt;

/// Milliseconds since boot, wrapping at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp(u32);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Convert a raw tick count to milliseconds.
    pub const fn from_ticks(ticks: u32, ms_per_tick: u32) -> Self {
        Self(ticks.wrapping_mul(ms_per_tick))
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`.
    pub const fn elapsed_since(self, earlier: Timestamp) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// `self` advanced by `ms`, wrapping at the counter boundary.
    pub const fn add_millis(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}
