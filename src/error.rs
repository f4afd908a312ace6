//! Unified error types for the health-monitor firmware.
//!
//! Every variant is fatal: nothing in this firmware retries.  Variants are
//! `Copy` so they can be moved out of an activity task without allocation.

use core::fmt;

use embedded_hal::digital::ErrorKind;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed with the given ESP-IDF error code.
    Init(i32),
    /// Writing the output pin failed.
    Pin(ErrorKind),
    /// The scheduler could not create the named task.
    Spawn(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(rc) => write!(f, "init: GPIO config failed (rc={rc})"),
            Self::Pin(kind) => write!(f, "pin: write failed ({kind:?})"),
            Self::Spawn(name) => write!(f, "spawn: could not create task '{name}'"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Convert any `embedded-hal` digital error into a pin error.
    pub fn pin<E: embedded_hal::digital::Error>(e: E) -> Self {
        Self::Pin(e.kind())
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
