//! Fatal-error path and panic reporting.
//!
//! Nothing in this firmware recovers from an error.  An activity that hits
//! one logs it and aborts the whole process, so the other activity cannot
//! keep running on its own.  On ESP-IDF `abort()` goes through the system
//! panic handler and resets the chip.

use log::error;

use crate::adapters::time::RtosClock;
use crate::app::ports::TimePort;
use crate::error::Error;

/// Terminate the process after an unrecoverable error in `task`.
pub fn halt(task: &str, err: Error) -> ! {
    error!("{}: fatal at {}: {}", task, RtosClock::new().now(), err);
    std::process::abort();
}

/// Install a panic hook that logs the reason and uptime.
///
/// Must be called once during init, after the logger is up.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };

        let uptime = RtosClock::new().now();
        match info.location() {
            Some(loc) => error!("PANIC at {} ({}:{}): {}", uptime, loc.file(), loc.line(), reason),
            None => error!("PANIC at {}: {}", uptime, reason),
        }
    }));
}
