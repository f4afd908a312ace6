//! System configuration parameters
//!
//! Compile-time constants for the health monitor.  Nothing here is
//! reconfigurable at runtime; change a value and reflash.

use crate::pins;

/// Status LED half-period: 250 ms ON, 250 ms OFF (2 Hz blink).
pub const BLINK_HALF_PERIOD_MS: u32 = 250;
/// Heartbeat emission period.
pub const HEARTBEAT_PERIOD_MS: u32 = 10_000;
/// Theme label carried by the startup banner and every heartbeat.
pub const THEME_NAME: &str = "Audio System Health Monitor";
/// Requested stack budget for each activity task.
///
/// This is a request, not the allocation: the task driver raises it to
/// [`MIN_TASK_STACK`](crate::drivers::task::MIN_TASK_STACK) (6 KiB on
/// target) because every cycle formats a log line on the task's own stack.
pub const TASK_STACK_BYTES: usize = 2048;
/// Both activities run as equal, low-priority peers.
pub const TASK_PRIORITY: u8 = 1;

/// Core system configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    // --- Output ---
    /// GPIO driving the status LED
    pub led_gpio: i32,

    // --- Timing ---
    /// Time between one LED toggle and the next (milliseconds)
    pub blink_half_period_ms: u32,
    /// Time between heartbeat emissions (milliseconds)
    pub heartbeat_period_ms: u32,

    // --- Diagnostics ---
    /// Label printed at startup and with every heartbeat
    pub theme: &'static str,

    // --- Tasks ---
    /// Requested stack size for each activity task (bytes, before the
    /// platform floor is applied)
    pub task_stack_bytes: usize,
    /// Scheduling priority shared by both activities
    pub task_priority: u8,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        led_gpio: pins::STATUS_LED_GPIO,
        blink_half_period_ms: BLINK_HALF_PERIOD_MS,
        heartbeat_period_ms: HEARTBEAT_PERIOD_MS,
        theme: THEME_NAME,
        task_stack_bytes: TASK_STACK_BYTES,
        task_priority: TASK_PRIORITY,
    };

    /// Nominal visual blink rate.  One full blink is two half-periods.
    pub fn blink_rate_hz(&self) -> f32 {
        1000.0 / (2 * self.blink_half_period_ms) as f32
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
