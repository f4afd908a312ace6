//! GPIO pin assignments for the health-monitor board.
//!
//! Single source of truth — drivers reference this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Status LED (discrete LED, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output driving the on-board status LED.
pub const STATUS_LED_GPIO: i32 = 2;
