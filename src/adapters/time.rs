//! FreeRTOS time adapters.
//!
//! - **`target_os = "espidf"`** — reads `xTaskGetTickCount()` and suspends
//!   with `vTaskDelay` through `esp_idf_hal::delay::FreeRtos`.
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` and
//!   `std::thread::sleep` for host-side simulation.

use crate::app::ports::{DelayPort, TimePort};
use crate::app::timing::Timestamp;

#[cfg(not(target_os = "espidf"))]
static BOOT: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Milliseconds per scheduler tick.
#[cfg(target_os = "espidf")]
const MS_PER_TICK: u32 = 1000 / esp_idf_svc::sys::configTICK_RATE_HZ;

/// Read-only handle on the scheduler tick counter.
///
/// Every instance reads the same process-wide counter, so each activity
/// can own one without sharing anything.
#[derive(Debug, Clone, Copy)]
pub struct RtosClock {
    _private: (),
}

impl Default for RtosClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RtosClock {
    pub fn new() -> Self {
        #[cfg(not(target_os = "espidf"))]
        BOOT.get_or_init(std::time::Instant::now);
        Self { _private: () }
    }
}

impl TimePort for RtosClock {
    #[cfg(target_os = "espidf")]
    fn now(&self) -> Timestamp {
        // SAFETY: xTaskGetTickCount is a plain read of the kernel tick
        // counter and is callable from any task context.
        let ticks = unsafe { esp_idf_svc::sys::xTaskGetTickCount() };
        Timestamp::from_ticks(ticks, MS_PER_TICK)
    }

    #[cfg(not(target_os = "espidf"))]
    fn now(&self) -> Timestamp {
        let elapsed = BOOT.get_or_init(std::time::Instant::now).elapsed();
        // Truncation mirrors the 32-bit millisecond counter on target.
        Timestamp::from_millis(elapsed.as_millis() as u32)
    }
}

/// Relative task delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct RtosDelay;

impl DelayPort for RtosDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
