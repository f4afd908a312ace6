//! Single-colour status LED on one GPIO.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the pin with `gpio_set_level`.
//! On host/test: tracks state in-memory only.
//!
//! Exposed through `embedded_hal::digital::OutputPin` so the blink
//! activity never sees the platform.

use core::fmt;

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

/// `gpio_set_level` returned a non-OK ESP-IDF error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedError(pub i32);

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gpio_set_level failed (rc={})", self.0)
    }
}

impl digital::Error for LedError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Owns the LED GPIO once [`init_status_led`](super::hw_init::init_status_led)
/// has configured it.
pub struct StatusLed {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    gpio: i32,
    on: bool,
}

impl StatusLed {
    /// The pin must already be an output driven LOW.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    #[cfg(target_os = "espidf")]
    fn write(&mut self, on: bool) -> Result<(), LedError> {
        // SAFETY: the pin was configured as an output at boot and is only
        // written from the task that owns this driver.
        let ret = unsafe { esp_idf_svc::sys::gpio_set_level(self.gpio, u32::from(on)) };
        if ret != esp_idf_svc::sys::ESP_OK as i32 {
            return Err(LedError(ret));
        }
        self.on = on;
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn write(&mut self, on: bool) -> Result<(), LedError> {
        self.on = on;
        Ok(())
    }
}

impl ErrorType for StatusLed {
    type Error = LedError;
}

impl OutputPin for StatusLed {
    fn set_low(&mut self) -> Result<(), LedError> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), LedError> {
        self.write(true)
    }
}
