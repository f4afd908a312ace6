//! One-shot hardware peripheral initialization.
//!
//! Configures the status LED GPIO using raw ESP-IDF sys calls.  Called
//! once from `main()` before the activities are spawned.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

use crate::error::Result;

/// Reset `gpio`, make it a push-pull output, and drive it LOW.
#[cfg(target_os = "espidf")]
pub fn init_status_led(gpio: i32) -> Result<()> {
    use crate::error::Error;

    // SAFETY: Called once from main() before any task touches the pin.
    unsafe {
        let ret = gpio_reset_pin(gpio);
        if ret != ESP_OK as i32 { return Err(Error::Init(ret)); }

        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << gpio,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = gpio_config(&cfg);
        if ret != ESP_OK as i32 { return Err(Error::Init(ret)); }

        let ret = gpio_set_level(gpio, 0);
        if ret != ESP_OK as i32 { return Err(Error::Init(ret)); }
    }

    info!("hw_init: GPIO{} configured as output, LOW", gpio);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_status_led(gpio: i32) -> Result<()> {
    info!("hw_init(sim): GPIO{} init skipped", gpio);
    Ok(())
}
