//! Hardware initialisation, the status LED pin, and RTOS task creation.

pub mod hw_init;
pub mod status_led;
pub mod task;
