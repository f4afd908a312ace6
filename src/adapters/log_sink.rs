//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each record to the ESP-IDF logger
//! (UART / USB-CDC in production).  Records render themselves; this
//! adapter only picks the level.

use log::info;

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`] to the serial console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Startup(r) => {
                for line in r.to_string().lines() {
                    info!("{}", line);
                }
            }
            MonitorEvent::Blink(r) => info!("{}", r),
            MonitorEvent::Heartbeat(r) => info!("{}", r),
        }
    }
}
