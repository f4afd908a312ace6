//! Health-monitor firmware — main entry point.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                    │
//! │                                                           │
//! │  StatusLed     RtosClock   RtosDelay   LogEventSink       │
//! │  (OutputPin)   (TimePort)  (DelayPort) (EventSink)        │
//! │  RtosSpawner (TaskSpawner)                                │
//! │                                                           │
//! │  ──────────────── Port Trait Boundary ─────────────────   │
//! │                                                           │
//! │   ┌──────────────────┐        ┌──────────────────────┐    │
//! │   │  BlinkActivity   │        │  HeartbeatActivity   │    │
//! │   │  (blink_task)    │        │  (print_task)        │    │
//! │   └──────────────────┘        └──────────────────────┘    │
//! │            equal-priority FreeRTOS peers                  │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use healthmon::adapters::log_sink::LogEventSink;
use healthmon::adapters::spawner::RtosSpawner;
use healthmon::adapters::time::{RtosClock, RtosDelay};
use healthmon::app::blink::BlinkActivity;
use healthmon::app::bootstrap;
use healthmon::app::heartbeat::HeartbeatActivity;
use healthmon::config::MonitorConfig;
use healthmon::diagnostics;
use healthmon::drivers::hw_init;
use healthmon::drivers::status_led::StatusLed;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    diagnostics::install_panic_handler();

    info!("Healthmon v{}", env!("CARGO_PKG_VERSION"));

    let config = MonitorConfig::DEFAULT;

    // ── 2. Status LED: output, LOW ────────────────────────────
    hw_init::init_status_led(config.led_gpio)?;
    let led = StatusLed::new(config.led_gpio);

    bootstrap::announce(&mut LogEventSink::new(), &config);

    // ── 3. Activities ─────────────────────────────────────────
    let blink = BlinkActivity::new(
        led,
        RtosClock::new(),
        RtosDelay,
        LogEventSink::new(),
        config.blink_half_period_ms,
    );
    let heartbeat = HeartbeatActivity::new(
        RtosClock::new(),
        RtosDelay,
        LogEventSink::new(),
        config.theme,
        config.heartbeat_period_ms,
    );

    // ── 4. Hand off to the scheduler ──────────────────────────
    let mut spawner = RtosSpawner::new();
    if let Err(e) = bootstrap::launch(&mut spawner, &config, blink, heartbeat) {
        // Never run with one activity missing.  The abort resets the chip.
        diagnostics::halt("main", e);
    }

    info!("System ready ({} tasks). Main task parking.", spawner.spawned());
    loop {
        std::thread::park();
    }
}
