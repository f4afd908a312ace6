//! Outbound diagnostic records.
//!
//! The activities emit these through the [`EventSink`](super::ports::EventSink)
//! port.  Each record renders to exactly one human-readable log line via
//! `Display`; the startup record renders to two.

use core::fmt;

/// Logic level of the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Off,
    On,
}

impl Level {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "OFF",
            Self::On => "ON",
        })
    }
}

/// Structured records emitted by the health monitor.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    /// One-time announcement before the activities start.
    Startup(StartupRecord),

    /// The status LED was toggled.
    Blink(BlinkRecord),

    /// Periodic liveness line.
    Heartbeat(HeartbeatRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartupRecord {
    pub theme: &'static str,
    pub led_gpio: i32,
    pub blink_rate_hz: f32,
    pub heartbeat_period_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkRecord {
    /// Level just written to the pin.
    pub level: Level,
    /// Milliseconds since the previous toggle (or since activity creation).
    pub dt_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatRecord {
    pub theme: &'static str,
    pub uptime_ms: u32,
    /// Milliseconds since the previous heartbeat (or since activity creation).
    pub dt_ms: u32,
}

impl fmt::Display for StartupRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RTS Module 1 started: {}", self.theme)?;
        write!(
            f,
            "LED pin: GPIO{} | Blink: ~{:.1} Hz | Print: every {} ms",
            self.led_gpio, self.blink_rate_hz, self.heartbeat_period_ms
        )
    }
}

impl fmt::Display for BlinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[blink_task] LED={} | dt={} ms", self.level, self.dt_ms)
    }
}

impl fmt::Display for HeartbeatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[print_task] {} | heartbeat OK | uptime={} ms | dt={} ms",
            self.theme, self.uptime_ms, self.dt_ms
        )
    }
}

impl fmt::Display for MonitorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Startup(r) => r.fmt(f),
            Self::Blink(r) => r.fmt(f),
            Self::Heartbeat(r) => r.fmt(f),
        }
    }
}
