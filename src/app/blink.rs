//! Status LED blink activity.
//!
//! Toggles the output pin every half-period and logs the measured time
//! since the previous toggle.  The pin is owned exclusively by this
//! activity; nothing else reads or writes it.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{Error, Result};

use super::activity::{Activity, ActivityState};
use super::events::{BlinkRecord, Level, MonitorEvent};
use super::ports::{DelayPort, EventSink, TimePort};
use super::timing::Timestamp;

pub const TASK_NAME: &str = "blink_task";

pub struct BlinkActivity<P, T, D, S> {
    pin: P,
    clock: T,
    delay: D,
    sink: S,
    half_period_ms: u32,
    level: Level,
    last_toggle: Timestamp,
    state: ActivityState,
}

impl<P, T, D, S> BlinkActivity<P, T, D, S>
where
    P: OutputPin,
    T: TimePort,
    D: DelayPort,
    S: EventSink,
{
    /// The pin is assumed to be already driven LOW; the first cycle
    /// turns it ON.  The first `dt` is measured from this call.
    pub fn new(pin: P, clock: T, delay: D, sink: S, half_period_ms: u32) -> Self {
        let last_toggle = clock.now();
        Self {
            pin,
            clock,
            delay,
            sink,
            half_period_ms,
            level: Level::Off,
            last_toggle,
            state: ActivityState::AwaitNextCycle,
        }
    }

    /// Toggle the pin and emit the diagnostic record, without suspending.
    fn toggle(&mut self) -> Result<BlinkRecord> {
        self.level = self.level.toggled();
        self.pin
            .set_state(PinState::from(self.level.is_on()))
            .map_err(Error::pin)?;

        let now = self.clock.now();
        let record = BlinkRecord {
            level: self.level,
            dt_ms: now.elapsed_since(self.last_toggle),
        };
        self.sink.emit(&MonitorEvent::Blink(record));
        self.last_toggle = now;
        Ok(record)
    }
}

impl<P, T, D, S> Activity for BlinkActivity<P, T, D, S>
where
    P: OutputPin + Send,
    T: TimePort + Send,
    D: DelayPort + Send,
    S: EventSink + Send,
{
    fn name(&self) -> &'static str {
        TASK_NAME
    }

    fn state(&self) -> ActivityState {
        self.state
    }

    fn step(&mut self) -> Result<()> {
        self.state = ActivityState::Running;
        self.toggle()?;
        self.state = ActivityState::AwaitNextCycle;
        self.delay.delay_ms(self.half_period_ms);
        Ok(())
    }
}
