//! Heartbeat activity.
//!
//! Emits one liveness line per period carrying the uptime and the
//! measured interval since the previous line.

use crate::error::Result;

use super::activity::{Activity, ActivityState};
use super::events::{HeartbeatRecord, MonitorEvent};
use super::ports::{DelayPort, EventSink, TimePort};
use super::timing::Timestamp;

pub const TASK_NAME: &str = "print_task";

pub struct HeartbeatActivity<T, D, S> {
    clock: T,
    delay: D,
    sink: S,
    theme: &'static str,
    period_ms: u32,
    last_emit: Timestamp,
    state: ActivityState,
}

impl<T, D, S> HeartbeatActivity<T, D, S>
where
    T: TimePort,
    D: DelayPort,
    S: EventSink,
{
    pub fn new(clock: T, delay: D, sink: S, theme: &'static str, period_ms: u32) -> Self {
        let last_emit = clock.now();
        Self {
            clock,
            delay,
            sink,
            theme,
            period_ms,
            last_emit,
            state: ActivityState::AwaitNextCycle,
        }
    }

    fn beat(&mut self) -> HeartbeatRecord {
        let now = self.clock.now();
        let record = HeartbeatRecord {
            theme: self.theme,
            uptime_ms: now.as_millis(),
            dt_ms: now.elapsed_since(self.last_emit),
        };
        self.sink.emit(&MonitorEvent::Heartbeat(record));
        self.last_emit = now;
        record
    }
}

impl<T, D, S> Activity for HeartbeatActivity<T, D, S>
where
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
        self.beat();
        self.state = ActivityState::AwaitNextCycle;
        self.delay.delay_ms(self.period_ms);
        Ok(())
    }
}
