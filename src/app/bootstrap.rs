//! One-shot handoff of the activities to the RTOS.
//!
//! Both tasks are created behind a shared [`StartGate`].  Neither runs a
//! cycle until both exist; if the second spawn fails the gate is cancelled,
//! the first task exits without touching the LED, and the error propagates
//! to `main`.  There is no retry and no partial steady state.

use std::sync::{Arc, Condvar, Mutex, PoisonError};

use log::{info, warn};

use crate::config::MonitorConfig;
use crate::error::Result;

use super::activity::Activity;
use super::events::{MonitorEvent, StartupRecord};
use super::ports::{EventSink, TaskEntry, TaskSpawner, TaskSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Closed,
    Open,
    Cancelled,
}

/// Latch released exactly once, either to `Open` or `Cancelled`.
#[derive(Clone)]
pub struct StartGate {
    inner: Arc<(Mutex<GateState>, Condvar)>,
}

impl Default for StartGate {
    fn default() -> Self {
        Self::new()
    }
}

impl StartGate {
    pub fn new() -> Self {
        Self {
            inner: Arc::new((Mutex::new(GateState::Closed), Condvar::new())),
        }
    }

    pub fn open(&self) {
        self.release(GateState::Open);
    }

    pub fn cancel(&self) {
        self.release(GateState::Cancelled);
    }

    /// Block until released.  `true` means go, `false` means exit.
    pub fn wait(&self) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut state = lock.lock().unwrap_or_else(PoisonError::into_inner);
        while *state == GateState::Closed {
            state = cvar.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
        *state == GateState::Open
    }

    fn release(&self, to: GateState) {
        let (lock, cvar) = &*self.inner;
        let mut state = lock.lock().unwrap_or_else(PoisonError::into_inner);
        // First release wins.
        if *state == GateState::Closed {
            *state = to;
        }
        cvar.notify_all();
    }
}

/// Emit the one-time startup record.
pub fn announce(sink: &mut impl EventSink, config: &MonitorConfig) {
    sink.emit(&MonitorEvent::Startup(StartupRecord {
        theme: config.theme,
        led_gpio: config.led_gpio,
        blink_rate_hz: config.blink_rate_hz(),
        heartbeat_period_ms: config.heartbeat_period_ms,
    }));
}

/// Register both activities with the scheduler and release them together.
pub fn launch<Sp, B, H>(
    spawner: &mut Sp,
    config: &MonitorConfig,
    blink: B,
    heartbeat: H,
) -> Result<()>
where
    Sp: TaskSpawner,
    B: Activity + 'static,
    H: Activity + 'static,
{
    let gate = StartGate::new();

    for (spec, entry) in [
        (task_spec(config, blink.name()), task_entry(&gate, blink)),
        (task_spec(config, heartbeat.name()), task_entry(&gate, heartbeat)),
    ] {
        if let Err(e) = spawner.spawn(spec, entry) {
            gate.cancel();
            return Err(e);
        }
    }

    gate.open();
    info!("Bootstrap: both activities released");
    Ok(())
}

fn task_spec(config: &MonitorConfig, name: &'static str) -> TaskSpec {
    TaskSpec {
        name,
        stack_bytes: config.task_stack_bytes,
        priority: config.task_priority,
    }
}

fn task_entry<A: Activity + 'static>(gate: &StartGate, mut activity: A) -> TaskEntry {
    let gate = gate.clone();
    Box::new(move || {
        if !gate.wait() {
            warn!("{}: start cancelled", activity.name());
            return;
        }
        match activity.run() {
            Ok(never) => match never {},
            Err(e) => crate::diagnostics::halt(activity.name(), e),
        }
    })
}
