//! Port traits — the boundary between the activities and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Activity (domain)
//! ```
//!
//! The RTOS (clock, delay, task creation) and the diagnostic output are
//! driven adapters implementing these traits.  The output pin is consumed
//! through `embedded_hal::digital::OutputPin` directly.

use crate::error::Result;

use super::timing::Timestamp;

// ───────────────────────────────────────────────────────────────
// Clock port (read-only: RTOS tick counter → domain)
// ───────────────────────────────────────────────────────────────

/// Read-only view of the scheduler's monotonic tick counter.
pub trait TimePort {
    /// Current time since boot.  Non-decreasing modulo 2^32 ms.
    fn now(&self) -> Timestamp;
}

// ───────────────────────────────────────────────────────────────
// Delay port (domain → RTOS)
// ───────────────────────────────────────────────────────────────

/// Suspends the calling task.
///
/// The delay is relative to the moment of the call and is a floor: the
/// task sleeps *at least* `ms`, with no upper bound.
pub trait DelayPort {
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → serial log)
// ───────────────────────────────────────────────────────────────

/// The activities emit [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}

// ───────────────────────────────────────────────────────────────
// Task spawner port (bootstrap → RTOS)
// ───────────────────────────────────────────────────────────────

/// Body of a spawned task.  Never expected to return in steady state.
pub type TaskEntry = Box<dyn FnOnce() + Send + 'static>;

/// Scheduling parameters for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    /// Task name as shown by the RTOS (no trailing NUL).
    pub name: &'static str,
    /// Stack budget in bytes.
    pub stack_bytes: usize,
    /// RTOS priority.  Higher runs first; equal priorities time-slice.
    pub priority: u8,
}

/// Creates RTOS tasks.
pub trait TaskSpawner {
    /// Create a task running `entry`.
    ///
    /// Returns [`Error::Spawn`](crate::error::Error::Spawn) if the RTOS
    /// is out of resources.  On error `entry` has been dropped unrun.
    fn spawn(&mut self, spec: TaskSpec, entry: TaskEntry) -> Result<()>;
}
