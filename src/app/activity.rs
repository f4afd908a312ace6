//! Common shape of a periodic activity.
//!
//! ```text
//!            ┌──────────────────────┐
//!            │   AwaitNextCycle     │◀──────────┐
//!            └──────────┬───────────┘           │
//!                       │ step()                │ delay_ms(period)
//!                       ▼                       │
//!            ┌──────────────────────┐           │
//!            │       Running        │───────────┘
//!            │ body → diagnostics   │
//!            └──────────────────────┘
//! ```
//!
//! Suspension is relative to the end of the cycle body, so the period is a
//! floor.  Any preemption or tick rounding shows up in the logged `dt` and
//! accumulates as drift; it is reported, never corrected.

use core::convert::Infallible;

use crate::error::Result;

/// Where an activity is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    /// Parked in the RTOS delay (or not yet started).
    AwaitNextCycle,
    /// Executing the cycle body.
    Running,
}

/// An independently scheduled, perpetually looping unit of work.
pub trait Activity: Send {
    /// Task name, also used as the log prefix.
    fn name(&self) -> &'static str;

    fn state(&self) -> ActivityState;

    /// Run exactly one cycle: body, diagnostics, then suspend for the period.
    fn step(&mut self) -> Result<()>;

    /// Loop forever.  Returns only on a fatal error.
    fn run(&mut self) -> Result<Infallible> {
        loop {
            self.step()?;
        }
    }
}
