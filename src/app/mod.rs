//! Application core — pure domain logic, zero I/O.
//!
//! The two periodic activities (status blink and heartbeat), their timing
//! model, and the one-shot bootstrap that hands them to the scheduler.
//! All interaction with hardware and the RTOS happens through **port
//! traits** defined in [`ports`], keeping this layer testable on the host.

pub mod activity;
pub mod blink;
pub mod bootstrap;
pub mod events;
pub mod heartbeat;
pub mod ports;
pub mod timing;
