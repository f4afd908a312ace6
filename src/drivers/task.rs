//! RTOS task creation with explicit priority and stack size.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread` creates a FreeRTOS
//! task with the requested priority and stack.  On non-ESP targets, falls
//! back to a plain thread spawn.
//!
//! # ESP-IDF Threading Model
//!
//! ESP-IDF implements `std::thread` via pthreads, which are thin wrappers
//! around FreeRTOS tasks. `esp_pthread_set_cfg()` sets thread-local
//! configuration that applies to the *next* `pthread_create()` call from
//! the calling thread. This means the config→spawn pair must not be
//! interleaved with other thread creation on the same thread.  Core
//! affinity is left at the sdkconfig default (no pinning).

use std::ffi::{CStr, CString};
use std::io;

use crate::app::ports::{TaskEntry, TaskSpec};

/// Smallest stack handed to a task.  Logging goes through `core::fmt` and
/// the ESP-IDF vprintf backend, which do not fit in a bare 2 KiB.
#[cfg(target_os = "espidf")]
pub const MIN_TASK_STACK: usize = 6 * 1024;

/// Host threads need far more than an RTOS task budget for formatting.
#[cfg(not(target_os = "espidf"))]
pub const MIN_TASK_STACK: usize = 64 * 1024;

/// Stack actually allocated for a requested budget.
pub fn effective_stack(requested: usize) -> usize {
    requested.max(MIN_TASK_STACK)
}

/// NUL-terminated copy of `name` that is never freed.
///
/// The pthread config keeps the pointer in thread-local storage after the
/// spawn, so it must stay valid for the rest of the program.  Only a
/// handful of tasks are ever created.
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
fn static_task_name(name: &'static str) -> io::Result<&'static CStr> {
    let c_name =
        CString::new(name).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(Box::leak(c_name.into_boxed_c_str()))
}

/// Create a task.  The task is detached; it is never joined.
#[cfg(target_os = "espidf")]
pub fn spawn_task(spec: &TaskSpec, entry: TaskEntry) -> io::Result<()> {
    let c_name = static_task_name(spec.name)?;
    let stack = effective_stack(spec.stack_bytes);

    // SAFETY: `c_name` is 'static, so the pointer left in the thread-local
    // config never dangles.
    unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.prio = spec.priority as _;
        cfg.stack_size = stack as _;
        cfg.thread_name = c_name.as_ptr();
        let ret = esp_idf_sys::esp_pthread_set_cfg(&cfg);
        if ret != esp_idf_sys::ESP_OK as i32 {
            return Err(io::Error::other(format!("esp_pthread_set_cfg failed: {ret}")));
        }
    }

    log::info!(
        "Spawning '{}' (pri={}, stack={}B, requested {}B)",
        spec.name,
        spec.priority,
        stack,
        spec.stack_bytes
    );

    std::thread::Builder::new()
        .name(spec.name.into())
        .stack_size(stack)
        .spawn(entry)
        .map(drop)
}

/// Simulation fallback — ignores priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_task(spec: &TaskSpec, entry: TaskEntry) -> io::Result<()> {
    let stack = effective_stack(spec.stack_bytes);
    log::info!(
        "Spawning '{}' (sim, pri ignored, stack={}B)",
        spec.name,
        stack
    );

    std::thread::Builder::new()
        .name(spec.name.into())
        .stack_size(stack)
        .spawn(entry)
        .map(drop)
}
