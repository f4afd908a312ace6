//! FreeRTOS task spawner adapter.
//!
//! Implements [`TaskSpawner`] on top of [`drivers::task`](crate::drivers::task).

use log::error;

use crate::app::ports::{TaskEntry, TaskSpawner, TaskSpec};
use crate::drivers::task::spawn_task;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct RtosSpawner {
    spawned: usize,
}

impl RtosSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks created so far.
    pub fn spawned(&self) -> usize {
        self.spawned
    }
}

impl TaskSpawner for RtosSpawner {
    fn spawn(&mut self, spec: TaskSpec, entry: TaskEntry) -> Result<()> {
        spawn_task(&spec, entry).map_err(|e| {
            error!("Spawner: '{}' failed: {}", spec.name, e);
            Error::Spawn(spec.name)
        })?;
        self.spawned += 1;
        Ok(())
    }
}
