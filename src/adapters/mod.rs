//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements          | Connects to                 |
//! |------------|---------------------|-----------------------------|
//! | `log_sink` | EventSink           | Serial log output           |
//! | `spawner`  | TaskSpawner         | FreeRTOS task via pthread   |
//! | `time`     | TimePort, DelayPort | FreeRTOS tick count / delay |

pub mod log_sink;
pub mod spawner;
pub mod time;
