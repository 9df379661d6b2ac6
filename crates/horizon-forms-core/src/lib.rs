//! Core systems for Horizon Forms.
//!
//! This crate provides the foundational pieces the form widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe change notification from widgets to their host
//! - **Scheduler**: Widget-owned deferred one-shot entries with cancellation
//! - **Logging**: `tracing` targets used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_forms_core::Signal;
//!
//! let value_changed = Signal::<String>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit("hello".to_string());
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod scheduler;
pub mod signal;

pub use error::{CoreError, Result, SchedulerError};
pub use scheduler::{ScheduledTaskId, Scheduler};
pub use signal::{ConnectionId, Signal};
