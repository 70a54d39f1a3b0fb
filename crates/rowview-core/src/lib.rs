//! Core systems for rowview.
//!
//! This crate provides the foundational pieces the model crate is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification between a model
//!   and whatever observes it (a view, a test harness, other models)
//! - **Logging targets**: Stable `tracing` target names for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use rowview_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
