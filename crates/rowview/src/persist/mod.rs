//! Persistence of per-list view state.
//!
//! A list saves its column order, column widths and primary sort selection
//! under its name so the layout survives restarts. The [`StateStore`] trait
//! abstracts the backing storage; [`JsonStateStore`] keeps all lists of an
//! application in a single JSON file, [`MemoryStateStore`] backs tests and
//! applications that opt out of persistence.
//!
//! Persistence is strictly best-effort: a missing or unreadable store means
//! the list starts from its built-in defaults, never an error surfaced to
//! the user.

mod state;
mod store;

pub use state::{StateError, StateErrorKind, StateResult, ViewState};
pub use store::{JsonStateStore, MemoryStateStore, StateStore};
