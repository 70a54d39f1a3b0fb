//! rowview - a sortable list-view model.
//!
//! This crate provides the model half of a multi-column list view: an owned
//! collection of rows, a two-level sort key (primary column plus tiebreak
//! column, each with its own direction), and persistence of the column layout
//! and sort selection across sessions. Rendering, input handling and window
//! plumbing are deliberately absent; a view observes the model through its
//! signals and queries rows by view position.
//!
//! # Core Types
//!
//! - [`RowItem`]: trait implemented by row types (display text, optional
//!   image index, column-wise comparison)
//! - [`SortedRows`]: the ordered collection itself
//! - [`SortKey`] / [`SortSpec`] / [`SortOrder`]: the sort selection
//! - [`ColumnSet`] / [`ColumnSpec`]: per-column configuration (title, default
//!   sort direction, default width)
//! - [`StateStore`] / [`ViewState`]: pluggable persistence of column order,
//!   widths and the primary sort selection
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use rowview::{ColumnSet, ColumnSpec, RowItem, SortOrder, SortedRows};
//!
//! struct Entry {
//!     name: String,
//!     size: u64,
//! }
//!
//! impl RowItem for Entry {
//!     fn display_text(&self, column: usize) -> String {
//!         match column {
//!             0 => self.name.clone(),
//!             1 => self.size.to_string(),
//!             _ => unreachable!("undefined column"),
//!         }
//!     }
//!
//!     fn compare(&self, other: &Self, column: usize) -> Ordering {
//!         match column {
//!             0 => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
//!             1 => self.size.cmp(&other.size),
//!             _ => unreachable!("undefined column"),
//!         }
//!     }
//! }
//!
//! let columns = ColumnSet::new(vec![
//!     ColumnSpec::new("Name"),
//!     ColumnSpec::new("Size").with_default_order(SortOrder::Descending),
//! ]);
//!
//! let mut rows = SortedRows::new("example", columns);
//! rows.insert(0, Entry { name: "b.txt".into(), size: 10 }).unwrap();
//! rows.insert(1, Entry { name: "a.txt".into(), size: 20 }).unwrap();
//! rows.sort();
//!
//! assert_eq!(rows.row(0).unwrap().name, "a.txt");
//!
//! // Clicking the "Size" header sorts by size, descending by default,
//! // with the previous primary column demoted to tiebreak.
//! rows.header_clicked(1).unwrap();
//! assert_eq!(rows.row(0).unwrap().size, 20);
//! ```

pub mod error;
pub mod model;
pub mod persist;

pub use error::{ModelError, ModelResult};
pub use model::{
    ColumnSet, ColumnSpec, RowItem, RowSignals, SortKey, SortOrder, SortSpec, SortedRows,
};
pub use persist::{
    JsonStateStore, MemoryStateStore, StateError, StateErrorKind, StateResult, StateStore,
    ViewState,
};

// Re-export the signal primitives so downstream users don't need a direct
// dependency on rowview-core.
pub use rowview_core::{ConnectionGuard, ConnectionId, Signal};
