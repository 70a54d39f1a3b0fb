//! The sortable list-view model.
//!
//! This module provides the types a view binds to:
//!
//! - [`RowItem`]: the trait row types implement
//! - [`SortedRows`]: the owned, ordered collection of rows
//! - [`SortKey`], [`SortSpec`], [`SortOrder`]: the active sort selection
//! - [`ColumnSet`], [`ColumnSpec`]: per-column configuration
//! - [`RowSignals`]: change notifications a view connects to
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌─────────────┐
//! │  SortedRows  │────>│ RowSignals │────>│    View     │
//! │ (owns items) │     │            │     │ (elsewhere) │
//! └──────────────┘     └────────────┘     └─────────────┘
//!        │
//!        │  view permutation over an item arena;
//!        │  ordering derived from SortKey + RowItem::compare
//!        ▼
//! ┌──────────────┐
//! │  ColumnSet   │  titles, default directions, default widths
//! └──────────────┘
//! ```
//!
//! The view queries rows by view position; the model recomputes the
//! permutation whenever the sort key changes or [`SortedRows::sort`] is
//! called after a batch of insertions.

mod column;
mod item;
mod rows;
mod sort;

pub use column::{ColumnSet, ColumnSpec, SortOrder};
pub use item::RowItem;
pub use rows::{RowSignals, SortedRows};
pub use sort::{SortKey, SortSpec};
