//! The owned, ordered row collection.
//!
//! `SortedRows<T>` holds its items in an arena in insertion order and derives
//! the visible ordering as a permutation over that arena. Re-sorting permutes
//! the view; it never moves the items themselves. The collection owns its
//! items exclusively: removal hands the item back to the caller, teardown
//! drops the rest.

use rowview_core::Signal;

use crate::error::{ModelError, ModelResult};
use crate::persist::{StateStore, ViewState};

use super::column::{ColumnSet, SortOrder};
use super::item::RowItem;
use super::sort::{SortKey, SortSpec};

/// Collection of signals emitted by a [`SortedRows`].
///
/// A view connects to these to stay synchronized with the model. All
/// emission is synchronous; slots run before the mutating call returns.
pub struct RowSignals {
    /// Emitted after rows have been inserted. Args: (first row, last row)
    /// in view positions.
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been removed. Args: (first row, last row)
    /// in view positions as they were before the removal.
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted before the view permutation changes (e.g. a re-sort).
    pub layout_about_to_change: Signal<()>,

    /// Emitted after the view permutation has changed.
    pub layout_changed: Signal<()>,

    /// Emitted after all rows have been removed at once.
    pub model_reset: Signal<()>,

    /// Emitted when the primary sort selection changes.
    /// Args: (column id, direction) - what a header would show as its
    /// sort indicator.
    pub sort_changed: Signal<(usize, SortOrder)>,
}

impl Default for RowSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSignals {
    /// Creates a new set of row signals.
    pub fn new() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
            model_reset: Signal::new(),
            sort_changed: Signal::new(),
        }
    }
}

/// A sortable, owned collection of rows.
///
/// The collection maintains a current [`SortKey`] and re-sorts on demand.
/// Sorting is stable with respect to the prior view order, so rows that
/// compare equal under the key keep their relative positions and repeated
/// sorts are idempotent.
///
/// Column layout (visual order and widths) is carried here as well so it can
/// round-trip through a [`StateStore`] together with the sort selection,
/// keyed by the name given at construction.
pub struct SortedRows<T> {
    /// Store key, unique per list instance in the application.
    name: String,
    columns: ColumnSet,
    /// Item arena in insertion order.
    items: Vec<T>,
    /// View position -> arena index.
    view_to_item: Vec<usize>,
    /// Arena index -> view position.
    item_to_view: Vec<usize>,
    key: SortKey,
    /// Visual column order, indexed by visual position.
    column_order: Vec<usize>,
    /// Column widths, indexed by column id.
    column_widths: Vec<f32>,
    signals: RowSignals,
}

impl<T: RowItem> SortedRows<T> {
    /// Creates an empty collection.
    ///
    /// The initial sort key is the first column at its declared default
    /// direction, with no tiebreak; column order and widths start at the
    /// defaults declared in `columns`.
    pub fn new(name: impl Into<String>, columns: ColumnSet) -> Self {
        let key = SortKey::single(SortSpec::new(0, columns.default_order(0)));
        let column_order = columns.identity_order();
        let column_widths = columns.default_widths();
        Self {
            name: name.into(),
            columns,
            items: Vec::new(),
            view_to_item: Vec::new(),
            item_to_view: Vec::new(),
            key,
            column_order,
            column_widths,
            signals: RowSignals::new(),
        }
    }

    /// Returns the store key for this list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column set.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Returns the signals for this collection.
    pub fn signals(&self) -> &RowSignals {
        &self.signals
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.view_to_item.len()
    }

    /// Returns `true` if the collection holds no rows.
    pub fn is_empty(&self) -> bool {
        self.view_to_item.is_empty()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Inserts an item at the given view position, taking ownership.
    ///
    /// Appending at `len()` is allowed; positions past that are rejected.
    /// The insertion does not re-sort; callers typically insert a batch and
    /// then call [`sort`](Self::sort) once, so the position only matters
    /// until then.
    pub fn insert(&mut self, position: usize, item: T) -> ModelResult<()> {
        let len = self.view_to_item.len();
        if position > len {
            return Err(ModelError::OutOfRange {
                index: position,
                len,
            });
        }

        let arena = self.items.len();
        self.items.push(item);
        self.view_to_item.insert(position, arena);
        self.rebuild_inverse();
        self.signals.rows_inserted.emit((position, position));
        Ok(())
    }

    /// Appends an item at the end of the view.
    pub fn push(&mut self, item: T) {
        let position = self.view_to_item.len();
        // Appending at len() cannot fail.
        let _ = self.insert(position, item);
    }

    /// Removes the item at the given view position and returns it.
    ///
    /// Rows after the position shift down by one. No mutation occurs on
    /// failure.
    pub fn remove(&mut self, index: usize) -> ModelResult<T> {
        let len = self.view_to_item.len();
        if index >= len {
            return Err(ModelError::OutOfRange { index, len });
        }

        let arena = self.view_to_item.remove(index);
        let item = self.items.remove(arena);
        // The arena shrank; slide view slots past the removed item down.
        for slot in &mut self.view_to_item {
            if *slot > arena {
                *slot -= 1;
            }
        }
        self.rebuild_inverse();
        self.signals.rows_removed.emit((index, index));
        Ok(item)
    }

    /// Removes and drops all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.view_to_item.clear();
        self.item_to_view.clear();
        self.signals.model_reset.emit(());
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Returns the current sort key by value.
    pub fn sort_key(&self) -> SortKey {
        self.key
    }

    /// Replaces the sort key and re-sorts the view.
    ///
    /// Both column ids must exist in the column set.
    pub fn set_sort_key(&mut self, key: SortKey) -> ModelResult<()> {
        self.columns.check(key.primary().column)?;
        if let Some(secondary) = key.secondary() {
            self.columns.check(secondary.column)?;
        }

        self.key = key;
        self.sort();
        self.emit_sort_changed();
        Ok(())
    }

    /// Replaces the sort key with a single column and direction, leaving the
    /// tiebreak column unset, and re-sorts the view.
    pub fn set_sort(&mut self, column: usize, order: SortOrder) -> ModelResult<()> {
        self.set_sort_key(SortKey::single(SortSpec::new(column, order)))
    }

    /// Handles a header click on the given column.
    ///
    /// Clicking the current primary column flips its direction. Clicking a
    /// different column makes it primary at its declared default direction
    /// and demotes the previous primary to the tiebreak slot, preserving its
    /// last direction. The view is re-sorted either way.
    pub fn header_clicked(&mut self, column: usize) -> ModelResult<()> {
        self.columns.check(column)?;

        let primary = self.key.primary();
        self.key = if column == primary.column {
            self.key.with_primary_reversed()
        } else {
            SortKey::with_secondary(
                SortSpec::new(column, self.columns.default_order(column)),
                primary,
            )
        };

        self.sort();
        self.emit_sort_changed();
        Ok(())
    }

    /// Re-applies the current sort key to reorder the view.
    ///
    /// The sort is stable with respect to the prior view order, which makes
    /// it idempotent: sorting twice without an intervening mutation yields
    /// the same order. Sorting an empty collection is a no-op.
    pub fn sort(&mut self) {
        if self.view_to_item.is_empty() {
            return;
        }

        tracing::debug!(
            target: "rowview::sort",
            rows = self.view_to_item.len(),
            column = self.key.primary().column,
            "re-sorting view"
        );

        self.signals.layout_about_to_change.emit(());
        let items = &self.items;
        let key = self.key;
        self.view_to_item
            .sort_by(|&a, &b| key.compare(&items[a], &items[b]));
        self.rebuild_inverse();
        self.signals.layout_changed.emit(());
    }

    /// Compares two rows under the current sort key.
    pub fn compare_rows(&self, a: &T, b: &T) -> std::cmp::Ordering {
        self.key.compare(a, b)
    }

    // -------------------------------------------------------------------------
    // Read side
    // -------------------------------------------------------------------------

    /// Returns the row at the given view position.
    pub fn row(&self, index: usize) -> Option<&T> {
        self.view_to_item
            .get(index)
            .map(|&arena| &self.items[arena])
    }

    /// Iterates over the rows in view order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.view_to_item.iter().map(|&arena| &self.items[arena])
    }

    /// Returns the display text for the row at the given view position in
    /// the given column.
    pub fn display_text(&self, index: usize, column: usize) -> ModelResult<String> {
        self.columns.check(column)?;
        let row = self.row(index).ok_or(ModelError::OutOfRange {
            index,
            len: self.view_to_item.len(),
        })?;
        Ok(row.display_text(column))
    }

    /// Returns the image index for the row at the given view position.
    pub fn image_index(&self, index: usize) -> ModelResult<Option<usize>> {
        let row = self.row(index).ok_or(ModelError::OutOfRange {
            index,
            len: self.view_to_item.len(),
        })?;
        Ok(row.image_index())
    }

    // -------------------------------------------------------------------------
    // Column layout
    // -------------------------------------------------------------------------

    /// Returns the visual column order (visual position -> column id).
    pub fn column_order(&self) -> &[usize] {
        &self.column_order
    }

    /// Sets the visual column order.
    ///
    /// `order` must be a permutation of the column ids.
    pub fn set_column_order(&mut self, order: Vec<usize>) -> ModelResult<()> {
        Self::check_permutation(&order, self.columns.len())?;
        self.column_order = order;
        Ok(())
    }

    /// Returns the width of a column, by column id.
    pub fn column_width(&self, column: usize) -> ModelResult<f32> {
        self.columns.check(column)?;
        Ok(self.column_widths[column])
    }

    /// Sets the width of a column, by column id.
    pub fn set_column_width(&mut self, column: usize, width: f32) -> ModelResult<()> {
        self.columns.check(column)?;
        self.column_widths[column] = width;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Returns the current view state (column order, widths, primary sort).
    pub fn view_state(&self) -> ViewState {
        let primary = self.key.primary();
        ViewState {
            column_order: self.column_order.clone(),
            column_widths: self.column_widths.clone(),
            sort_column: primary.column,
            sort_order: primary.order,
        }
    }

    /// Loads previously saved view state from the store, keyed by this
    /// list's name.
    ///
    /// Returns `true` if a stored state was found and applied. An absent
    /// entry, a store failure, or a state that no longer fits the current
    /// column set all leave the built-in defaults in place; the store
    /// failure is logged and otherwise ignored.
    pub fn load_state<S: StateStore + ?Sized>(&mut self, store: &S) -> bool {
        let state = match store.load(&self.name) {
            Ok(Some(state)) => state,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(
                    target: "rowview::persist",
                    list = %self.name,
                    error = %err,
                    "could not load view state, keeping defaults"
                );
                return false;
            }
        };

        if !self.state_fits(&state) {
            tracing::warn!(
                target: "rowview::persist",
                list = %self.name,
                "stored view state does not match the column set, keeping defaults"
            );
            return false;
        }

        self.column_order = state.column_order;
        self.column_widths = state.column_widths;
        // Only the primary selection is persisted; the tiebreak resets.
        self.key = SortKey::single(SortSpec::new(state.sort_column, state.sort_order));
        self.sort();
        self.emit_sort_changed();
        true
    }

    /// Saves the current view state to the store, keyed by this list's name.
    ///
    /// A store failure only costs convenience on the next start, so it is
    /// logged and otherwise ignored.
    pub fn save_state<S: StateStore + ?Sized>(&self, store: &S) {
        let state = self.view_state();
        if let Err(err) = store.save(&self.name, &state) {
            tracing::warn!(
                target: "rowview::persist",
                list = %self.name,
                error = %err,
                "could not save view state"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn rebuild_inverse(&mut self) {
        self.item_to_view.resize(self.items.len(), 0);
        for (view, &arena) in self.view_to_item.iter().enumerate() {
            self.item_to_view[arena] = view;
        }
    }

    fn emit_sort_changed(&self) {
        let primary = self.key.primary();
        self.signals
            .sort_changed
            .emit((primary.column, primary.order));
    }

    fn state_fits(&self, state: &ViewState) -> bool {
        Self::check_permutation(&state.column_order, self.columns.len()).is_ok()
            && state.column_widths.len() == self.columns.len()
            && state.sort_column < self.columns.len()
    }

    fn check_permutation(order: &[usize], expected: usize) -> ModelResult<()> {
        if order.len() != expected {
            return Err(ModelError::InvalidColumnOrder { expected });
        }
        let mut seen = vec![false; expected];
        for &column in order {
            if column >= expected || seen[column] {
                return Err(ModelError::InvalidColumnOrder { expected });
            }
            seen[column] = true;
        }
        Ok(())
    }
}
