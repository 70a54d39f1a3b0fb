//! Per-column configuration.
//!
//! A [`ColumnSet`] describes the columns of a list: title, default sort
//! direction and default width. It is supplied once at construction and acts
//! as the authority on which column ids are valid.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns `true` for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// Configuration for a single column.
///
/// The default sort direction is the direction the column sorts in when it is
/// first selected as the primary sort column. Text-like columns typically
/// default to ascending, size-like columns to descending so the largest
/// entries surface first.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Header title.
    pub title: String,
    /// Direction used when this column first becomes the primary sort column.
    pub default_order: SortOrder,
    /// Width the column starts out with when no persisted state applies.
    pub default_width: f32,
}

impl ColumnSpec {
    /// Creates a column spec with the given title, ascending default
    /// direction and the standard default width.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_order: SortOrder::Ascending,
            default_width: DEFAULT_COLUMN_WIDTH,
        }
    }

    /// Sets the default sort direction.
    pub fn with_default_order(mut self, order: SortOrder) -> Self {
        self.default_order = order;
        self
    }

    /// Sets the default width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.default_width = width;
        self
    }
}

/// The fixed set of columns for one list.
///
/// Column ids are indices into this set. The set is immutable after
/// construction; column order and widths as shown on screen are view state
/// held by the list itself (and persisted), not by the `ColumnSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSet {
    columns: Vec<ColumnSpec>,
}

impl ColumnSet {
    /// Creates a column set.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is empty; a list without columns cannot carry a
    /// sort key.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        assert!(!columns.is_empty(), "a column set must have at least one column");
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns. Always `false` for a
    /// constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the spec for a column, or `None` if the id is out of range.
    pub fn get(&self, column: usize) -> Option<&ColumnSpec> {
        self.columns.get(column)
    }

    /// Validates a column id.
    pub fn check(&self, column: usize) -> ModelResult<()> {
        if column < self.columns.len() {
            Ok(())
        } else {
            Err(ModelError::InvalidColumn {
                column,
                column_count: self.columns.len(),
            })
        }
    }

    /// Returns the default sort direction for a column.
    ///
    /// Out-of-range ids fall back to ascending; callers that can surface an
    /// error should [`check`](Self::check) first.
    pub fn default_order(&self, column: usize) -> SortOrder {
        self.columns
            .get(column)
            .map(|c| c.default_order)
            .unwrap_or_default()
    }

    /// Returns the default widths, indexed by column id.
    pub fn default_widths(&self) -> Vec<f32> {
        self.columns.iter().map(|c| c.default_width).collect()
    }

    /// Returns the identity column order (0, 1, 2, ...).
    pub fn identity_order(&self) -> Vec<usize> {
        (0..self.columns.len()).collect()
    }

    /// Iterates over the column specs in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_columns() -> ColumnSet {
        ColumnSet::new(vec![
            ColumnSpec::new("Name"),
            ColumnSpec::new("Size")
                .with_default_order(SortOrder::Descending)
                .with_width(60.0),
            ColumnSpec::new("Description").with_width(170.0),
        ])
    }

    #[test]
    fn test_sort_order_reversed() {
        assert_eq!(SortOrder::Ascending.reversed(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.reversed(), SortOrder::Ascending);
        assert!(SortOrder::Ascending.is_ascending());
        assert!(!SortOrder::Descending.is_ascending());
    }

    #[test]
    fn test_check_bounds() {
        let columns = three_columns();
        assert!(columns.check(0).is_ok());
        assert!(columns.check(2).is_ok());
        assert_eq!(
            columns.check(3),
            Err(ModelError::InvalidColumn {
                column: 3,
                column_count: 3
            })
        );
    }

    #[test]
    fn test_default_order_per_column() {
        let columns = three_columns();
        assert_eq!(columns.default_order(0), SortOrder::Ascending);
        assert_eq!(columns.default_order(1), SortOrder::Descending);
    }

    #[test]
    fn test_defaults() {
        let columns = three_columns();
        assert_eq!(columns.default_widths(), vec![100.0, 60.0, 170.0]);
        assert_eq!(columns.identity_order(), vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "at least one column")]
    fn test_empty_column_set_panics() {
        ColumnSet::new(Vec::new());
    }
}
