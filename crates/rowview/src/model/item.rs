//! The row trait.

use std::cmp::Ordering;

/// Trait for items that can appear as rows in a [`SortedRows`] collection.
///
/// A row provides display text per column, an optional image index for the
/// leading icon, and a column-wise comparison against other rows of the same
/// type.
///
/// # Comparison Contract
///
/// [`compare`](RowItem::compare) must be a strict weak ordering for every
/// column the host list defines: antisymmetric, transitive and consistent
/// with equality. The collection does not verify this at runtime; a
/// comparison that violates it produces an arbitrary (but memory-safe) row
/// order. Being asked to compare on a column id the list does not define is a
/// programming error; implementations conventionally `unreachable!` there.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use rowview::RowItem;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl RowItem for Person {
///     fn display_text(&self, column: usize) -> String {
///         match column {
///             0 => self.name.clone(),
///             1 => self.age.to_string(),
///             _ => unreachable!("undefined column"),
///         }
///     }
///
///     fn compare(&self, other: &Self, column: usize) -> Ordering {
///         match column {
///             0 => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
///             1 => self.age.cmp(&other.age),
///             _ => unreachable!("undefined column"),
///         }
///     }
/// }
/// ```
///
/// [`SortedRows`]: crate::SortedRows
pub trait RowItem: Send + Sync {
    /// Returns the text shown for this row in the given column.
    fn display_text(&self, column: usize) -> String;

    /// Returns the index of this row's icon in the host's image list, if any.
    fn image_index(&self) -> Option<usize> {
        None
    }

    /// Compares this row to another on a single column.
    fn compare(&self, other: &Self, column: usize) -> Ordering;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl RowItem for Named {
        fn display_text(&self, _column: usize) -> String {
            self.0.to_string()
        }

        fn compare(&self, other: &Self, _column: usize) -> Ordering {
            self.0.cmp(other.0)
        }
    }

    #[test]
    fn test_default_image_index() {
        let row = Named("a");
        assert_eq!(row.image_index(), None);
    }

    #[test]
    fn test_compare() {
        let a = Named("a");
        let b = Named("b");
        assert_eq!(a.compare(&b, 0), Ordering::Less);
        assert_eq!(b.compare(&a, 0), Ordering::Greater);
        assert_eq!(a.compare(&a, 0), Ordering::Equal);
    }
}
