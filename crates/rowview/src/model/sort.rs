//! The two-level sort key.
//!
//! A [`SortKey`] names a primary column and direction, and optionally a
//! secondary column and direction used only to break primary ties. We sort by
//! the primary column, and if two rows are equal there, by the secondary.

use std::cmp::Ordering;

use super::column::SortOrder;
use super::item::RowItem;

/// One column/direction pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// The column id to compare on.
    pub column: usize,
    /// The direction to apply to the comparison result.
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates a spec for the given column and direction.
    pub fn new(column: usize, order: SortOrder) -> Self {
        Self { column, order }
    }

    /// Applies this spec's direction to a raw comparison result.
    fn apply(self, raw: Ordering) -> Ordering {
        match self.order {
            SortOrder::Ascending => raw,
            SortOrder::Descending => raw.reverse(),
        }
    }
}

/// A sorting specification: primary column plus optional tiebreak column.
///
/// The primary and secondary columns may name the same column; the tiebreak
/// is then a no-op, since the secondary comparison only runs on rows the
/// primary column already considers equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    primary: SortSpec,
    secondary: Option<SortSpec>,
}

impl SortKey {
    /// Creates a key with no tiebreak column. Rows equal on the primary
    /// column keep their relative view order.
    pub fn single(primary: SortSpec) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Creates a key with a tiebreak column.
    pub fn with_secondary(primary: SortSpec, secondary: SortSpec) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Returns the primary column/direction.
    pub fn primary(&self) -> SortSpec {
        self.primary
    }

    /// Returns the tiebreak column/direction, if one is set.
    pub fn secondary(&self) -> Option<SortSpec> {
        self.secondary
    }

    /// Returns this key with the primary direction flipped.
    pub fn with_primary_reversed(self) -> Self {
        Self {
            primary: SortSpec::new(self.primary.column, self.primary.order.reversed()),
            secondary: self.secondary,
        }
    }

    /// Compares two rows under this key.
    ///
    /// The primary comparison runs first, direction-adjusted. Only on
    /// equality does the secondary comparison run, also direction-adjusted.
    /// Without a secondary column, primary ties compare as `Equal`.
    pub fn compare<T: RowItem>(&self, a: &T, b: &T) -> Ordering {
        let primary = self.primary.apply(a.compare(b, self.primary.column));
        if primary != Ordering::Equal {
            return primary;
        }

        match self.secondary {
            Some(secondary) => secondary.apply(a.compare(b, secondary.column)),
            None => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        text: &'static str,
        number: u64,
    }

    impl Pair {
        fn new(text: &'static str, number: u64) -> Self {
            Self { text, number }
        }
    }

    impl RowItem for Pair {
        fn display_text(&self, column: usize) -> String {
            match column {
                0 => self.text.to_string(),
                1 => self.number.to_string(),
                _ => unreachable!("undefined column"),
            }
        }

        fn compare(&self, other: &Self, column: usize) -> Ordering {
            match column {
                0 => self.text.cmp(other.text),
                1 => self.number.cmp(&other.number),
                _ => unreachable!("undefined column"),
            }
        }
    }

    #[test]
    fn test_primary_direction() {
        let a = Pair::new("a", 1);
        let b = Pair::new("b", 2);

        let asc = SortKey::single(SortSpec::new(0, SortOrder::Ascending));
        assert_eq!(asc.compare(&a, &b), Ordering::Less);

        let desc = SortKey::single(SortSpec::new(0, SortOrder::Descending));
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_tie_without_secondary_is_equal() {
        let a = Pair::new("same", 1);
        let b = Pair::new("same", 2);

        let key = SortKey::single(SortSpec::new(0, SortOrder::Ascending));
        assert_eq!(key.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_secondary_breaks_ties() {
        let a = Pair::new("same", 1);
        let b = Pair::new("same", 2);

        let key = SortKey::with_secondary(
            SortSpec::new(0, SortOrder::Ascending),
            SortSpec::new(1, SortOrder::Descending),
        );
        // Equal on text, so the descending number comparison decides.
        assert_eq!(key.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_secondary_ignored_when_primary_decides() {
        let a = Pair::new("a", 1);
        let b = Pair::new("b", 2);

        let key = SortKey::with_secondary(
            SortSpec::new(0, SortOrder::Ascending),
            SortSpec::new(1, SortOrder::Descending),
        );
        assert_eq!(key.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_degenerate_tiebreak() {
        let a = Pair::new("same", 1);
        let b = Pair::new("same", 2);

        // Secondary names the same column as the primary: ties stay ties.
        let key = SortKey::with_secondary(
            SortSpec::new(0, SortOrder::Ascending),
            SortSpec::new(0, SortOrder::Descending),
        );
        assert_eq!(key.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_with_primary_reversed() {
        let key = SortKey::with_secondary(
            SortSpec::new(0, SortOrder::Ascending),
            SortSpec::new(1, SortOrder::Ascending),
        );
        let flipped = key.with_primary_reversed();
        assert_eq!(flipped.primary().order, SortOrder::Descending);
        assert_eq!(flipped.secondary(), key.secondary());
    }
}
