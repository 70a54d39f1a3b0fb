//! The persisted view state and the persistence error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::SortOrder;

/// The view state persisted for one list, keyed by the list's name.
///
/// Only the primary sort selection is stored; the tiebreak column is a
/// transient product of header clicks and resets on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Visual column order (visual position -> column id).
    pub column_order: Vec<usize>,
    /// Column widths, indexed by column id.
    pub column_widths: Vec<f32>,
    /// Primary sort column id.
    pub sort_column: usize,
    /// Primary sort direction.
    pub sort_order: SortOrder,
}

/// Error type for state store operations.
#[derive(Debug)]
pub struct StateError {
    kind: StateErrorKind,
    /// The backing file, if the store has one.
    path: Option<PathBuf>,
    source: Option<io::Error>,
}

/// The kind of state store error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateErrorKind {
    /// The backing storage could not be read or written.
    Io,
    /// The backing storage exists but does not parse.
    InvalidData,
    /// The store is not usable at all (e.g. no writable location).
    Unavailable,
}

impl StateError {
    /// Creates a new state error.
    pub fn new(kind: StateErrorKind, path: Option<PathBuf>, source: Option<io::Error>) -> Self {
        Self { kind, path, source }
    }

    /// Creates an I/O error for the given backing file.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(StateErrorKind::Io, Some(path.into()), Some(source))
    }

    /// Creates an invalid-data error for the given backing file.
    pub fn invalid_data(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(StateErrorKind::InvalidData, Some(path.into()), Some(source))
    }

    /// Creates an unavailable error with no backing file.
    pub fn unavailable() -> Self {
        Self::new(StateErrorKind::Unavailable, None, None)
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> StateErrorKind {
        self.kind
    }

    /// Returns the backing file involved, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", self.kind, path.display()),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl fmt::Display for StateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateErrorKind::Io => write!(f, "state store I/O error"),
            StateErrorKind::InvalidData => write!(f, "state store holds invalid data"),
            StateErrorKind::Unavailable => write!(f, "state store unavailable"),
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// A specialized Result type for state store operations.
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StateError::io(
            "/tmp/state.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "state store I/O error: /tmp/state.json");
        assert_eq!(err.kind(), StateErrorKind::Io);

        let err = StateError::unavailable();
        assert_eq!(err.to_string(), "state store unavailable");
        assert!(err.path().is_none());
    }

    #[test]
    fn test_view_state_json_roundtrip() {
        let state = ViewState {
            column_order: vec![2, 0, 1],
            column_widths: vec![120.0, 60.0, 180.0],
            sort_column: 1,
            sort_order: SortOrder::Descending,
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
