//! Error types shared by the WAYPOINT crates.
//!
//! Missing ratings are a normal state, not an error; they surface as
//! absent map keys and sentinel priorities. Errors here cover genuine
//! precondition violations, which fail fast instead of propagating
//! NaN/Infinity into derived values.

use thiserror::Error;

/// Result type alias using [`WaypointError`].
pub type Result<T> = std::result::Result<T, WaypointError>;

/// Errors raised by WAYPOINT computations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// An operation that divides by collection size received an empty
    /// collection.
    #[error("empty collection: {what}")]
    EmptyCollection {
        /// What was empty, e.g. "tasks" or "customers".
        what: &'static str,
    },

    /// A reorder operation received an out-of-range index.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Snapshot (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WaypointError {
    /// Shorthand for an [`WaypointError::EmptyCollection`] error.
    pub fn empty(what: &'static str) -> Self {
        Self::EmptyCollection { what }
    }
}
