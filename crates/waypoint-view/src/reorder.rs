//! Immutable list reordering helpers.
//!
//! Drag-and-drop collaborators hand these the caller-owned lists; the
//! helpers always return fresh vectors and never mutate their inputs.
//! Out-of-range indices are typed errors, not panics.

use waypoint_core::error::{Result, WaypointError};

/// Move one element within a list, returning a new list.
///
/// `from` addresses the element to move; `to` is its position in the
/// resulting list.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    if from >= items.len() {
        return Err(WaypointError::IndexOutOfBounds {
            index: from,
            len: items.len(),
        });
    }
    if to >= items.len() {
        return Err(WaypointError::IndexOutOfBounds {
            index: to,
            len: items.len(),
        });
    }
    let mut result = items.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    Ok(result)
}

/// Move one element from `source` into `destination`, returning both new
/// lists.
///
/// `from` addresses the element in `source`; `to` is its position in the
/// resulting destination (so `to == destination.len()` appends).
pub fn move_between<T: Clone>(
    source: &[T],
    destination: &[T],
    from: usize,
    to: usize,
) -> Result<(Vec<T>, Vec<T>)> {
    if from >= source.len() {
        return Err(WaypointError::IndexOutOfBounds {
            index: from,
            len: source.len(),
        });
    }
    if to > destination.len() {
        return Err(WaypointError::IndexOutOfBounds {
            index: to,
            len: destination.len(),
        });
    }
    let mut new_source = source.to_vec();
    let moved = new_source.remove(from);
    let mut new_destination = destination.to_vec();
    new_destination.insert(to, moved);
    Ok((new_source, new_destination))
}
