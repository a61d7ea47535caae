//! # waypoint-view
//!
//! Filtering, searching, stable sorting, and list reordering over
//! WAYPOINT task and customer collections.
//!
//! This crate provides:
//! - [`sort`] - Generic comparator-driven stable sorting
//! - [`filter`] - Task/customer filter predicates, text search, and the
//!   filter -> search -> sort pipeline
//! - [`reorder`] - Immutable drag-and-drop list helpers
//!
//! ## Example
//!
//! ```
//! use waypoint_core::models::Task;
//! use waypoint_view::{ranked_tasks, SortingOrder, TaskFilter, TaskSort};
//!
//! let tasks = vec![
//!     Task::new(1, 1, "Fix bug"),
//!     Task::new(2, 1, "Add feature").with_completed(true),
//! ];
//! let view = ranked_tasks(&tasks, TaskFilter::NotCompleted, "fix", TaskSort::Name, SortingOrder::Ascending);
//! assert_eq!(view.len(), 1);
//! ```

pub mod filter;
pub mod reorder;
pub mod sort;

// Re-export main types
pub use filter::{
    filter_tasks, ranked_tasks, search_tasks, sort_customers, sort_tasks, CustomerSort,
    TaskFilter, TaskSort,
};
pub use reorder::{move_between, reorder};
pub use sort::{sort_key_numeric, sort_key_text, sorted, Comparison, SortingOrder};
