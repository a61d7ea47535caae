//! # WAYPOINT
//!
//! Rating aggregation and prioritization core for roadmap planning.
//!
//! Teams track tasks on roadmaps and collect ratings on two axes,
//! business value and required work, from developers and customer
//! representatives. This workspace turns those sparse multi-rater ratings
//! into weighted priority scores, per-role missing-rating views, and
//! filtered/sorted task lists. It has no UI, network, or storage surface
//! of its own: callers hand in immutable snapshots and read back derived
//! values.
//!
//! The facade re-exports the member crates:
//! - [`core`] - entity models, shared types, errors
//! - [`access`] - role/permission bitmask codec
//! - [`rank`] - weighting, aggregation, priorities, missing ratings
//! - [`view`] - filtering, searching, stable sorting, reordering
//!
//! ## Example
//!
//! ```
//! use waypoint::core::models::{Task, TaskRating};
//! use waypoint::core::types::RatingDimension;
//! use waypoint::rank::priority::task_priority;
//! use waypoint::view::{ranked_tasks, SortingOrder, TaskFilter, TaskSort};
//!
//! let tasks = vec![
//!     Task::new(1, 1, "Checkout flow")
//!         .with_rating(TaskRating::new(1, 7, RatingDimension::BusinessValue, 8.0))
//!         .with_rating(TaskRating::new(1, 8, RatingDimension::RequiredWork, 2.0)),
//!     Task::new(2, 1, "Search rework"),
//! ];
//!
//! assert_eq!(task_priority(&tasks[0]), 4.0);
//!
//! let view = ranked_tasks(&tasks, TaskFilter::ShowAll, "", TaskSort::Ratings, SortingOrder::Descending);
//! assert_eq!(view[0].id, 1);
//! ```

pub use waypoint_access as access;
pub use waypoint_core as core;
pub use waypoint_rank as rank;
pub use waypoint_view as view;
