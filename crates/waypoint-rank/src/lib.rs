//! # waypoint-rank
//!
//! Rating aggregation, customer weighting, and prioritization for
//! WAYPOINT.
//!
//! This crate provides:
//! - [`weight`] - Equal-share customer weights with planner overrides
//! - [`aggregate`] - Per-dimension means/sums and weighted value sums
//! - [`priority`] - Sentinel-valued priority scores
//! - [`missing`] - Role-dependent missing-rating resolution
//!
//! Everything here is a synchronous pure function over immutable
//! snapshots: no I/O, no shared state, safe to call concurrently.
//!
//! ## Example
//!
//! ```
//! use waypoint_core::models::{Task, TaskRating};
//! use waypoint_core::types::RatingDimension;
//! use waypoint_rank::priority::task_priority;
//!
//! let task = Task::new(1, 1, "Search rework")
//!     .with_rating(TaskRating::new(1, 7, RatingDimension::BusinessValue, 8.0))
//!     .with_rating(TaskRating::new(1, 8, RatingDimension::RequiredWork, 4.0));
//! assert_eq!(task_priority(&task), 2.0);
//! ```

pub mod aggregate;
pub mod missing;
pub mod priority;
pub mod weight;

// Re-export main types
pub use aggregate::{
    average_rating, average_ratings_by_dimension, average_value_and_work, dimension_sum,
    total_value_and_work, weighted_value_sum, ValueAndWork,
};
pub use missing::{
    customer_missing, missing_customers, missing_developers, notification_targets,
    task_awaits_ratings, unrated_tasks_amount, visible_missing_ratings, MissingRatings,
    RepresentativeAttribution,
};
pub use priority::{
    task_priority, weighted_task_priority, PRIORITY_UNRATED_VALUE, PRIORITY_UNRATED_WORK,
};
pub use weight::{customer_weight, planner_weight};
