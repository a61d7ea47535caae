//! Priority scores.
//!
//! A task's priority is its mean business value per unit of mean required
//! work, with sentinel values ordering unrated tasks below every rated
//! one: `-2` when value is unrated, `-1` when only work is unrated. The
//! sentinels are part of the sort contract and must not change.

use tracing::trace;

use waypoint_core::models::{Customer, Roadmap, Task};
use waypoint_core::types::RatingDimension;

use crate::aggregate::{average_rating, weighted_value_sum};

/// Sentinel priority for a task without business-value ratings.
pub const PRIORITY_UNRATED_VALUE: f64 = -2.0;

/// Sentinel priority for a task with value ratings but no work ratings.
pub const PRIORITY_UNRATED_WORK: f64 = -1.0;

/// Unweighted priority: mean business value divided by mean required work.
///
/// Returns [`PRIORITY_UNRATED_VALUE`] when the task has no business-value
/// ratings and [`PRIORITY_UNRATED_WORK`] when it has no work ratings.
pub fn task_priority(task: &Task) -> f64 {
    let value = match average_rating(task, RatingDimension::BusinessValue) {
        Some(value) => value,
        None => return PRIORITY_UNRATED_VALUE,
    };
    let work = match average_rating(task, RatingDimension::RequiredWork) {
        Some(work) => work,
        None => return PRIORITY_UNRATED_WORK,
    };
    let priority = value / work;
    trace!(task_id = task.id, priority, "task priority");
    priority
}

/// Customer-weighted priority: weighted value sum divided by mean required
/// work.
///
/// Same sentinel scheme as [`task_priority`], except the value sentinel
/// also covers a weighted sum of zero (a task whose every rating customer
/// carries zero weight ranks with the unrated).
pub fn weighted_task_priority(task: &Task, customers: &[Customer], roadmap: &Roadmap) -> f64 {
    let weighted_sum = weighted_value_sum(task, customers, roadmap);
    if weighted_sum <= 0.0 {
        return PRIORITY_UNRATED_VALUE;
    }
    match average_rating(task, RatingDimension::RequiredWork) {
        Some(work) => weighted_sum / work,
        None => PRIORITY_UNRATED_WORK,
    }
}
