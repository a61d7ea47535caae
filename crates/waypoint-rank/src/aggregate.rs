//! Rating aggregation.
//!
//! Pure reductions over a task's rating list: per-dimension means and
//! sums, customer-weighted value sums, and roadmap-level totals. Ratings
//! are never reordered or mutated; a dimension with zero ratings is an
//! absent key, not a zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use waypoint_core::error::{Result, WaypointError};
use waypoint_core::models::{Customer, Roadmap, Task};
use waypoint_core::types::RatingDimension;

use crate::weight::{customer_weight, planner_weight};

/// Summed or averaged business value and required work for a task set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAndWork {
    pub value: f64,
    pub work: f64,
}

/// Mean rating per dimension.
///
/// Dimensions with zero ratings are absent from the map.
pub fn average_ratings_by_dimension(task: &Task) -> HashMap<RatingDimension, f64> {
    let mut sums: HashMap<RatingDimension, (f64, usize)> = HashMap::new();
    for rating in &task.ratings {
        let entry = sums.entry(rating.dimension).or_insert((0.0, 0));
        entry.0 += rating.value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(dimension, (sum, count))| (dimension, sum / count as f64))
        .collect()
}

/// Mean rating for one dimension, `None` when the task has no ratings on
/// that dimension.
pub fn average_rating(task: &Task, dimension: RatingDimension) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for rating in &task.ratings {
        if rating.dimension != dimension {
            continue;
        }
        sum += rating.value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// Plain sum of ratings on one dimension, `0.0` when none exist.
pub fn dimension_sum(task: &Task, dimension: RatingDimension) -> f64 {
    task.ratings
        .iter()
        .filter(|r| r.dimension == dimension)
        .map(|r| r.value)
        .sum()
}

/// Customer-weighted sum of a task's business-value ratings.
///
/// Each rating's effective weight is the product of the rating customer's
/// share of the total customer weight and the planner's override weight
/// for that customer. A rating whose `for_customer` matches no known
/// customer keeps a full share of `1.0` while a known customer with zero
/// weight contributes nothing; that conflation reproduces the upstream
/// behavior and is pinned by tests.
pub fn weighted_value_sum(task: &Task, customers: &[Customer], roadmap: &Roadmap) -> f64 {
    // Share denominators use default weights only; planner overrides apply
    // as a separate multiplier below.
    let customer_values_sum: f64 = customers
        .iter()
        .filter_map(|c| customer_weight(c, customers.len(), &[]).ok())
        .sum();

    let overrides = &roadmap.planner_customer_weights;
    let sum = task
        .ratings
        .iter()
        .filter(|r| r.dimension == RatingDimension::BusinessValue)
        .map(|rating| {
            let creator = rating
                .for_customer
                .and_then(|id| customers.iter().find(|c| c.id == id));

            let creator_planner_weight = rating
                .for_customer
                .map(|id| planner_weight(overrides, id))
                .unwrap_or(1.0);

            let creator_value_weight = match creator {
                None => 1.0,
                Some(customer) => {
                    let value = customer_weight(customer, customers.len(), overrides)
                        .unwrap_or_default();
                    if value > 0.0 && customer_values_sum > 0.0 {
                        value / customer_values_sum
                    } else {
                        0.0
                    }
                }
            };

            rating.value * creator_value_weight * creator_planner_weight
        })
        .sum();

    trace!(task_id = task.id, weighted_sum = sum, "weighted value sum");
    sum
}

/// Sum of per-task mean business value and mean required work across a
/// task set. Unrated dimensions contribute `0`.
pub fn total_value_and_work(tasks: &[Task]) -> ValueAndWork {
    tasks
        .iter()
        .map(average_ratings_by_dimension)
        .fold(ValueAndWork::default(), |totals, averages| ValueAndWork {
            value: totals.value
                + averages
                    .get(&RatingDimension::BusinessValue)
                    .copied()
                    .unwrap_or(0.0),
            work: totals.work
                + averages
                    .get(&RatingDimension::RequiredWork)
                    .copied()
                    .unwrap_or(0.0),
        })
}

/// Mean of per-task mean business value and required work across a task
/// set.
///
/// An empty task set is a precondition violation and fails with
/// [`WaypointError::EmptyCollection`] rather than producing NaN.
pub fn average_value_and_work(tasks: &[Task]) -> Result<ValueAndWork> {
    if tasks.is_empty() {
        return Err(WaypointError::empty("tasks"));
    }
    let totals = total_value_and_work(tasks);
    Ok(ValueAndWork {
        value: totals.value / tasks.len() as f64,
        work: totals.work / tasks.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::models::TaskRating;

    const EPSILON: f64 = 1e-9;

    fn rated_task(id: i64, ratings: Vec<TaskRating>) -> Task {
        let mut task = Task::new(id, 1, format!("task {}", id));
        task.ratings = ratings;
        task
    }

    fn value(user: i64, value: f64) -> TaskRating {
        TaskRating::new(1, user, RatingDimension::BusinessValue, value)
    }

    fn work(user: i64, value: f64) -> TaskRating {
        TaskRating::new(1, user, RatingDimension::RequiredWork, value)
    }

    #[test]
    fn test_average_by_dimension_skips_unrated() {
        let task = rated_task(1, vec![value(1, 4.0), value(2, 8.0)]);
        let averages = average_ratings_by_dimension(&task);

        assert!((averages[&RatingDimension::BusinessValue] - 6.0).abs() < EPSILON);
        assert!(!averages.contains_key(&RatingDimension::RequiredWork));
    }

    #[test]
    fn test_average_rating_none_when_absent() {
        let task = rated_task(1, vec![work(1, 5.0)]);
        assert_eq!(average_rating(&task, RatingDimension::BusinessValue), None);
        assert_eq!(average_rating(&task, RatingDimension::RequiredWork), Some(5.0));
    }

    #[test]
    fn test_dimension_sum() {
        let task = rated_task(1, vec![value(1, 4.0), value(2, 8.0), work(1, 9.0)]);
        assert!((dimension_sum(&task, RatingDimension::BusinessValue) - 12.0).abs() < EPSILON);

        let empty = rated_task(2, vec![]);
        assert_eq!(dimension_sum(&empty, RatingDimension::BusinessValue), 0.0);
    }

    #[test]
    fn test_total_value_and_work() {
        let tasks = vec![
            rated_task(1, vec![value(1, 4.0), work(1, 2.0)]),
            rated_task(2, vec![value(1, 6.0)]),
        ];
        let totals = total_value_and_work(&tasks);
        assert!((totals.value - 10.0).abs() < EPSILON);
        assert!((totals.work - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_average_value_and_work() {
        let tasks = vec![
            rated_task(1, vec![value(1, 4.0), work(1, 2.0)]),
            rated_task(2, vec![value(1, 6.0), work(1, 4.0)]),
        ];
        let averages = average_value_and_work(&tasks).unwrap();
        assert!((averages.value - 5.0).abs() < EPSILON);
        assert!((averages.work - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_value_and_work_wire_shape() {
        let json = serde_json::to_value(ValueAndWork { value: 1.5, work: 2.0 }).unwrap();
        assert_eq!(json, serde_json::json!({ "value": 1.5, "work": 2.0 }));
    }

    #[test]
    fn test_average_value_and_work_empty_fails_fast() {
        let err = average_value_and_work(&[]).unwrap_err();
        assert!(matches!(
            err,
            WaypointError::EmptyCollection { what: "tasks" }
        ));
    }

    #[test]
    fn test_weighted_sum_equal_shares() {
        let customers = vec![Customer::new(1, "a"), Customer::new(2, "b")];
        let roadmap = Roadmap::new(1, "r");
        let task = rated_task(
            1,
            vec![
                value(10, 8.0).for_customer(1),
                value(11, 4.0).for_customer(2),
            ],
        );

        // Each customer holds half the total weight.
        let sum = weighted_value_sum(&task, &customers, &roadmap);
        assert!((sum - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_sum_planner_override_multiplies() {
        let customers = vec![Customer::new(1, "a"), Customer::new(2, "b")];
        let roadmap = Roadmap::new(1, "r").with_planner_weight(1, 2.0);
        let task = rated_task(1, vec![value(10, 8.0).for_customer(1)]);

        // Override weight feeds both the share numerator and the planner
        // multiplier: (2.0 / 1.0) * 2.0 * 8.0.
        let sum = weighted_value_sum(&task, &customers, &roadmap);
        assert!((sum - 32.0).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_sum_unknown_customer_keeps_full_share() {
        let customers = vec![Customer::new(1, "a")];
        let roadmap = Roadmap::new(1, "r");
        let task = rated_task(1, vec![value(10, 5.0).for_customer(99)]);

        let sum = weighted_value_sum(&task, &customers, &roadmap);
        assert!((sum - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_sum_zero_weight_customer_contributes_nothing() {
        let customers = vec![Customer::new(1, "a"), Customer::new(2, "b")];
        let roadmap = Roadmap::new(1, "r").with_planner_weight(1, 0.0);
        let task = rated_task(1, vec![value(10, 5.0).for_customer(1)]);

        let sum = weighted_value_sum(&task, &customers, &roadmap);
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn test_weighted_sum_ignores_work_ratings() {
        let customers = vec![Customer::new(1, "a")];
        let roadmap = Roadmap::new(1, "r");
        let task = rated_task(1, vec![work(10, 9.0)]);

        assert_eq!(weighted_value_sum(&task, &customers, &roadmap), 0.0);
    }
}
