//! Task and customer list views: filtering, text search, and sort
//! dispatch.
//!
//! The composition order is fixed: filter, then text search, then sort.
//! Sort stability assumes pre-filtered input, so callers go through
//! [`ranked_tasks`] rather than re-composing the steps themselves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use waypoint_core::models::{Customer, PlannerCustomerWeight, Task};
use waypoint_core::types::UserId;
use waypoint_rank::missing::{unrated_tasks_amount, RepresentativeAttribution};
use waypoint_rank::priority::task_priority;
use waypoint_rank::weight::customer_weight;

use crate::sort::{sort_key_numeric, sort_key_text, sorted, Comparison, SortingOrder};

/// Task list filter predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskFilter {
    /// Keep every task.
    #[default]
    ShowAll,
    /// Tasks the given user has not rated.
    NotRatedBy(UserId),
    /// Tasks the given user has rated.
    RatedBy(UserId),
    /// Completed tasks only.
    Completed,
    /// Uncompleted tasks only.
    NotCompleted,
}

impl TaskFilter {
    /// Whether the task passes this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match *self {
            Self::ShowAll => true,
            Self::NotRatedBy(user_id) => !task.rated_by(user_id),
            Self::RatedBy(user_id) => task.rated_by(user_id),
            Self::Completed => task.completed,
            Self::NotCompleted => !task.completed,
        }
    }
}

/// Task sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskSort {
    /// Keep input order.
    #[default]
    NoSort,
    /// Task name, case-insensitive.
    Name,
    /// Task description, case-insensitive.
    Description,
    /// Completion status.
    Status,
    /// Creation timestamp.
    CreatedAt,
    /// Priority score (sentinels sort below every rated task).
    Ratings,
}

/// Customer sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSort {
    /// Keep input order.
    #[default]
    NoSort,
    /// Customer name, case-insensitive.
    Name,
    /// Contact email, case-insensitive.
    Email,
    /// Effective weight (planner overrides applied).
    Value,
    /// Display color.
    Color,
    /// Number of tasks still awaiting the customer's ratings.
    Unrated,
}

/// Keep the tasks passing the filter, in input order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Keep the tasks whose name contains the query, case-insensitive.
/// An empty query keeps everything.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    if query.is_empty() {
        return tasks.to_vec();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn task_comparison<'a>(sort: TaskSort) -> Option<Comparison<'a, Task>> {
    match sort {
        TaskSort::NoSort => None,
        TaskSort::Name => Some(sort_key_text(|t: &Task| t.name.clone())),
        TaskSort::Description => Some(sort_key_text(|t: &Task| t.description.clone())),
        TaskSort::Status => Some(sort_key_numeric(|t: &Task| t.completed as u8 as f64)),
        TaskSort::CreatedAt => {
            Some(sort_key_numeric(|t: &Task| t.created_at.timestamp_millis() as f64))
        }
        TaskSort::Ratings => Some(sort_key_numeric(task_priority)),
    }
}

/// Sort tasks into a new vector.
pub fn sort_tasks(tasks: &[Task], sort: TaskSort, order: SortingOrder) -> Vec<Task> {
    sorted(tasks, task_comparison(sort), order)
}

/// Filter, search, and sort a task list. The order of operations is part
/// of the contract.
pub fn ranked_tasks(
    tasks: &[Task],
    filter: TaskFilter,
    query: &str,
    sort: TaskSort,
    order: SortingOrder,
) -> Vec<Task> {
    let filtered = filter_tasks(tasks, filter);
    let matched = search_tasks(&filtered, query);
    debug!(
        input = tasks.len(),
        filtered = filtered.len(),
        matched = matched.len(),
        ?filter,
        ?sort,
        "ranked task view"
    );
    sort_tasks(&matched, sort, order)
}

/// Sort customers into a new vector.
///
/// `tasks` feeds the unrated-task counts and `overrides` the effective
/// weights; both are only consulted by the sort keys that need them.
pub fn sort_customers(
    customers: &[Customer],
    sort: CustomerSort,
    order: SortingOrder,
    tasks: &[Task],
    overrides: &[PlannerCustomerWeight],
    attribution: RepresentativeAttribution,
) -> Vec<Customer> {
    let total = customers.len();
    let comparison: Option<Comparison<Customer>> = match sort {
        CustomerSort::NoSort => None,
        CustomerSort::Name => Some(sort_key_text(|c: &Customer| c.name.clone())),
        CustomerSort::Email => Some(sort_key_text(|c: &Customer| c.email.clone())),
        CustomerSort::Value => Some(sort_key_numeric(move |c: &Customer| {
            customer_weight(c, total, overrides).unwrap_or(0.0)
        })),
        CustomerSort::Color => {
            Some(sort_key_text(|c: &Customer| c.color.clone().unwrap_or_default()))
        }
        CustomerSort::Unrated => Some(sort_key_numeric(move |c: &Customer| {
            unrated_tasks_amount(c, tasks, attribution) as f64
        })),
    };
    sorted(customers, comparison, order)
}
