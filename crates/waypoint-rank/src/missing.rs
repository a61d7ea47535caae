//! Missing-rating resolution.
//!
//! Role-dependent views of who has not yet rated a task. These drive the
//! "awaiting rating" badges and decide who a notification about missing
//! ratings should reach. Notification delivery itself belongs to an
//! external collaborator; this module only identifies the people.

use serde::{Deserialize, Serialize};
use tracing::debug;

use waypoint_core::models::{Customer, RoadmapUser, Task, UserInfo};
use waypoint_core::types::{RoleType, UserId};

/// How a representative's existing ratings clear a customer's "missing"
/// flag.
///
/// The upstream application only checks that each representative authored
/// *some* rating on the task, so a representative rating for customer X
/// also clears customer Y's flag. [`ForCustomer`] is the strict reading;
/// callers that need upstream compatibility keep the default.
///
/// [`ForCustomer`]: RepresentativeAttribution::ForCustomer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepresentativeAttribution {
    /// A representative counts as having rated if they authored any
    /// rating on the task (upstream-compatible).
    #[default]
    AnyRating,
    /// A representative counts only once they rated on behalf of the
    /// specific customer.
    ForCustomer,
}

/// Missing raters visible to one viewer on one task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRatings {
    /// Customers with at least one representative yet to rate.
    pub customers: Vec<Customer>,
    /// Developers yet to rate.
    pub developers: Vec<RoadmapUser>,
}

impl MissingRatings {
    /// Returns true when nobody is missing.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.developers.is_empty()
    }
}

/// Whether the customer still awaits ratings on the task.
///
/// A customer is missing when not every representative has rated under
/// the given attribution rule. A customer without representatives is
/// never missing.
pub fn customer_missing(
    task: &Task,
    customer: &Customer,
    attribution: RepresentativeAttribution,
) -> bool {
    !customer.representative_ids.iter().all(|&rep| match attribution {
        RepresentativeAttribution::AnyRating => task.rated_by(rep),
        RepresentativeAttribution::ForCustomer => task.rated_by_for(rep, customer.id),
    })
}

/// Customers still awaiting ratings on the task.
pub fn missing_customers(
    task: &Task,
    customers: &[Customer],
    attribution: RepresentativeAttribution,
) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| customer_missing(task, customer, attribution))
        .cloned()
        .collect()
}

/// Developers on the roster who have not rated the task.
pub fn missing_developers(task: &Task, users: &[RoadmapUser]) -> Vec<RoadmapUser> {
    users
        .iter()
        .filter(|user| user.role == RoleType::Developer && !task.rated_by(user.id))
        .cloned()
        .collect()
}

/// The missing raters this viewer is allowed to see.
///
/// - Admin: missing customers and missing developers.
/// - Developer: missing developers (including themselves).
/// - Business/Customer: among the customers the viewer represents, the
///   ones the viewer has not personally rated on behalf of.
pub fn visible_missing_ratings(
    task: &Task,
    viewer: &UserInfo,
    users: &[RoadmapUser],
    customers: &[Customer],
    attribution: RepresentativeAttribution,
) -> MissingRatings {
    let role = match viewer.role_on(task.roadmap_id) {
        Some(role) => role,
        None => return MissingRatings::default(),
    };

    let visible = match role {
        RoleType::Admin => MissingRatings {
            customers: missing_customers(task, customers, attribution),
            developers: missing_developers(task, users),
        },
        RoleType::Developer => MissingRatings {
            customers: Vec::new(),
            developers: missing_developers(task, users),
        },
        RoleType::Business | RoleType::Customer => MissingRatings {
            customers: viewer
                .represented_customers
                .iter()
                .filter(|customer| !task.rated_by_for(viewer.id, customer.id))
                .cloned()
                .collect(),
            developers: Vec::new(),
        },
    };

    debug!(
        task_id = task.id,
        viewer = viewer.id,
        %role,
        missing_customers = visible.customers.len(),
        missing_developers = visible.developers.len(),
        "resolved missing ratings"
    );
    visible
}

/// Whether the task shows an "awaiting your rating" badge for this viewer.
///
/// Admin and Business viewers await ratings while any customer they
/// represent lacks a rating by them for that customer; everyone else
/// awaits while they have not rated the task at all.
pub fn task_awaits_ratings(task: &Task, viewer: &UserInfo) -> bool {
    match viewer.role_on(task.roadmap_id) {
        Some(RoleType::Admin) | Some(RoleType::Business) => viewer
            .represented_customers
            .iter()
            .any(|customer| !task.rated_by_for(viewer.id, customer.id)),
        _ => !task.rated_by(viewer.id),
    }
}

/// Number of tasks on which the customer is still missing ratings.
pub fn unrated_tasks_amount(
    customer: &Customer,
    tasks: &[Task],
    attribution: RepresentativeAttribution,
) -> usize {
    tasks
        .iter()
        .filter(|task| customer_missing(task, customer, attribution))
        .count()
}

/// Users a "please rate this task" notification should reach.
///
/// Representatives of missing customers who have not yet rated on behalf
/// of that customer, deduplicated, in customer-then-representative order.
pub fn notification_targets(
    task: &Task,
    customers: &[Customer],
    attribution: RepresentativeAttribution,
) -> Vec<UserId> {
    let mut targets: Vec<UserId> = Vec::new();
    for customer in missing_customers(task, customers, attribution) {
        for &rep in &customer.representative_ids {
            if !task.rated_by_for(rep, customer.id) && !targets.contains(&rep) {
                targets.push(rep);
            }
        }
    }
    targets
}
