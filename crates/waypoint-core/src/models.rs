//! Snapshot entity models.
//!
//! These are the shapes the persistence/API collaborator hands to the core:
//! tasks with embedded ratings, customers with their representatives, the
//! roadmap user roster, and the roadmap record with optional planner weight
//! overrides. Field names serialize in camelCase to match the upstream
//! JSON API.
//!
//! The core treats every instance as an immutable snapshot. The builder
//! methods exist for callers and tests assembling snapshots by hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, RatingDimension, RoadmapId, RoleType, TaskId, UserId};

/// A single rating submitted on a task.
///
/// A rating is uniquely identified by (task, dimension, rater,
/// `for_customer`) in normal operation. Duplicates are not rejected here;
/// aggregation treats them as independent samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRating {
    /// Task this rating belongs to.
    pub parent_task: TaskId,

    /// Rating axis.
    pub dimension: RatingDimension,

    /// User who submitted the rating.
    pub created_by_user: UserId,

    /// Customer the rating was given on behalf of. Present when the rater
    /// is a customer representative.
    #[serde(default)]
    pub for_customer: Option<CustomerId>,

    /// Numeric rating value.
    pub value: f64,

    /// Free-text comment attached to the rating.
    #[serde(default)]
    pub comment: String,
}

impl TaskRating {
    /// Create a new rating with required fields.
    pub fn new(
        parent_task: TaskId,
        created_by_user: UserId,
        dimension: RatingDimension,
        value: f64,
    ) -> Self {
        Self {
            parent_task,
            dimension,
            created_by_user,
            for_customer: None,
            value,
            comment: String::new(),
        }
    }

    /// Set the customer this rating was given on behalf of.
    pub fn for_customer(mut self, customer_id: CustomerId) -> Self {
        self.for_customer = Some(customer_id);
        self
    }

    /// Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// A work item on a roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    /// Roadmap this task belongs to.
    pub roadmap_id: RoadmapId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Ratings submitted on this task. Appended by the persistence
    /// collaborator, never mutated by aggregation.
    #[serde(default)]
    pub ratings: Vec<TaskRating>,

    /// Ids of related tasks.
    #[serde(default)]
    pub related_task_ids: Vec<TaskId>,
}

impl Task {
    /// Create a new task with required fields.
    pub fn new(id: TaskId, roadmap_id: RoadmapId, name: impl Into<String>) -> Self {
        Self {
            id,
            roadmap_id,
            name: name.into(),
            description: String::new(),
            completed: false,
            created_at: Utc::now(),
            ratings: Vec::new(),
            related_task_ids: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Append a rating.
    pub fn with_rating(mut self, rating: TaskRating) -> Self {
        self.ratings.push(rating);
        self
    }

    /// Returns true if the given user authored any rating on this task.
    pub fn rated_by(&self, user_id: UserId) -> bool {
        self.ratings.iter().any(|r| r.created_by_user == user_id)
    }

    /// Returns true if the given user rated this task on behalf of the
    /// given customer.
    pub fn rated_by_for(&self, user_id: UserId, customer_id: CustomerId) -> bool {
        self.ratings
            .iter()
            .any(|r| r.created_by_user == user_id && r.for_customer == Some(customer_id))
    }
}

/// A customer whose business value drives prioritization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,

    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Display color, e.g. `#ff0000`.
    #[serde(default)]
    pub color: Option<String>,

    /// Users representing this customer.
    #[serde(default)]
    pub representative_ids: Vec<UserId>,
}

impl Customer {
    /// Create a new customer with required fields.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
            color: None,
            representative_ids: Vec::new(),
        }
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Add a representative.
    pub fn with_representative(mut self, user_id: UserId) -> Self {
        self.representative_ids.push(user_id);
        self
    }
}

/// A user's membership on a roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapUser {
    pub id: UserId,
    pub username: String,
    pub role: RoleType,
    pub roadmap_id: RoadmapId,
}

impl RoadmapUser {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        role: RoleType,
        roadmap_id: RoadmapId,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            roadmap_id,
        }
    }
}

/// Per-roadmap customer weight override.
///
/// When absent for a customer, the equal-share default applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerCustomerWeight {
    pub customer_id: CustomerId,
    pub weight: f64,
}

/// A roadmap snapshot: tasks, customers, and planner weight overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: RoadmapId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub customers: Vec<Customer>,

    /// Planner overrides of customer weights, keyed by customer id.
    #[serde(default)]
    pub planner_customer_weights: Vec<PlannerCustomerWeight>,
}

impl Roadmap {
    /// Create a new roadmap with required fields.
    pub fn new(id: RoadmapId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            tasks: Vec::new(),
            customers: Vec::new(),
            planner_customer_weights: Vec::new(),
        }
    }

    /// Append a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Append a customer.
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    /// Set a planner weight override for a customer.
    pub fn with_planner_weight(mut self, customer_id: CustomerId, weight: f64) -> Self {
        self.planner_customer_weights
            .push(PlannerCustomerWeight { customer_id, weight });
        self
    }
}

/// A role a viewer holds on one roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRole {
    pub roadmap_id: RoadmapId,
    pub role: RoleType,
}

/// Snapshot of the viewing user: their per-roadmap roles and the customers
/// they represent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: UserId,

    pub username: String,

    /// Role memberships, one per roadmap.
    #[serde(default)]
    pub roles: Vec<RoadmapRole>,

    /// Customers this user represents.
    #[serde(default)]
    pub represented_customers: Vec<Customer>,
}

impl UserInfo {
    /// Create a new viewer snapshot.
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            roles: Vec::new(),
            represented_customers: Vec::new(),
        }
    }

    /// Add a role membership on a roadmap.
    pub fn with_role(mut self, roadmap_id: RoadmapId, role: RoleType) -> Self {
        self.roles.push(RoadmapRole { roadmap_id, role });
        self
    }

    /// Add a customer this user represents.
    pub fn with_represented(mut self, customer: Customer) -> Self {
        self.represented_customers.push(customer);
        self
    }

    /// The viewer's role on the given roadmap, if any.
    pub fn role_on(&self, roadmap_id: RoadmapId) -> Option<RoleType> {
        self.roles
            .iter()
            .find(|r| r.roadmap_id == roadmap_id)
            .map(|r| r.role)
    }
}
