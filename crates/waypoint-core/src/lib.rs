//! # waypoint-core
//!
//! Core types, entity models, and errors for the WAYPOINT prioritization
//! engine.
//!
//! This crate provides:
//! - [`WaypointError`] - Error types shared by all WAYPOINT crates
//! - [`types`] - Id aliases, rating dimensions, roles, and permission bits
//! - [`models`] - Snapshot entity models (tasks, ratings, customers, roadmaps)
//! - [`logging`] - Tracing setup for binaries and tests embedding the core
//!
//! Every entity here is an immutable snapshot supplied by a persistence
//! collaborator. The core never creates, stores, or deletes entities; it
//! only computes derived views over them.
//!
//! ## Example
//!
//! ```
//! use waypoint_core::models::{Task, TaskRating};
//! use waypoint_core::types::RatingDimension;
//!
//! let task = Task::new(1, 1, "Checkout flow")
//!     .with_rating(TaskRating::new(1, 7, RatingDimension::BusinessValue, 8.0));
//! assert_eq!(task.ratings.len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod types;

// Re-export main types for convenience
pub use error::{Result, WaypointError};
pub use models::{
    Customer, PlannerCustomerWeight, Roadmap, RoadmapRole, RoadmapUser, Task, TaskRating, UserInfo,
};
pub use types::{Permission, RatingDimension, RoleType};
