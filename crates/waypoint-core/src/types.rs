//! Shared type definitions used across WAYPOINT crates.
//!
//! This module provides the id aliases, rating dimensions, and the
//! role/permission bit vocabulary that every other crate builds on.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
pub type TaskId = i64;

/// Unique identifier for a user.
pub type UserId = i64;

/// Unique identifier for a customer.
pub type CustomerId = i64;

/// Unique identifier for a roadmap.
pub type RoadmapId = i64;

/// The two axes a task can be rated on.
///
/// The integer representation is the wire format used by the rating API
/// and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RatingDimension {
    /// How much value completing the task brings.
    BusinessValue,
    /// How much work completing the task requires.
    RequiredWork,
}

impl From<RatingDimension> for u8 {
    fn from(dimension: RatingDimension) -> u8 {
        match dimension {
            RatingDimension::BusinessValue => 0,
            RatingDimension::RequiredWork => 1,
        }
    }
}

impl TryFrom<u8> for RatingDimension {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RatingDimension::BusinessValue),
            1 => Ok(RatingDimension::RequiredWork),
            other => Err(format!("unknown rating dimension: {}", other)),
        }
    }
}

impl std::fmt::Display for RatingDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BusinessValue => write!(f, "business value"),
            Self::RequiredWork => write!(f, "required work"),
        }
    }
}

/// Atomic permission bits.
///
/// Each permission is a distinct power-of-two bit in a `u32`. Bit values
/// are part of the wire format: a new permission must take an unused bit,
/// existing bits are never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    /// Submit ratings on tasks.
    TaskRate,
    /// Create new tasks.
    TaskCreate,
    /// Edit existing tasks.
    TaskEdit,
    /// Delete tasks.
    TaskDelete,
    /// Edit roadmap settings.
    RoadmapEdit,
    /// Delete a roadmap.
    RoadmapDelete,
    /// Invite users to a roadmap.
    RoadmapInvite,
    /// Manage the Jira integration configuration.
    JiraConfigurationEdit,
    /// Sentinel granting every permission. Not an atomic bit; excluded
    /// from decode enumeration.
    All,
}

impl Permission {
    /// The bit value of this permission.
    pub const fn bits(self) -> u32 {
        match self {
            Self::TaskRate => 1 << 0,
            Self::TaskCreate => 1 << 1,
            Self::TaskEdit => 1 << 2,
            Self::TaskDelete => 1 << 3,
            Self::RoadmapEdit => 1 << 4,
            Self::RoadmapDelete => 1 << 5,
            Self::RoadmapInvite => 1 << 6,
            Self::JiraConfigurationEdit => 1 << 7,
            Self::All => u32::MAX,
        }
    }
}

/// Role of a user on a roadmap.
///
/// A role is shorthand for a permission bitmask. `Business` shares
/// `Customer`'s bit value; decoding resolves the tie in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleType {
    /// Full access: every permission bit set.
    Admin,
    /// Rates tasks on behalf of the customers they represent.
    Customer,
    /// Rates required work and creates tasks.
    Developer,
    /// Business representative. Same bit value as `Customer`.
    Business,
}

impl RoleType {
    /// The permission bitmask granted by this role.
    pub const fn permissions(self) -> u32 {
        match self {
            Self::Admin => Permission::All.bits(),
            Self::Developer => Permission::TaskRate.bits() | Permission::TaskCreate.bits(),
            Self::Customer | Self::Business => Permission::TaskRate.bits(),
        }
    }

    /// Returns true if this role grants the given permission.
    pub fn has_permission(self, permission: Permission) -> bool {
        let bits = permission.bits();
        self.permissions() & bits == bits
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Customer => write!(f, "customer"),
            Self::Developer => write!(f, "developer"),
            Self::Business => write!(f, "business"),
        }
    }
}
