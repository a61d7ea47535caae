//! # waypoint-access
//!
//! Role/permission bitmask codec for WAYPOINT.
//!
//! A viewer's role and permissions are transported as a single `u32`
//! bitmask; this crate translates between that integer and human-readable
//! name sets using statically declared registries.
//!
//! ## Example
//!
//! ```
//! use waypoint_access::{decode, encode};
//! use waypoint_core::types::RoleType;
//!
//! let decoded = decode(RoleType::Developer.permissions());
//! assert_eq!(decoded.roles, vec!["Developer"]);
//! assert_eq!(encode(&decoded), RoleType::Developer.permissions());
//! ```

mod codec;
mod registry;

pub use codec::{decode, encode, encode_with_diagnostics, RoleObject};
