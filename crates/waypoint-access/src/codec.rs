//! Bitmask <-> name-set translation for roles and permissions.
//!
//! A viewer's role and permissions travel as a single `u32`; this codec is
//! the only translation layer between that integer and human-readable
//! names. Encode and decode are round-trip inverses for any mask
//! expressible from the modeled vocabulary; stray bits are dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::{bits_for_name, permissions, roles, PERMISSION_TABLE, ROLE_TABLE};

/// Human-readable view of a role/permission bitmask.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleObject {
    /// Matched role names, widest first.
    pub roles: Vec<String>,
    /// Matched atomic permission names not covered by a role.
    pub permissions: Vec<String>,
}

/// Decode a bitmask into role and permission names.
///
/// Greedy submask consumption: a name is emitted and its bits cleared if
/// and only if the remaining mask contains the name's value as a submask.
/// Roles are consumed before permissions, widest first, so `Admin` is
/// reported instead of the full permission list and `Business` is never
/// emitted once `Customer` consumed the shared bit.
pub fn decode(mask: u32) -> RoleObject {
    let consume = |mask: &mut u32, table: &[(&'static str, u32)]| {
        let mut names = Vec::new();
        for &(name, bits) in table {
            if bits != 0 && *mask & bits == bits {
                names.push(name.to_string());
                *mask &= !bits;
            }
        }
        names
    };

    let mut working = mask;
    let role_names = consume(&mut working, roles());
    let permission_names = consume(&mut working, permissions());

    if working != 0 {
        debug!(mask, residue = working, "dropping bits outside the modeled vocabulary");
    }

    RoleObject {
        roles: role_names,
        permissions: permission_names,
    }
}

/// Encode role and permission names into a bitmask.
///
/// Unknown names contribute no bits. Use [`encode_with_diagnostics`] when
/// the caller wants to know about them.
pub fn encode(object: &RoleObject) -> u32 {
    encode_with_diagnostics(object).0
}

/// Encode role and permission names, reporting unrecognized names.
///
/// The mask is identical to [`encode`]'s; the second element lists every
/// name that matched nothing in the registries, in input order.
pub fn encode_with_diagnostics(object: &RoleObject) -> (u32, Vec<String>) {
    let mut mask = 0u32;
    let mut unrecognized = Vec::new();

    let mut fold = |names: &[String], table: &[(&'static str, u32)]| {
        for name in names {
            match bits_for_name(table, name) {
                Some(bits) => mask |= bits,
                None => unrecognized.push(name.clone()),
            }
        }
    };

    fold(&object.roles, &ROLE_TABLE);
    fold(&object.permissions, &PERMISSION_TABLE);

    if !unrecognized.is_empty() {
        debug!(?unrecognized, "ignoring unrecognized role/permission names");
    }

    (mask, unrecognized)
}
