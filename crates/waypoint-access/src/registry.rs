//! Statically declared role and permission name registries.
//!
//! Decoding iterates names in descending population count of their bit
//! values so composite roles (`Admin`, matching every bit) are consumed
//! before narrower aliases. Ties keep declaration order, which is what
//! makes `Customer` win over its alias `Business`.

use std::cmp::Reverse;
use std::sync::OnceLock;

use waypoint_core::types::{Permission, RoleType};

/// Role names and their bit values, declaration order.
pub(crate) const ROLE_TABLE: [(&str, u32); 4] = [
    ("Admin", RoleType::Admin.permissions()),
    ("Customer", RoleType::Customer.permissions()),
    ("Developer", RoleType::Developer.permissions()),
    ("Business", RoleType::Business.permissions()),
];

/// Atomic permission names and their bit values, declaration order.
/// `All` is a sentinel, not an atomic permission, and is excluded.
pub(crate) const PERMISSION_TABLE: [(&str, u32); 8] = [
    ("TaskRate", Permission::TaskRate.bits()),
    ("TaskCreate", Permission::TaskCreate.bits()),
    ("TaskEdit", Permission::TaskEdit.bits()),
    ("TaskDelete", Permission::TaskDelete.bits()),
    ("RoadmapEdit", Permission::RoadmapEdit.bits()),
    ("RoadmapDelete", Permission::RoadmapDelete.bits()),
    ("RoadmapInvite", Permission::RoadmapInvite.bits()),
    ("JiraConfigurationEdit", Permission::JiraConfigurationEdit.bits()),
];

fn sorted_by_popcount(table: &[(&'static str, u32)]) -> Vec<(&'static str, u32)> {
    let mut entries = table.to_vec();
    // Stable sort: ties keep declaration order.
    entries.sort_by_key(|&(_, bits)| Reverse(bits.count_ones()));
    entries
}

/// Role registry in decode order (descending popcount).
pub(crate) fn roles() -> &'static [(&'static str, u32)] {
    static ROLES: OnceLock<Vec<(&'static str, u32)>> = OnceLock::new();
    ROLES.get_or_init(|| sorted_by_popcount(&ROLE_TABLE))
}

/// Permission registry in decode order (descending popcount).
pub(crate) fn permissions() -> &'static [(&'static str, u32)] {
    static PERMISSIONS: OnceLock<Vec<(&'static str, u32)>> = OnceLock::new();
    PERMISSIONS.get_or_init(|| sorted_by_popcount(&PERMISSION_TABLE))
}

/// Bit value for a role or permission name, 0 for unknown names.
pub(crate) fn bits_for_name(table: &[(&'static str, u32)], name: &str) -> Option<u32> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, bits)| bits)
}
