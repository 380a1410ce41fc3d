//! Structural validation of weighted threshold rules
//!
//! # Rules
//!
//! 1. Members are listed in strictly descending order of their id (no
//!    duplicates).
//! 2. Every member weight is nonzero.
//! 3. The total weight reaches the threshold.
//! 4. A group threshold is nonzero; a permission threshold may be zero, in
//!    which case rule 3 holds trivially.
//!
//! These checks are pure and run before any store access.

use evt_core::{GroupDef, PermissionDef, WeightedMember};

/// Check ordering, weights and threshold reachability of a member list.
pub fn validate_members<M: WeightedMember>(members: &[M], threshold: u32) -> bool {
    let mut total_weight: u64 = 0;
    let mut prev: Option<&M::Id> = None;

    for member in members {
        let id = member.member_id();
        // strictly descending: prev > id
        if prev.is_some_and(|prev| prev <= id) {
            return false;
        }
        if member.weight() == 0 {
            return false;
        }
        total_weight += u64::from(member.weight());
        prev = Some(id);
    }

    total_weight >= u64::from(threshold)
}

/// Validate a domain permission definition.
///
/// Name and minimum threshold depend on the permission slot and are checked
/// by the handlers.
pub fn validate_permission(permission: &PermissionDef) -> bool {
    validate_members(&permission.groups, permission.threshold)
}

/// Validate a group definition.
pub fn validate_group(group: &GroupDef) -> bool {
    if group.threshold == 0 {
        return false;
    }
    validate_members(&group.keys, group.threshold)
}
