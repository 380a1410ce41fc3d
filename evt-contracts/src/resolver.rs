//! Group resolution for permissions
//!
//! Every group a permission references must come from exactly one source:
//! already stored in the token database, or defined inline by the action
//! being applied. The empty id names the owner pseudo-group and is only
//! accepted where the permission slot allows it.

use std::collections::BTreeSet;
use tracing::debug;

use evt_core::{ensure, ContractResult, GroupDef, PermissionDef, TokenDb};

use crate::validation::validate_group;

/// Check every group reference of `permission` against the store and the
/// action's inline groups.
pub fn check_permission_groups(
    tokendb: &dyn TokenDb,
    inline_groups: &[GroupDef],
    permission: &PermissionDef,
    allow_owner: bool,
) -> ContractResult<()> {
    for gw in &permission.groups {
        if gw.id.is_owner() {
            ensure(allow_owner, || {
                format!("Owner group is not allowed in {} permission", permission.name)
            })?;
            continue;
        }

        let in_db = tokendb.exists_group(&gw.id)?;
        let in_action = inline_groups.iter().any(|g| g.id == gw.id);
        debug!(group_id = %gw.id, in_db, in_action, "Resolving group reference");

        ensure(in_db ^ in_action, || {
            format!(
                "Group {} is not valid, may already be defined or not provide defines",
                gw.id
            )
        })?;
    }
    Ok(())
}

/// Check the inline group definitions carried by a domain action.
///
/// Each group must be structurally valid, carry the id derived from its key
/// and appear once.
pub fn check_inline_groups(groups: &[GroupDef]) -> ContractResult<()> {
    let mut seen = BTreeSet::new();
    for g in groups {
        ensure(validate_group(g), || {
            format!(
                "Group {} is not valid, either threshold is not valid or exist duplicate or unordered key",
                g.id
            )
        })?;
        ensure(g.id_matches_key(), || {
            format!("Group id and key are not match, id: {}, key: {}", g.id, g.key)
        })?;
        ensure(seen.insert(&g.id), || {
            format!("Group {} is defined more than once", g.id)
        })?;
    }
    Ok(())
}

/// Inline groups are inserted as new records, so none may be stored yet.
pub fn check_inline_groups_absent(tokendb: &dyn TokenDb, groups: &[GroupDef]) -> ContractResult<()> {
    for g in groups {
        ensure(!tokendb.exists_group(&g.id)?, || {
            format!("Group {} already existed", g.id)
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evt_core::{GroupWeight, KeyWeight, PublicKey};
    use evt_tokendb::MemoryTokenDb;

    fn group(key: &str) -> GroupDef {
        let key = PublicKey::new(key);
        GroupDef::new(key.clone(), 1, vec![KeyWeight::new(key, 1)])
    }

    fn permission(name: &str, groups: &[&GroupDef], owner: bool) -> PermissionDef {
        let mut refs: Vec<GroupWeight> = groups
            .iter()
            .map(|g| GroupWeight::new(g.id.clone(), 1))
            .collect();
        refs.sort_by(|a, b| b.id.cmp(&a.id));
        if owner {
            refs.push(GroupWeight::owner(1));
        }
        PermissionDef::new(name, 1, refs)
    }

    #[test]
    fn test_inline_group_resolves() {
        let db = MemoryTokenDb::new();
        let g = group("EVT-a");
        let p = permission("issue", &[&g], false);
        assert!(check_permission_groups(&db, &[g.clone()], &p, false).is_ok());
    }

    #[test]
    fn test_stored_group_resolves() {
        let mut db = MemoryTokenDb::new();
        let g = group("EVT-a");
        db.add_group(g.clone()).unwrap();
        let p = permission("issue", &[&g], false);
        assert!(check_permission_groups(&db, &[], &p, false).is_ok());
    }

    #[test]
    fn test_group_in_both_sources_rejected() {
        let mut db = MemoryTokenDb::new();
        let g = group("EVT-a");
        db.add_group(g.clone()).unwrap();
        let p = permission("issue", &[&g], false);

        let err = check_permission_groups(&db, &[g.clone()], &p, false).unwrap_err();
        assert!(err.message().contains("may already be defined"));
        assert!(check_inline_groups_absent(&db, &[g]).is_err());
    }

    #[test]
    fn test_group_in_neither_source_rejected() {
        let db = MemoryTokenDb::new();
        let g = group("EVT-a");
        let p = permission("issue", &[&g], false);
        assert!(check_permission_groups(&db, &[], &p, false).is_err());
    }

    #[test]
    fn test_owner_group_only_where_allowed() {
        let db = MemoryTokenDb::new();
        let p = permission("transfer", &[], true);
        assert!(check_permission_groups(&db, &[], &p, true).is_ok());

        let p = permission("manage", &[], true);
        let err = check_permission_groups(&db, &[], &p, false).unwrap_err();
        assert_eq!(err.message(), "Owner group is not allowed in manage permission");
    }

    #[test]
    fn test_check_inline_groups() {
        let g = group("EVT-a");
        assert!(check_inline_groups(&[g.clone(), group("EVT-b")]).is_ok());

        // duplicated definition
        assert!(check_inline_groups(&[g.clone(), g.clone()]).is_err());

        // id not derived from key
        let mut forged = group("EVT-c");
        forged.id = g.id.clone();
        let err = check_inline_groups(&[forged]).unwrap_err();
        assert!(err.message().contains("not match"));

        // zero threshold
        let mut invalid = group("EVT-d");
        invalid.threshold = 0;
        assert!(check_inline_groups(&[invalid]).is_err());
    }
}
