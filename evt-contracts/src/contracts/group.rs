//! Group handler: `updategroup`

use tracing::info;

use evt_core::{ensure, AuthorizationScope, ContractResult, GroupDef, TokenDb, UpdateGroup};

use crate::context::ApplyContext;
use crate::validation::validate_group;

/// Groups are only created inline by domain actions; this handler replaces
/// the threshold and keys of an existing one. Its id and key never change.
pub fn validate_updategroup(ctx: &ApplyContext<'_>, act: &UpdateGroup) -> ContractResult<GroupDef> {
    ctx.require_authorized(&AuthorizationScope::Group { id: act.id.clone() })?;

    let tokendb = ctx.tokendb();
    ensure(tokendb.exists_group(&act.id)?, || {
        format!("Group {} not existed", act.id)
    })?;
    ensure(!act.keys.is_empty(), || "Group must contains at least one key")?;

    let stored = tokendb.read_group(&act.id)?;
    let updated = GroupDef {
        id: stored.id,
        key: stored.key,
        threshold: act.threshold,
        keys: act.keys.clone(),
    };
    ensure(validate_group(&updated), || {
        "Updated group is not valid, either threshold is not valid or exist duplicate or unordered keys"
    })?;

    Ok(updated)
}

fn commit_updategroup(tokendb: &mut dyn TokenDb, group: GroupDef) -> ContractResult<()> {
    info!(group_id = %group.id, count = group.keys.len(), "Updating group");
    tokendb.update_group(group)?;
    Ok(())
}

pub fn apply_updategroup(ctx: &mut ApplyContext<'_>, act: &UpdateGroup) -> ContractResult<()> {
    ctx.execute(act, validate_updategroup, commit_updategroup)
}
