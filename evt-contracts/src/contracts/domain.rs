//! Domain handlers: `newdomain` and `updatedomain`

use tracing::info;

use evt_core::{
    ensure, AuthorizationScope, ContractResult, DomainDef, GroupDef, NewDomain, PermissionDef,
    TokenDb, UpdateDomain, PERMISSION_ISSUE, PERMISSION_MANAGE, PERMISSION_TRANSFER,
};

use crate::context::ApplyContext;
use crate::resolver::{check_inline_groups, check_inline_groups_absent, check_permission_groups};
use crate::validation::validate_permission;

/// Records written by a domain action
#[derive(Debug, Clone)]
pub struct DomainPlan {
    pub domain: DomainDef,
    pub groups: Vec<GroupDef>,
}

/// Permission slot rules: expected name, whether the threshold must be
/// positive, whether the owner group may be referenced
#[derive(Debug, Clone, Copy)]
struct Slot {
    name: &'static str,
    label: &'static str,
    positive_threshold: bool,
    allow_owner: bool,
}

const ISSUE: Slot = Slot {
    name: PERMISSION_ISSUE,
    label: "Issue",
    positive_threshold: true,
    allow_owner: false,
};

const TRANSFER: Slot = Slot {
    name: PERMISSION_TRANSFER,
    label: "Transfer",
    positive_threshold: true,
    allow_owner: true,
};

// A zero manage threshold freezes the domain for good.
const MANAGE: Slot = Slot {
    name: PERMISSION_MANAGE,
    label: "Manage",
    positive_threshold: false,
    allow_owner: false,
};

fn check_slot(slot: Slot, permission: &PermissionDef) -> ContractResult<()> {
    ensure(permission.name.as_str() == slot.name, || {
        format!(
            "Name of {} permission is not valid, provided: {}",
            slot.name, permission.name
        )
    })?;
    let threshold_ok = !slot.positive_threshold || permission.threshold > 0;
    ensure(threshold_ok && validate_permission(permission), || {
        if slot.positive_threshold {
            format!(
                "{} permission not valid, either threshold is not valid or exist duplicate or unordered keys",
                slot.label
            )
        } else {
            format!("{} permission not valid, maybe exist duplicate keys", slot.label)
        }
    })
}

fn resolve_slot(
    tokendb: &dyn TokenDb,
    groups: &[GroupDef],
    slot: Slot,
    permission: &PermissionDef,
) -> ContractResult<()> {
    check_permission_groups(tokendb, groups, permission, slot.allow_owner)
}

// ============================================================================
// newdomain
// ============================================================================

pub fn validate_newdomain(ctx: &ApplyContext<'_>, act: &NewDomain) -> ContractResult<DomainPlan> {
    ctx.require_authorized(&AuthorizationScope::NewDomain {
        name: act.name.clone(),
    })?;

    let tokendb = ctx.tokendb();
    ensure(!tokendb.exists_domain(&act.name)?, || {
        format!("Domain {} already existed", act.name)
    })?;

    check_inline_groups(&act.groups)?;
    ensure(!act.name.is_empty(), || "Domain name shouldn't be empty")?;

    check_slot(ISSUE, &act.issue)?;
    check_slot(TRANSFER, &act.transfer)?;
    check_slot(MANAGE, &act.manage)?;

    resolve_slot(tokendb, &act.groups, ISSUE, &act.issue)?;
    resolve_slot(tokendb, &act.groups, TRANSFER, &act.transfer)?;
    resolve_slot(tokendb, &act.groups, MANAGE, &act.manage)?;
    check_inline_groups_absent(tokendb, &act.groups)?;

    Ok(DomainPlan {
        domain: DomainDef {
            name: act.name.clone(),
            issuer: act.issuer.clone(),
            issue_time: ctx.head_block_time(),
            issue: act.issue.clone(),
            transfer: act.transfer.clone(),
            manage: act.manage.clone(),
        },
        groups: act.groups.clone(),
    })
}

fn commit_newdomain(tokendb: &mut dyn TokenDb, plan: DomainPlan) -> ContractResult<()> {
    info!(
        domain = %plan.domain.name,
        count = plan.groups.len(),
        "Creating domain"
    );
    tokendb.add_domain(plan.domain)?;
    for group in plan.groups {
        tokendb.add_group(group)?;
    }
    Ok(())
}

/// Create a domain together with its inline groups
pub fn apply_newdomain(ctx: &mut ApplyContext<'_>, act: &NewDomain) -> ContractResult<()> {
    ctx.execute(act, validate_newdomain, commit_newdomain)
}

// ============================================================================
// updatedomain
// ============================================================================

pub fn validate_updatedomain(
    ctx: &ApplyContext<'_>,
    act: &UpdateDomain,
) -> ContractResult<DomainPlan> {
    ctx.require_authorized(&AuthorizationScope::DomainManage {
        domain: act.name.clone(),
    })?;

    let tokendb = ctx.tokendb();
    ensure(tokendb.exists_domain(&act.name)?, || {
        format!("Domain {} is not existed", act.name)
    })?;

    check_inline_groups(&act.groups)?;
    ensure(!act.name.is_empty(), || "Domain name shouldn't be empty")?;

    let mut domain = tokendb.read_domain(&act.name)?;

    for (slot, permission, target) in [
        (ISSUE, &act.issue, &mut domain.issue),
        (TRANSFER, &act.transfer, &mut domain.transfer),
        (MANAGE, &act.manage, &mut domain.manage),
    ] {
        if let Some(permission) = permission {
            check_slot(slot, permission)?;
            resolve_slot(tokendb, &act.groups, slot, permission)?;
            *target = permission.clone();
        }
    }
    check_inline_groups_absent(tokendb, &act.groups)?;

    Ok(DomainPlan {
        domain,
        groups: act.groups.clone(),
    })
}

fn commit_updatedomain(tokendb: &mut dyn TokenDb, plan: DomainPlan) -> ContractResult<()> {
    info!(
        domain = %plan.domain.name,
        count = plan.groups.len(),
        "Updating domain"
    );
    tokendb.update_domain(plan.domain)?;
    for group in plan.groups {
        tokendb.add_group(group)?;
    }
    Ok(())
}

/// Replace the permissions supplied by the action, keep the others
pub fn apply_updatedomain(ctx: &mut ApplyContext<'_>, act: &UpdateDomain) -> ContractResult<()> {
    ctx.execute(act, validate_updatedomain, commit_updatedomain)
}
