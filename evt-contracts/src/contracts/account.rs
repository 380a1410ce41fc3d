//! Account handlers: `newaccount`, `updateowner` and `transferevt`
//!
//! `transferevt` is the only action that moves balance. Both accounts are
//! read before either is written, and both new balances are computed with
//! checked arithmetic, so the total supply stays constant.

use tracing::{debug, info};

use evt_core::{
    ensure, AccountDef, Asset, AuthorizationScope, ContractError, ContractResult, NewAccount,
    TokenDb, TransferEvt, UpdateOwner,
};

use crate::context::ApplyContext;

// ============================================================================
// newaccount
// ============================================================================

pub fn validate_newaccount(ctx: &ApplyContext<'_>, act: &NewAccount) -> ContractResult<AccountDef> {
    ctx.require_authorized(&AuthorizationScope::Account {
        name: act.name.clone(),
    })?;

    ensure(!act.name.is_empty(), || "Account name shouldn't be empty")?;
    ensure(!ctx.tokendb().exists_account(&act.name)?, || {
        format!("Account {} already existed", act.name)
    })?;

    let config = ctx.config();
    config.validate()?;
    Ok(AccountDef {
        name: act.name.clone(),
        creator: config.system_account.clone(),
        create_time: ctx.head_block_time(),
        balance: config.initial_balance,
        frozen_balance: Asset::ZERO,
        owner: act.owner.clone(),
    })
}

fn commit_newaccount(tokendb: &mut dyn TokenDb, account: AccountDef) -> ContractResult<()> {
    info!(
        account = %account.name,
        amount = account.balance.amount(),
        "Creating account"
    );
    tokendb.add_account(account)?;
    Ok(())
}

pub fn apply_newaccount(ctx: &mut ApplyContext<'_>, act: &NewAccount) -> ContractResult<()> {
    ctx.execute(act, validate_newaccount, commit_newaccount)
}

// ============================================================================
// updateowner
// ============================================================================

pub fn validate_updateowner(
    ctx: &ApplyContext<'_>,
    act: &UpdateOwner,
) -> ContractResult<AccountDef> {
    ctx.require_authorized(&AuthorizationScope::Account {
        name: act.name.clone(),
    })?;

    let tokendb = ctx.tokendb();
    ensure(tokendb.exists_account(&act.name)?, || {
        format!("Account {} don't exist", act.name)
    })?;
    ensure(!act.owner.is_empty(), || "Owner cannot be empty")?;

    let mut account = tokendb.read_account(&act.name)?;
    account.owner = act.owner.clone();
    Ok(account)
}

fn commit_updateowner(tokendb: &mut dyn TokenDb, account: AccountDef) -> ContractResult<()> {
    info!(account = %account.name, count = account.owner.len(), "Updating account owner");
    tokendb.update_account(account)?;
    Ok(())
}

pub fn apply_updateowner(ctx: &mut ApplyContext<'_>, act: &UpdateOwner) -> ContractResult<()> {
    ctx.execute(act, validate_updateowner, commit_updateowner)
}

// ============================================================================
// transferevt
// ============================================================================

/// Both sides of a balance transfer, already debited and credited
#[derive(Debug, Clone)]
pub struct TransferEvtPlan {
    pub from: AccountDef,
    pub to: AccountDef,
}

pub fn validate_transferevt(
    ctx: &ApplyContext<'_>,
    act: &TransferEvt,
) -> ContractResult<TransferEvtPlan> {
    ctx.require_authorized(&AuthorizationScope::Account {
        name: act.from.clone(),
    })?;

    let tokendb = ctx.tokendb();
    ensure(tokendb.exists_account(&act.from)?, || {
        format!("Account {} don't exist", act.from)
    })?;
    ensure(tokendb.exists_account(&act.to)?, || {
        format!("Account {} don't exist", act.to)
    })?;
    ensure(act.amount.is_positive(), || "Transfer amount must be positive")?;
    // Writing both records back for the same account would keep only the credit.
    ensure(act.from != act.to, || {
        format!("Account {} cannot transfer to itself", act.from)
    })?;

    let mut from = tokendb.read_account(&act.from)?;
    let mut to = tokendb.read_account(&act.to)?;
    debug!(
        account = %from.name,
        from_balance = from.balance.amount(),
        to_balance = to.balance.amount(),
        "Read transfer accounts"
    );

    ensure(from.balance >= act.amount, || {
        format!("Account {} don't have enough balance left", act.from)
    })?;

    let debited = from.balance.checked_sub(act.amount);
    let credited = to.balance.checked_add(act.amount);
    let (Some(debited), Some(credited)) = (debited, credited) else {
        return Err(ContractError::validation(
            "Operations resulted in overflow results",
        ));
    };
    from.balance = debited;
    to.balance = credited;

    Ok(TransferEvtPlan { from, to })
}

fn commit_transferevt(tokendb: &mut dyn TokenDb, plan: TransferEvtPlan) -> ContractResult<()> {
    info!(
        account = %plan.from.name,
        to = %plan.to.name,
        from_balance = plan.from.balance.amount(),
        to_balance = plan.to.balance.amount(),
        "Transferring balance"
    );
    tokendb.update_account(plan.from)?;
    tokendb.update_account(plan.to)?;
    Ok(())
}

pub fn apply_transferevt(ctx: &mut ApplyContext<'_>, act: &TransferEvt) -> ContractResult<()> {
    ctx.execute(act, validate_transferevt, commit_transferevt)
}
