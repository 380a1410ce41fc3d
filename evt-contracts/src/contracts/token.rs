//! Token handlers: `issuetoken` and `transfer`

use std::collections::BTreeSet;
use tracing::info;

use evt_core::{
    ensure, AuthorizationScope, ContractResult, IssueToken, Name, OwnerKeys, TokenDb, TokenDef,
    Transfer,
};

use crate::context::ApplyContext;

pub fn validate_issuetoken(
    ctx: &ApplyContext<'_>,
    act: &IssueToken,
) -> ContractResult<Vec<TokenDef>> {
    ctx.require_authorized(&AuthorizationScope::DomainIssue {
        domain: act.domain.clone(),
    })?;

    let tokendb = ctx.tokendb();
    ensure(tokendb.exists_domain(&act.domain)?, || {
        format!("Domain {} not existed", act.domain)
    })?;
    ensure(!act.owner.is_empty(), || "Owner cannot be empty")?;

    let mut seen = BTreeSet::new();
    for name in &act.names {
        ensure(!name.is_empty(), || "Token name shouldn't be empty")?;
        ensure(seen.insert(name), || {
            format!("Token {}-{} is issued more than once", act.domain, name)
        })?;
        ensure(!tokendb.exists_token(&act.domain, name)?, || {
            format!("Token {}-{} already existed", act.domain, name)
        })?;
    }

    Ok(act
        .names
        .iter()
        .map(|name| TokenDef::new(act.domain.clone(), name.clone(), act.owner.clone()))
        .collect())
}

fn commit_issuetoken(tokendb: &mut dyn TokenDb, tokens: Vec<TokenDef>) -> ContractResult<()> {
    info!(count = tokens.len(), "Issuing tokens");
    tokendb.issue_tokens(tokens)?;
    Ok(())
}

/// Issue every requested token or none of them
pub fn apply_issuetoken(ctx: &mut ApplyContext<'_>, act: &IssueToken) -> ContractResult<()> {
    ctx.execute(act, validate_issuetoken, commit_issuetoken)
}

/// Ownership change of one token
#[derive(Debug, Clone)]
pub struct TransferPlan {
    pub domain: Name,
    pub name: Name,
    pub to: OwnerKeys,
}

pub fn validate_transfer(ctx: &ApplyContext<'_>, act: &Transfer) -> ContractResult<TransferPlan> {
    ctx.require_authorized(&AuthorizationScope::Token {
        domain: act.domain.clone(),
        name: act.name.clone(),
    })?;

    ensure(ctx.tokendb().exists_token(&act.domain, &act.name)?, || {
        format!("Token {}-{} not existed", act.domain, act.name)
    })?;

    Ok(TransferPlan {
        domain: act.domain.clone(),
        name: act.name.clone(),
        to: act.to.clone(),
    })
}

fn commit_transfer(tokendb: &mut dyn TokenDb, plan: TransferPlan) -> ContractResult<()> {
    info!(domain = %plan.domain, token = %plan.name, "Transferring token");
    tokendb.transfer_token(&plan.domain, &plan.name, plan.to)?;
    Ok(())
}

/// Reassign the owner of a token
pub fn apply_transfer(ctx: &mut ApplyContext<'_>, act: &Transfer) -> ContractResult<()> {
    ctx.execute(act, validate_transfer, commit_transfer)
}
