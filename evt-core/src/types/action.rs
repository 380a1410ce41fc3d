//! Action payload schemas
//!
//! Payloads arrive already decoded; each one is applied by exactly one
//! handler.

use serde::{Deserialize, Serialize};

use super::common::{Asset, GroupId, Name, OwnerKeys, PublicKey};
use super::permission::{GroupDef, KeyWeight, PermissionDef};
use crate::logging::actions;

/// Common behaviour of action payloads
pub trait ContractAction: Serialize {
    /// Action name as it appears on chain
    const NAME: &'static str;
}

/// Create a domain with its three permissions and inline groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDomain {
    pub name: Name,
    pub issuer: PublicKey,
    pub issue: PermissionDef,
    pub transfer: PermissionDef,
    pub manage: PermissionDef,
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}

impl ContractAction for NewDomain {
    const NAME: &'static str = actions::NEW_DOMAIN;
}

/// Replace any subset of a domain's permissions, adding inline groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDomain {
    pub name: Name,
    #[serde(default)]
    pub issue: Option<PermissionDef>,
    #[serde(default)]
    pub transfer: Option<PermissionDef>,
    #[serde(default)]
    pub manage: Option<PermissionDef>,
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}

impl ContractAction for UpdateDomain {
    const NAME: &'static str = actions::UPDATE_DOMAIN;
}

/// Issue a batch of tokens sharing one owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueToken {
    pub domain: Name,
    pub names: Vec<Name>,
    pub owner: OwnerKeys,
}

impl ContractAction for IssueToken {
    const NAME: &'static str = actions::ISSUE_TOKEN;
}

/// Reassign the owner of one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub domain: Name,
    pub name: Name,
    pub to: OwnerKeys,
}

impl ContractAction for Transfer {
    const NAME: &'static str = actions::TRANSFER;
}

/// Replace the key list and threshold of an existing group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroup {
    pub id: GroupId,
    pub threshold: u32,
    pub keys: Vec<KeyWeight>,
}

impl ContractAction for UpdateGroup {
    const NAME: &'static str = actions::UPDATE_GROUP;
}

/// Open a fungible account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: Name,
    pub owner: OwnerKeys,
}

impl ContractAction for NewAccount {
    const NAME: &'static str = actions::NEW_ACCOUNT;
}

/// Replace the owner of a fungible account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOwner {
    pub name: Name,
    pub owner: OwnerKeys,
}

impl ContractAction for UpdateOwner {
    const NAME: &'static str = actions::UPDATE_OWNER;
}

/// Move balance between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvt {
    pub from: Name,
    pub to: Name,
    pub amount: Asset,
}

impl ContractAction for TransferEvt {
    const NAME: &'static str = actions::TRANSFER_EVT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_domain_optional_fields_default() {
        let act: UpdateDomain = serde_json::from_str(r#"{"name":"d1"}"#).unwrap();
        assert_eq!(act.name, Name::new("d1"));
        assert!(act.issue.is_none());
        assert!(act.transfer.is_none());
        assert!(act.manage.is_none());
        assert!(act.groups.is_empty());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(NewDomain::NAME, "newdomain");
        assert_eq!(TransferEvt::NAME, "transferevt");
    }
}
