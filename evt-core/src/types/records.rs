//! Ledger records owned by the token database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Asset, Name, OwnerKeys, PublicKey};
use super::permission::PermissionDef;

/// Domain record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDef {
    pub name: Name,
    pub issuer: PublicKey,
    pub issue_time: DateTime<Utc>,
    pub issue: PermissionDef,
    pub transfer: PermissionDef,
    pub manage: PermissionDef,
}

/// Non-fungible token record, unique within its domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDef {
    pub domain: Name,
    pub name: Name,
    pub owner: OwnerKeys,
}

impl TokenDef {
    pub fn new(domain: Name, name: Name, owner: OwnerKeys) -> Self {
        Self {
            domain,
            name,
            owner,
        }
    }
}

/// Fungible account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDef {
    pub name: Name,
    pub creator: Name,
    pub create_time: DateTime<Utc>,
    pub balance: Asset,
    pub frozen_balance: Asset,
    pub owner: OwnerKeys,
}
