//! Ledger interfaces consumed by the action handlers
//!
//! - [`TokenDb`]: the key-value store holding domains, groups, tokens and
//!   accounts
//! - [`AuthorizationOracle`]: answers whether the current action carries
//!   enough authorization for a scope

mod authority;

pub use authority::*;

use crate::error::TokenDbResult;
use crate::types::{AccountDef, DomainDef, GroupDef, GroupId, Name, OwnerKeys, TokenDef};

/// Token database
///
/// All calls are synchronous. Reads issued during one action observe the
/// writes made earlier by the same action.
pub trait TokenDb {
    // ==================== Domains ====================

    fn exists_domain(&self, name: &Name) -> TokenDbResult<bool>;

    fn read_domain(&self, name: &Name) -> TokenDbResult<DomainDef>;

    /// Insert a new domain; fails if it already exists
    fn add_domain(&mut self, domain: DomainDef) -> TokenDbResult<()>;

    /// Replace an existing domain
    fn update_domain(&mut self, domain: DomainDef) -> TokenDbResult<()>;

    // ==================== Groups ====================

    fn exists_group(&self, id: &GroupId) -> TokenDbResult<bool>;

    fn read_group(&self, id: &GroupId) -> TokenDbResult<GroupDef>;

    /// Insert a new group; fails if it already exists
    fn add_group(&mut self, group: GroupDef) -> TokenDbResult<()>;

    /// Replace an existing group
    fn update_group(&mut self, group: GroupDef) -> TokenDbResult<()>;

    // ==================== Tokens ====================

    fn exists_token(&self, domain: &Name, name: &Name) -> TokenDbResult<bool>;

    fn read_token(&self, domain: &Name, name: &Name) -> TokenDbResult<TokenDef>;

    /// Insert a batch of tokens; fails without writing if any already exists
    fn issue_tokens(&mut self, tokens: Vec<TokenDef>) -> TokenDbResult<()>;

    /// Replace the owner of an existing token
    fn transfer_token(&mut self, domain: &Name, name: &Name, to: OwnerKeys) -> TokenDbResult<()>;

    // ==================== Accounts ====================

    fn exists_account(&self, name: &Name) -> TokenDbResult<bool>;

    fn read_account(&self, name: &Name) -> TokenDbResult<AccountDef>;

    /// Insert a new account; fails if it already exists
    fn add_account(&mut self, account: AccountDef) -> TokenDbResult<()>;

    /// Replace an existing account
    fn update_account(&mut self, account: AccountDef) -> TokenDbResult<()>;
}
