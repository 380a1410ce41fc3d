//! In-memory storage implementation

use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

use evt_core::{
    AccountDef, Asset, DomainDef, GroupDef, GroupId, Name, OwnerKeys, TokenDb, TokenDbError,
    TokenDbResult, TokenDef,
};

/// In-memory token database
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenDb {
    domains: BTreeMap<Name, DomainDef>,
    groups: BTreeMap<GroupId, GroupDef>,
    tokens: BTreeMap<(Name, Name), TokenDef>,
    accounts: BTreeMap<Name, AccountDef>,
}

impl MemoryTokenDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Tokens of one domain in name order
    pub fn tokens_in_domain(&self, domain: &Name) -> Vec<TokenDef> {
        self.tokens
            .values()
            .filter(|t| &t.domain == domain)
            .cloned()
            .collect()
    }

    /// Sum of all account balances, `None` on overflow
    pub fn total_balance(&self) -> Option<Asset> {
        self.accounts
            .values()
            .try_fold(Asset::ZERO, |acc, a| acc.checked_add(a.balance))
    }

    /// Clear all data
    pub fn clear(&mut self) {
        self.domains.clear();
        self.groups.clear();
        self.tokens.clear();
        self.accounts.clear();
    }
}

fn token_key(domain: &Name, name: &Name) -> (Name, Name) {
    (domain.clone(), name.clone())
}

impl TokenDb for MemoryTokenDb {
    // ==================== Domains ====================

    fn exists_domain(&self, name: &Name) -> TokenDbResult<bool> {
        Ok(self.domains.contains_key(name))
    }

    fn read_domain(&self, name: &Name) -> TokenDbResult<DomainDef> {
        self.domains
            .get(name)
            .cloned()
            .ok_or_else(|| TokenDbError::NotFound(format!("domain {}", name)))
    }

    fn add_domain(&mut self, domain: DomainDef) -> TokenDbResult<()> {
        if self.domains.contains_key(&domain.name) {
            return Err(TokenDbError::AlreadyExists(format!("domain {}", domain.name)));
        }
        trace!(domain = %domain.name, "add domain");
        self.domains.insert(domain.name.clone(), domain);
        Ok(())
    }

    fn update_domain(&mut self, domain: DomainDef) -> TokenDbResult<()> {
        match self.domains.get_mut(&domain.name) {
            Some(slot) => {
                trace!(domain = %domain.name, "update domain");
                *slot = domain;
                Ok(())
            }
            None => Err(TokenDbError::NotFound(format!("domain {}", domain.name))),
        }
    }

    // ==================== Groups ====================

    fn exists_group(&self, id: &GroupId) -> TokenDbResult<bool> {
        Ok(self.groups.contains_key(id))
    }

    fn read_group(&self, id: &GroupId) -> TokenDbResult<GroupDef> {
        self.groups
            .get(id)
            .cloned()
            .ok_or_else(|| TokenDbError::NotFound(format!("group {}", id)))
    }

    fn add_group(&mut self, group: GroupDef) -> TokenDbResult<()> {
        if self.groups.contains_key(&group.id) {
            return Err(TokenDbError::AlreadyExists(format!("group {}", group.id)));
        }
        trace!(group_id = %group.id, "add group");
        self.groups.insert(group.id.clone(), group);
        Ok(())
    }

    fn update_group(&mut self, group: GroupDef) -> TokenDbResult<()> {
        match self.groups.get_mut(&group.id) {
            Some(slot) => {
                trace!(group_id = %group.id, "update group");
                *slot = group;
                Ok(())
            }
            None => Err(TokenDbError::NotFound(format!("group {}", group.id))),
        }
    }

    // ==================== Tokens ====================

    fn exists_token(&self, domain: &Name, name: &Name) -> TokenDbResult<bool> {
        Ok(self.tokens.contains_key(&token_key(domain, name)))
    }

    fn read_token(&self, domain: &Name, name: &Name) -> TokenDbResult<TokenDef> {
        self.tokens
            .get(&token_key(domain, name))
            .cloned()
            .ok_or_else(|| TokenDbError::NotFound(format!("token {}-{}", domain, name)))
    }

    fn issue_tokens(&mut self, tokens: Vec<TokenDef>) -> TokenDbResult<()> {
        // check the whole batch first so a collision leaves nothing behind
        let mut seen = BTreeSet::new();
        for token in &tokens {
            let key = token_key(&token.domain, &token.name);
            if self.tokens.contains_key(&key) || !seen.insert(key) {
                return Err(TokenDbError::AlreadyExists(format!(
                    "token {}-{}",
                    token.domain, token.name
                )));
            }
        }

        trace!(count = tokens.len(), "issue tokens");
        for token in tokens {
            self.tokens
                .insert(token_key(&token.domain, &token.name), token);
        }
        Ok(())
    }

    fn transfer_token(&mut self, domain: &Name, name: &Name, to: OwnerKeys) -> TokenDbResult<()> {
        match self.tokens.get_mut(&token_key(domain, name)) {
            Some(token) => {
                trace!(domain = %domain, token = %name, "transfer token");
                token.owner = to;
                Ok(())
            }
            None => Err(TokenDbError::NotFound(format!("token {}-{}", domain, name))),
        }
    }

    // ==================== Accounts ====================

    fn exists_account(&self, name: &Name) -> TokenDbResult<bool> {
        Ok(self.accounts.contains_key(name))
    }

    fn read_account(&self, name: &Name) -> TokenDbResult<AccountDef> {
        self.accounts
            .get(name)
            .cloned()
            .ok_or_else(|| TokenDbError::NotFound(format!("account {}", name)))
    }

    fn add_account(&mut self, account: AccountDef) -> TokenDbResult<()> {
        if self.accounts.contains_key(&account.name) {
            return Err(TokenDbError::AlreadyExists(format!("account {}", account.name)));
        }
        trace!(account = %account.name, "add account");
        self.accounts.insert(account.name.clone(), account);
        Ok(())
    }

    fn update_account(&mut self, account: AccountDef) -> TokenDbResult<()> {
        match self.accounts.get_mut(&account.name) {
            Some(slot) => {
                trace!(account = %account.name, "update account");
                *slot = account;
                Ok(())
            }
            None => Err(TokenDbError::NotFound(format!("account {}", account.name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use evt_core::PublicKey;

    fn account(name: &str, balance: i64) -> AccountDef {
        AccountDef {
            name: Name::new(name),
            creator: Name::new("evt"),
            create_time: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
            balance: Asset::new(balance),
            frozen_balance: Asset::ZERO,
            owner: vec![PublicKey::new("EVT-owner")],
        }
    }

    fn token(domain: &str, name: &str) -> TokenDef {
        TokenDef::new(Name::new(domain), Name::new(name), vec![PublicKey::new("EVT-owner")])
    }

    #[test]
    fn test_account_lifecycle() {
        let mut db = MemoryTokenDb::new();
        let name = Name::new("alice");

        assert!(!db.exists_account(&name).unwrap());
        db.add_account(account("alice", 100)).unwrap();
        assert!(db.exists_account(&name).unwrap());
        assert!(matches!(
            db.add_account(account("alice", 1)),
            Err(TokenDbError::AlreadyExists(_))
        ));

        let mut stored = db.read_account(&name).unwrap();
        assert_eq!(stored.balance, Asset::new(100));
        stored.balance = Asset::new(40);
        db.update_account(stored).unwrap();
        assert_eq!(db.read_account(&name).unwrap().balance, Asset::new(40));
    }

    #[test]
    fn test_update_missing_records() {
        let mut db = MemoryTokenDb::new();
        assert!(matches!(
            db.update_account(account("ghost", 1)),
            Err(TokenDbError::NotFound(_))
        ));
        assert!(matches!(
            db.transfer_token(&Name::new("d"), &Name::new("t"), vec![]),
            Err(TokenDbError::NotFound(_))
        ));
        assert!(db.read_group(&GroupId::new("abc")).is_err());
    }

    #[test]
    fn test_issue_tokens_is_all_or_nothing() {
        let mut db = MemoryTokenDb::new();
        db.issue_tokens(vec![token("d1", "t1")]).unwrap();

        let result = db.issue_tokens(vec![token("d1", "t0"), token("d1", "t1")]);
        assert!(matches!(result, Err(TokenDbError::AlreadyExists(_))));
        assert_eq!(db.token_count(), 1);
        assert!(!db.exists_token(&Name::new("d1"), &Name::new("t0")).unwrap());

        let result = db.issue_tokens(vec![token("d1", "t2"), token("d1", "t2")]);
        assert!(result.is_err());
        assert_eq!(db.token_count(), 1);
    }

    #[test]
    fn test_transfer_token_and_domain_scan() {
        let mut db = MemoryTokenDb::new();
        db.issue_tokens(vec![token("d1", "t1"), token("d1", "t2"), token("d2", "t1")])
            .unwrap();

        let new_owner = vec![PublicKey::new("EVT-new")];
        db.transfer_token(&Name::new("d1"), &Name::new("t2"), new_owner.clone())
            .unwrap();

        let t2 = db.read_token(&Name::new("d1"), &Name::new("t2")).unwrap();
        assert_eq!(t2.owner, new_owner);
        assert_eq!(db.tokens_in_domain(&Name::new("d1")).len(), 2);
        assert_eq!(db.tokens_in_domain(&Name::new("d2")).len(), 1);
    }

    #[test]
    fn test_total_balance() {
        let mut db = MemoryTokenDb::new();
        db.add_account(account("a", 10)).unwrap();
        db.add_account(account("b", 32)).unwrap();
        assert_eq!(db.total_balance(), Some(Asset::new(42)));

        db.add_account(account("c", i64::MAX)).unwrap();
        assert_eq!(db.total_balance(), None);

        db.clear();
        assert_eq!(db.account_count(), 0);
    }
}
