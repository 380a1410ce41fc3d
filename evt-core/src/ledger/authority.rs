//! Authorization scopes and the oracle that checks them

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::constants::{
    PERMISSION_ISSUE, PERMISSION_MANAGE, SCOPE_ACCOUNT, SCOPE_DOMAIN, SCOPE_GROUP,
};
use crate::types::{GroupId, Name};

/// Scope an action must be authorized for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthorizationScope {
    /// Creating a domain: `("domain", name)`
    NewDomain { name: Name },
    /// Issuing tokens: `(domain, "issue")`
    DomainIssue { domain: Name },
    /// Updating a domain: `(domain, "manage")`
    DomainManage { domain: Name },
    /// Transferring a token: `(domain, token)`
    Token { domain: Name, name: Name },
    /// Updating a group: `("group", id)`
    Group { id: GroupId },
    /// Account actions: `("account", name)`
    Account { name: Name },
}

impl AuthorizationScope {
    /// First half of the `(scope_kind, scope_key)` pair
    pub fn kind(&self) -> &str {
        match self {
            Self::NewDomain { .. } => SCOPE_DOMAIN,
            Self::DomainIssue { domain }
            | Self::DomainManage { domain }
            | Self::Token { domain, .. } => domain.as_str(),
            Self::Group { .. } => SCOPE_GROUP,
            Self::Account { .. } => SCOPE_ACCOUNT,
        }
    }

    /// Second half of the `(scope_kind, scope_key)` pair
    pub fn key(&self) -> &str {
        match self {
            Self::NewDomain { name } => name.as_str(),
            Self::DomainIssue { .. } => PERMISSION_ISSUE,
            Self::DomainManage { .. } => PERMISSION_MANAGE,
            Self::Token { name, .. } => name.as_str(),
            Self::Group { id } => id.as_str(),
            Self::Account { name } => name.as_str(),
        }
    }
}

impl fmt::Display for AuthorizationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind(), self.key())
    }
}

/// Answers whether the current action's authorization evidence satisfies a
/// scope
pub trait AuthorizationOracle {
    fn has_authorized(&self, scope: &AuthorizationScope) -> bool;
}

/// Oracle backed by a fixed set of satisfied scopes
///
/// Useful when the signature layer has already resolved which scopes the
/// transaction satisfies.
#[derive(Debug, Clone, Default)]
pub struct AuthorizedScopes {
    scopes: HashSet<AuthorizationScope>,
}

impl AuthorizedScopes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: AuthorizationScope) -> Self {
        self.scopes.insert(scope);
        self
    }

    pub fn insert(&mut self, scope: AuthorizationScope) {
        self.scopes.insert(scope);
    }
}

impl AuthorizationOracle for AuthorizedScopes {
    fn has_authorized(&self, scope: &AuthorizationScope) -> bool {
        self.scopes.contains(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_pairs() {
        let scope = AuthorizationScope::NewDomain { name: Name::new("d1") };
        assert_eq!((scope.kind(), scope.key()), ("domain", "d1"));

        let scope = AuthorizationScope::DomainIssue { domain: Name::new("d1") };
        assert_eq!((scope.kind(), scope.key()), ("d1", "issue"));

        let scope = AuthorizationScope::DomainManage { domain: Name::new("d1") };
        assert_eq!(scope.to_string(), "(d1, manage)");

        let scope = AuthorizationScope::Token {
            domain: Name::new("d1"),
            name: Name::new("t1"),
        };
        assert_eq!((scope.kind(), scope.key()), ("d1", "t1"));

        let scope = AuthorizationScope::Account { name: Name::new("alice") };
        assert_eq!((scope.kind(), scope.key()), ("account", "alice"));
    }

    #[test]
    fn test_authorized_scopes() {
        let alice = AuthorizationScope::Account { name: Name::new("alice") };
        let bob = AuthorizationScope::Account { name: Name::new("bob") };
        let oracle = AuthorizedScopes::new().with_scope(alice.clone());

        assert!(oracle.has_authorized(&alice));
        assert!(!oracle.has_authorized(&bob));
    }
}
