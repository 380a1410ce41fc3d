//! Protocol Constants
//!
//! Centralized constants for the evt token ledger.
//!
//! # Categories
//!
//! - **Permissions**: Well-known permission slot names
//! - **Scopes**: Authorization scope kinds
//! - **Defaults**: Default configuration values

// ============================================================================
// Permission Names
// ============================================================================

/// Name of the permission that authorizes token issuance in a domain
pub const PERMISSION_ISSUE: &str = "issue";

/// Name of the permission that authorizes token transfers in a domain
pub const PERMISSION_TRANSFER: &str = "transfer";

/// Name of the permission that authorizes domain updates
pub const PERMISSION_MANAGE: &str = "manage";

// ============================================================================
// Authorization Scope Kinds
// ============================================================================

/// Scope kind for creating a domain
pub const SCOPE_DOMAIN: &str = "domain";

/// Scope kind for updating a group
pub const SCOPE_GROUP: &str = "group";

/// Scope kind for fungible account actions
pub const SCOPE_ACCOUNT: &str = "account";

// ============================================================================
// Defaults
// ============================================================================

/// Default name of the system account recorded as creator of new accounts
pub const DEFAULT_SYSTEM_ACCOUNT: &str = "evt";

/// Default balance granted to every new account
pub const DEFAULT_INITIAL_BALANCE: i64 = 10_000;

/// Group id length in bytes (first 16 bytes of SHA-256)
pub const GROUP_ID_LENGTH_BYTES: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_names_distinct() {
        assert_ne!(PERMISSION_ISSUE, PERMISSION_TRANSFER);
        assert_ne!(PERMISSION_TRANSFER, PERMISSION_MANAGE);
        assert_ne!(PERMISSION_ISSUE, PERMISSION_MANAGE);
    }

    #[test]
    fn test_defaults_reasonable() {
        assert!(DEFAULT_INITIAL_BALANCE > 0);
        assert!(!DEFAULT_SYSTEM_ACCOUNT.is_empty());
        assert!(GROUP_ID_LENGTH_BYTES <= 32);
    }
}
