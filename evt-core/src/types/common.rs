//! Common identifier and amount types

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

use crate::constants::GROUP_ID_LENGTH_BYTES;

/// Name of a domain, token or account
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Public key, compared as an opaque totally ordered value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub String);

impl PublicKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of keys owning a token or account
pub type OwnerKeys = Vec<PublicKey>;

/// Group identifier
///
/// Lowercase hex of a 128-bit value, so lexical order equals numeric order.
/// The empty id stands for the owner pseudo-group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GroupId(pub String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The owner pseudo-group
    pub fn owner() -> Self {
        Self(String::new())
    }

    pub fn is_owner(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive the id of the group identified by `key`
    pub fn from_group_key(key: &PublicKey) -> Self {
        let hash = Sha256::digest(key.as_str().as_bytes());
        Self(hex::encode(&hash[..GROUP_ID_LENGTH_BYTES]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_owner() {
            write!(f, "<owner>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Fungible currency amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Asset(pub i64);

impl Asset {
    pub const ZERO: Asset = Asset(0);

    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Asset) -> Option<Asset> {
        self.0.checked_add(rhs.0).map(Asset)
    }

    pub fn checked_sub(self, rhs: Asset) -> Option<Asset> {
        self.0.checked_sub(rhs.0).map(Asset)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_derivation_is_deterministic() {
        let key = PublicKey::new("EVT6Qz3wuRjyN6gaU3P3XRxpz5ceTTsZYKDtDNuwvPB9ZCdNrWHLh");
        let a = GroupId::from_group_key(&key);
        let b = GroupId::from_group_key(&key);
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), GROUP_ID_LENGTH_BYTES * 2);
        assert!(!a.is_owner());

        let other = GroupId::from_group_key(&PublicKey::new("EVT-other"));
        assert_ne!(a, other);
    }

    #[test]
    fn test_owner_group_sorts_last_descending() {
        let id = GroupId::from_group_key(&PublicKey::new("k"));
        assert!(id > GroupId::owner());
        assert_eq!(GroupId::owner().to_string(), "<owner>");
    }

    #[test]
    fn test_asset_checked_ops() {
        assert_eq!(Asset(5).checked_add(Asset(3)), Some(Asset(8)));
        assert_eq!(Asset(5).checked_sub(Asset(3)), Some(Asset(2)));
        assert_eq!(Asset(i64::MAX).checked_add(Asset(1)), None);
        assert_eq!(Asset(i64::MIN).checked_sub(Asset(1)), None);
        assert!(Asset(1).is_positive());
        assert!(!Asset::ZERO.is_positive());
    }
}
