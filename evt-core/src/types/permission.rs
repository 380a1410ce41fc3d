//! Weighted permission and group definitions
//!
//! Both shapes are an ordered member list plus a threshold. Members are kept
//! in strictly descending order by their id (groups) or key (keys).

use serde::{Deserialize, Serialize};

use super::common::{GroupId, Name, PublicKey};

/// A member of a weighted threshold rule
pub trait WeightedMember {
    /// Ordering key of the member
    type Id: Ord;

    fn member_id(&self) -> &Self::Id;

    fn weight(&self) -> u32;
}

/// Reference from a permission to a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupWeight {
    pub id: GroupId,
    pub weight: u32,
}

impl GroupWeight {
    pub fn new(id: GroupId, weight: u32) -> Self {
        Self { id, weight }
    }

    /// Reference to the owner pseudo-group
    pub fn owner(weight: u32) -> Self {
        Self {
            id: GroupId::owner(),
            weight,
        }
    }
}

impl WeightedMember for GroupWeight {
    type Id = GroupId;

    fn member_id(&self) -> &GroupId {
        &self.id
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

/// Key member of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyWeight {
    pub key: PublicKey,
    pub weight: u32,
}

impl KeyWeight {
    pub fn new(key: PublicKey, weight: u32) -> Self {
        Self { key, weight }
    }
}

impl WeightedMember for KeyWeight {
    type Id = PublicKey;

    fn member_id(&self) -> &PublicKey {
        &self.key
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

/// Named permission of a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDef {
    pub name: Name,
    pub threshold: u32,
    pub groups: Vec<GroupWeight>,
}

impl PermissionDef {
    pub fn new(name: impl Into<String>, threshold: u32, groups: Vec<GroupWeight>) -> Self {
        Self {
            name: Name::new(name),
            threshold,
            groups,
        }
    }
}

/// Group of weighted keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDef {
    pub id: GroupId,
    pub key: PublicKey,
    pub threshold: u32,
    pub keys: Vec<KeyWeight>,
}

impl GroupDef {
    /// Build a group whose id is derived from `key`
    pub fn new(key: PublicKey, threshold: u32, keys: Vec<KeyWeight>) -> Self {
        Self {
            id: GroupId::from_group_key(&key),
            key,
            threshold,
            keys,
        }
    }

    /// Whether the stored id is the one derived from the group key
    pub fn id_matches_key(&self) -> bool {
        self.id == GroupId::from_group_key(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_def_derives_id() {
        let key = PublicKey::new("EVT-group-key");
        let group = GroupDef::new(key.clone(), 1, vec![KeyWeight::new(key.clone(), 1)]);
        assert!(group.id_matches_key());

        let forged = GroupDef {
            id: GroupId::new("00000000000000000000000000000000"),
            ..group
        };
        assert!(!forged.id_matches_key());
    }

    #[test]
    fn test_owner_group_weight() {
        let gw = GroupWeight::owner(1);
        assert!(gw.member_id().is_owner());
        assert_eq!(gw.weight(), 1);
    }
}
