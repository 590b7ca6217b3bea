//! Constituent order tags

use crate::tree::TreeNode;
use std::fmt;

/// Clause element positions tracked for order tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The clause head
    Verb,
    /// First subject dependent
    Subject,
    /// First object dependent
    Object,
    /// First indirect object dependent
    IndirectObject,
}

impl Role {
    /// Single-letter label used in order tags
    pub fn label(&self) -> char {
        match self {
            Role::Verb => 'V',
            Role::Subject => 'S',
            Role::Object => 'O',
            Role::IndirectObject => 'I',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Roles mapped to sentence positions, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    entries: Vec<(Role, usize)>,
}

impl RoleMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `role`, replacing an earlier registration
    pub fn register<N: TreeNode>(&mut self, role: Role, node: &N) {
        self.insert(role, node.ord());
    }

    /// Register a raw position under `role`
    pub fn insert(&mut self, role: Role, ord: usize) {
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = ord,
            None => self.entries.push((role, ord)),
        }
    }

    /// Whether `role` has been registered
    pub fn contains(&self, role: Role) -> bool {
        self.entries.iter().any(|(r, _)| *r == role)
    }

    /// Number of registered roles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no role has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels sorted by position, e.g. `SOV`
    pub fn order_tag(&self) -> String {
        order_tag(self)
    }
}

impl<const N: usize> From<[(Role, usize); N]> for RoleMap {
    fn from(entries: [(Role, usize); N]) -> Self {
        let mut map = Self::new();
        for (role, ord) in entries {
            map.insert(role, ord);
        }
        map
    }
}

/// Concatenate role labels in ascending position
///
/// Equal positions keep registration order (the sort is stable).
pub fn order_tag(roles: &RoleMap) -> String {
    let mut entries = roles.entries.clone();
    entries.sort_by_key(|&(_, ord)| ord);
    entries.iter().map(|(role, _)| role.label()).collect()
}
