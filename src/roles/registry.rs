//! Identity-to-role lookup.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::IdentityId;

/// Roles attached to each identity this round.
#[derive(Clone, Debug, Default)]
pub struct RoleRegistry {
    roles: FxHashMap<IdentityId, SmallVec<[String; 2]>>,
}

impl RoleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `prototype` to `identity`. Attaching twice is a no-op.
    pub fn register(&mut self, identity: IdentityId, prototype: &str) {
        let held = self.roles.entry(identity).or_default();
        if !held.iter().any(|p| p == prototype) {
            held.push(prototype.to_string());
        }
    }

    /// Check whether `identity` holds `prototype`.
    #[must_use]
    pub fn holds_role(&self, identity: IdentityId, prototype: &str) -> bool {
        self.roles
            .get(&identity)
            .is_some_and(|held| held.iter().any(|p| p == prototype))
    }

    /// Every identity holding `prototype`.
    pub fn holders<'a>(&'a self, prototype: &'a str) -> impl Iterator<Item = IdentityId> + 'a {
        self.roles
            .iter()
            .filter(move |(_, held)| held.iter().any(|p| p == prototype))
            .map(|(identity, _)| *identity)
    }

    /// Number of identities holding at least one role.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if no roles are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Drop every role.
    pub fn clear(&mut self) {
        self.roles.clear();
    }
}
