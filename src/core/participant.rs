//! Participant identification and profile data.
//!
//! A participant is one connected session. It may or may not currently own an
//! assignable identity (the in-game character the role is attached to), and
//! it may or may not have submitted a character profile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Session identifier assigned by the hosting environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant({})", self.0)
    }
}

/// Identity a role can be attached to.
///
/// Identities outlive sessions: a participant can disconnect and leave its
/// identity behind, or reconnect and pick it back up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityId(pub u64);

impl IdentityId {
    /// Create a new identity ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

/// Character profile submitted by a participant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// In-game character name.
    pub character_name: Option<String>,

    /// Antagonist roles the participant opted into, in declaration order.
    pub antag_preferences: SmallVec<[String; 4]>,
}

impl Profile {
    /// Create an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }

    /// Opt into an antagonist role. Duplicate declarations are ignored.
    #[must_use]
    pub fn with_preference(mut self, prototype: impl Into<String>) -> Self {
        let prototype = prototype.into();
        if !self.prefers(&prototype) {
            self.antag_preferences.push(prototype);
        }
        self
    }

    /// Check whether the participant opted into `prototype`.
    #[must_use]
    pub fn prefers(&self, prototype: &str) -> bool {
        self.antag_preferences.iter().any(|p| p == prototype)
    }
}

/// Snapshot of one candidate session at selection time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Session ID.
    pub id: ParticipantId,

    /// Currently attached identity, if any.
    pub identity: Option<IdentityId>,

    /// Submitted profile, if any.
    pub profile: Option<Profile>,
}

impl Participant {
    /// Create a participant with no identity and no profile.
    #[must_use]
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            identity: None,
            profile: None,
        }
    }

    /// Attach an identity.
    #[must_use]
    pub fn with_identity(mut self, identity: IdentityId) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Attach a profile.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Eligible for any antagonist selection: has both identity and profile.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.identity.is_some() && self.profile.is_some()
    }

    /// Eligible and opted into `prototype`.
    #[must_use]
    pub fn prefers(&self, prototype: &str) -> bool {
        self.is_eligible()
            && self
                .profile
                .as_ref()
                .is_some_and(|profile| profile.prefers(prototype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id() {
        let id = ParticipantId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Participant(5)");
    }

    #[test]
    fn test_profile_preferences_deduplicate() {
        let profile = Profile::new()
            .with_preference("Operative")
            .with_preference("Traitor")
            .with_preference("Operative");

        assert_eq!(profile.antag_preferences.len(), 2);
        assert!(profile.prefers("Operative"));
        assert!(!profile.prefers("Wizard"));
    }

    #[test]
    fn test_eligibility() {
        let id = ParticipantId::new(1);
        let profile = Profile::new().with_preference("Operative");

        assert!(!Participant::new(id).is_eligible());
        assert!(!Participant::new(id).with_identity(IdentityId::new(1)).is_eligible());
        assert!(!Participant::new(id).with_profile(profile.clone()).is_eligible());

        let full = Participant::new(id)
            .with_identity(IdentityId::new(1))
            .with_profile(profile);
        assert!(full.is_eligible());
        assert!(full.prefers("Operative"));
    }

    #[test]
    fn test_ineligible_never_prefers() {
        let p = Participant::new(ParticipantId::new(1))
            .with_profile(Profile::new().with_preference("Operative"));
        assert!(!p.prefers("Operative"));
    }
}
