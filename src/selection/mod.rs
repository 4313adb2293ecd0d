//! Team selection.
//!
//! Builds the round's antagonist team from a snapshot of candidate sessions:
//!
//! 1. Check round-start preconditions against the candidate count.
//! 2. Partition eligible candidates into a `preferred` list (opted into the
//!    role) and a `fallback` list (everyone eligible).
//! 3. Draw until the target size is reached, exhausting `preferred` before
//!    touching `fallback`.
//! 4. Choose one leader from the finished team.
//!
//! ## Example
//!
//! ```
//! use antag_rules::core::{IdentityId, Participant, ParticipantId, Profile, RoundRng, TeamSizing};
//! use antag_rules::selection::{select_team, SelectionParams, SnapshotResolver};
//!
//! let candidates: Vec<_> = (0..10)
//!     .map(|i| {
//!         let mut profile = Profile::new();
//!         if i < 3 {
//!             profile = profile.with_preference("Operative");
//!         }
//!         Participant::new(ParticipantId::new(i))
//!             .with_identity(IdentityId::new(100 + i))
//!             .with_profile(profile)
//!     })
//!     .collect();
//!
//! let sizing = TeamSizing { min_players: 0, min_size: 1, max_size: 3, players_per_member: 5 };
//! let params = SelectionParams::new(sizing, "Operative");
//! let resolver = SnapshotResolver::new(&candidates);
//!
//! let team = select_team(&candidates, &params, &resolver, &mut RoundRng::new(42)).unwrap();
//! assert_eq!(team.len(), 2);
//! assert!(team.iter().all(|pick| pick.participant.raw() < 3));
//! assert!(team.leader().is_some());
//! ```

mod engine;
mod pool;
mod team;

pub use engine::{check_preconditions, select_team, target_team_size, SelectionParams};
pub use pool::ParticipantPool;
pub use team::{Pick, PickSource, Team};

use crate::core::{IdentityId, Participant, ParticipantId};

/// Answers whether a participant still has a live identity right now.
///
/// Selection asks at pick time, after the candidate snapshot was taken,
/// so sessions that dropped mid-selection are skipped.
pub trait IdentityResolver {
    /// The identity currently attached to `participant`, if any.
    fn live_identity(&self, participant: ParticipantId) -> Option<IdentityId>;
}

/// Resolver that trusts the candidate snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotResolver<'a> {
    candidates: &'a [Participant],
}

impl<'a> SnapshotResolver<'a> {
    /// Resolve identities from `candidates`.
    #[must_use]
    pub fn new(candidates: &'a [Participant]) -> Self {
        Self { candidates }
    }
}

impl IdentityResolver for SnapshotResolver<'_> {
    fn live_identity(&self, participant: ParticipantId) -> Option<IdentityId> {
        self.candidates
            .iter()
            .find(|p| p.id == participant)
            .and_then(|p| p.identity)
    }
}
