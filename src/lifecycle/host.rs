//! Host-side collaborators.

use crate::core::{Participant, ParticipantId};
use crate::locale::LocMessage;
use crate::selection::IdentityResolver;

use super::SpawnRequest;

/// Outbound messaging.
pub trait RoundHost {
    /// Broadcast to every connected session.
    fn announce(&mut self, message: &LocMessage);

    /// Send a message to one session.
    fn send_to(&mut self, participant: ParticipantId, message: &LocMessage);
}

/// Participant-spawning signal.
///
/// Gives access to the spawn queue the host is about to process. Team members
/// are removed from the queue and spawned through [`SpawningContext::spawn`]
/// instead.
pub trait SpawningContext: IdentityResolver {
    /// Snapshot of every queued participant with profile data.
    fn candidates(&self) -> Vec<Participant>;

    /// Whether the round start was forced.
    fn forced(&self) -> bool;

    /// Take a participant out of the regular spawn queue.
    fn remove_from_pool(&mut self, participant: ParticipantId);

    /// Spawn and equip a team member.
    fn spawn(&mut self, request: SpawnRequest);
}
