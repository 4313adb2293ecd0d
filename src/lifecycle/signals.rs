//! Signal payloads exchanged with the host.

use serde::{Deserialize, Serialize};

use crate::core::{IdentityId, ParticipantId};

/// Round start attempt.
///
/// The host checks [`StartAttempt::is_cancelled`] after every rule has seen
/// the attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartAttempt {
    /// Number of ready participants.
    pub ready: usize,

    /// Whether an admin forced the start past the player minimum.
    pub forced: bool,

    cancelled: bool,
}

impl StartAttempt {
    /// Create an uncancelled start attempt.
    #[must_use]
    pub fn new(ready: usize, forced: bool) -> Self {
        Self {
            ready,
            forced,
            cancelled: false,
        }
    }

    /// Cancel the round start.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Check whether any rule cancelled the start.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Everything the host needs to spawn one team member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub participant: ParticipantId,
    pub identity: IdentityId,

    /// Map hosting the team's spawn points.
    pub map: String,

    /// Name to give the spawned character.
    pub name: Option<String>,

    /// Loadout to equip.
    pub starting_gear: Option<String>,

    /// Balance for the member's uplink.
    pub starting_balance: i64,

    /// Whether this member leads the team.
    pub leader: bool,
}
