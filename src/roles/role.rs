//! Per-member role state.

use serde::{Deserialize, Serialize};

use crate::content::AntagPrototype;
use crate::core::{IdentityId, ParticipantId};
use crate::selection::Pick;

use super::RoleRegistry;

/// Role held by one team member for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleState {
    /// Session holding the role.
    pub participant: ParticipantId,

    /// Identity the role is attached to.
    pub identity: IdentityId,

    /// Prototype ID of the role.
    pub prototype: String,

    /// Role display name.
    pub name: String,

    /// Counts as an antagonist.
    pub antagonist: bool,

    /// Team leader.
    pub leader: bool,

    /// Loadout equipped at spawn.
    pub starting_gear: Option<String>,

    /// Character name from the member's profile.
    pub character_name: Option<String>,

    /// In-world name, e.g. "Bonk Corp Agent Smith".
    pub official_name: Option<String>,

    /// Notes shown in the member's character menu.
    pub briefing: Option<String>,
}

impl RoleState {
    /// Name the member goes by in game: official name, else character name.
    ///
    /// Spawning and the round summary both use this.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.official_name
            .as_deref()
            .or(self.character_name.as_deref())
    }
}

/// Give `pick` the role described by `prototype`.
///
/// The pick already carries a live identity, so assignment cannot fail.
pub fn assign(
    registry: &mut RoleRegistry,
    pick: &Pick,
    prototype: &AntagPrototype,
    leader: bool,
) -> RoleState {
    registry.register(pick.identity, &prototype.id);

    RoleState {
        participant: pick.participant,
        identity: pick.identity,
        prototype: prototype.id.clone(),
        name: prototype.name.clone(),
        antagonist: prototype.antagonist,
        leader,
        starting_gear: prototype.starting_gear.clone(),
        character_name: None,
        official_name: None,
        briefing: None,
    }
}
