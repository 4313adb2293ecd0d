//! The selected team.

use serde::{Deserialize, Serialize};

use crate::core::{IdentityId, ParticipantId, RandomSource};

/// Which list a pick was drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickSource {
    /// The participant opted into the role.
    Preferred,
    /// Drawn from the unrestricted pool after preferences ran out.
    Fallback,
}

/// One selected participant, resolved to a live identity at pick time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub participant: ParticipantId,
    pub identity: IdentityId,
    pub source: PickSource,
}

/// Ordered set of picks with at most one leader.
///
/// Picks keep selection order. A finished non-empty team always has exactly
/// one leader. Deserialization enforces both: a record with repeated
/// participants or a missing or out-of-range leader is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamRecord")]
pub struct Team {
    picks: Vec<Pick>,
    leader: Option<usize>,
}

/// Unchecked wire form of [`Team`].
#[derive(Deserialize)]
struct TeamRecord {
    picks: Vec<Pick>,
    leader: Option<usize>,
}

impl TryFrom<TeamRecord> for Team {
    type Error = String;

    fn try_from(record: TeamRecord) -> Result<Self, Self::Error> {
        let mut team = Team::new();
        for pick in record.picks {
            if !team.push(pick) {
                return Err(format!("{} picked twice", pick.participant));
            }
        }

        match record.leader {
            None if team.is_empty() => {}
            Some(i) if i < team.len() => {}
            Some(i) => return Err(format!("leader index {i} out of range")),
            None => return Err("non-empty team has no leader".to_string()),
        }
        team.leader = record.leader;
        Ok(team)
    }
}

impl Team {
    /// Create an empty team.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Check if the team has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Iterate over picks in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter()
    }

    /// Check if a participant was picked.
    #[must_use]
    pub fn contains(&self, participant: ParticipantId) -> bool {
        self.picks.iter().any(|p| p.participant == participant)
    }

    /// The leader's pick.
    #[must_use]
    pub fn leader(&self) -> Option<&Pick> {
        self.leader.and_then(|i| self.picks.get(i))
    }

    /// Check if `participant` leads the team.
    #[must_use]
    pub fn is_leader(&self, participant: ParticipantId) -> bool {
        self.leader().is_some_and(|p| p.participant == participant)
    }

    /// Number of picks drawn from the given list.
    #[must_use]
    pub fn count_from(&self, source: PickSource) -> usize {
        self.picks.iter().filter(|p| p.source == source).count()
    }

    /// Append a pick. Duplicates are ignored.
    pub(crate) fn push(&mut self, pick: Pick) -> bool {
        if self.contains(pick.participant) {
            return false;
        }
        self.picks.push(pick);
        true
    }

    /// Choose the leader uniformly from the current members.
    pub(crate) fn choose_leader<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.leader = (!self.picks.is_empty()).then(|| rng.index(self.picks.len()));
    }
}
