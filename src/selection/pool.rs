//! Preferred/fallback partition of the candidate pool.

use crate::core::{Participant, ParticipantId, RandomSource, RandomSourceExt};

use super::PickSource;

/// Working lists for one selection pass.
///
/// Built once from an immutable candidate snapshot; draws shrink the lists
/// and never touch the snapshot. Candidates without an identity or profile
/// appear in neither list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipantPool {
    preferred: Vec<ParticipantId>,
    fallback: Vec<ParticipantId>,
}

impl ParticipantPool {
    /// Partition `candidates` by whether they opted into `prototype`.
    ///
    /// `fallback` holds every eligible candidate, preferred ones included.
    #[must_use]
    pub fn partition(candidates: &[Participant], prototype: &str) -> Self {
        let mut pool = Self::default();
        for candidate in candidates.iter().filter(|c| c.is_eligible()) {
            if pool.fallback.contains(&candidate.id) {
                continue;
            }
            if candidate.prefers(prototype) {
                pool.preferred.push(candidate.id);
            }
            pool.fallback.push(candidate.id);
        }
        pool
    }

    /// Participants who opted in and are still undrawn.
    #[must_use]
    pub fn preferred(&self) -> &[ParticipantId] {
        &self.preferred
    }

    /// Every eligible participant still undrawn.
    #[must_use]
    pub fn fallback(&self) -> &[ParticipantId] {
        &self.fallback
    }

    /// Check if both lists are empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.preferred.is_empty() && self.fallback.is_empty()
    }

    /// Draw one participant, preferred list first.
    ///
    /// A preferred draw also removes the participant from `fallback`, so
    /// nobody can be drawn twice. Returns `None` once both lists are empty.
    pub fn draw<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(ParticipantId, PickSource)> {
        if let Some(id) = rng.pick_and_take(&mut self.preferred) {
            self.fallback.retain(|other| *other != id);
            return Some((id, PickSource::Preferred));
        }

        rng.pick_and_take(&mut self.fallback)
            .map(|id| (id, PickSource::Fallback))
    }
}
