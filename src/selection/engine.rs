//! Preference-then-fallback team selection.

use tracing::{debug, info, warn};

use crate::core::{Participant, RandomSource, TeamSizing};
use crate::error::{PreconditionFailure, SelectionError};

use super::{IdentityResolver, ParticipantPool, Pick, Team};

/// Inputs to one selection pass.
#[derive(Clone, Copy, Debug)]
pub struct SelectionParams<'a> {
    /// Team sizing bounds.
    pub sizing: TeamSizing,

    /// Role prototype participants opt into.
    pub prototype: &'a str,

    /// Whether the round start was forced past the player minimum.
    pub forced: bool,
}

impl<'a> SelectionParams<'a> {
    /// Create unforced selection parameters.
    #[must_use]
    pub fn new(sizing: TeamSizing, prototype: &'a str) -> Self {
        Self {
            sizing,
            prototype,
            forced: false,
        }
    }

    /// Mark the round as force-started.
    #[must_use]
    pub fn forced(mut self, forced: bool) -> Self {
        self.forced = forced;
        self
    }
}

/// Check whether `ready` participants are enough to start the round.
pub fn check_preconditions(
    ready: usize,
    forced: bool,
    min_players: usize,
) -> Result<(), PreconditionFailure> {
    if !forced && ready < min_players {
        return Err(PreconditionFailure::NotEnoughReady {
            ready,
            minimum: min_players,
        });
    }
    if ready == 0 {
        return Err(PreconditionFailure::NoOneReady);
    }
    Ok(())
}

/// Team size to aim for given the whole pool size.
///
/// `pool_size / players_per_member`, clamped into `[min_size, max_size]`.
#[must_use]
pub fn target_team_size(pool_size: usize, sizing: &TeamSizing) -> usize {
    (pool_size / sizing.players_per_member.max(1))
        .max(sizing.min_size)
        .min(sizing.max_size)
}

/// Select the round's team.
///
/// Preferred candidates are always exhausted before any fallback draw. If
/// both lists run dry the partial team is kept only when it already exceeds
/// `min_size`; otherwise the pass fails with [`SelectionError::Shortfall`].
/// Candidates whose identity no longer resolves at pick time are skipped
/// and do not count toward the target.
pub fn select_team<I, R>(
    candidates: &[Participant],
    params: &SelectionParams<'_>,
    resolver: &I,
    rng: &mut R,
) -> Result<Team, SelectionError>
where
    I: IdentityResolver + ?Sized,
    R: RandomSource + ?Sized,
{
    let sizing = &params.sizing;
    check_preconditions(candidates.len(), params.forced, sizing.min_players)?;

    let mut pool = ParticipantPool::partition(candidates, params.prototype);
    let target = target_team_size(candidates.len(), sizing);
    let mut team = Team::new();

    while team.len() < target {
        let Some((participant, source)) = pool.draw(rng) else {
            if team.len() > sizing.min_size {
                info!(
                    target: "antag::selection",
                    selected = team.len(),
                    target_size = target,
                    "Only {}/{} team members were found, stopping search",
                    team.len(),
                    target
                );
                break;
            }
            warn!(
                target: "antag::selection",
                selected = team.len(),
                target_size = target,
                minimum = sizing.min_size,
                "Insufficient ready players to fill the team, stopping selection"
            );
            return Err(SelectionError::Shortfall {
                selected: team.len(),
                target,
                minimum: sizing.min_size,
            });
        };

        let Some(identity) = resolver.live_identity(participant) else {
            debug!(
                target: "antag::selection",
                %participant,
                "Skipping pick without a live identity"
            );
            continue;
        };

        team.push(Pick {
            participant,
            identity,
            source,
        });
        info!(
            target: "antag::selection",
            %participant,
            ?source,
            "Team member #{} picked",
            team.len()
        );
    }

    team.choose_leader(rng);
    if let Some(leader) = team.leader() {
        info!(
            target: "antag::selection",
            participant = %leader.participant,
            size = team.len(),
            "Leader chosen"
        );
    }

    Ok(team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdentityId, ParticipantId, Profile, RoundRng};
    use crate::selection::{PickSource, SnapshotResolver};

    fn sizing(min_players: usize, min_size: usize, max_size: usize, ratio: usize) -> TeamSizing {
        TeamSizing {
            min_players,
            min_size,
            max_size,
            players_per_member: ratio,
        }
    }

    fn candidates(total: u64, preferred: u64) -> Vec<Participant> {
        (0..total)
            .map(|i| {
                let mut profile = Profile::new();
                if i < preferred {
                    profile = profile.with_preference("Operative");
                }
                Participant::new(ParticipantId::new(i))
                    .with_identity(IdentityId::new(1000 + i))
                    .with_profile(profile)
            })
            .collect()
    }

    #[test]
    fn test_target_team_size() {
        assert_eq!(target_team_size(10, &sizing(0, 1, 3, 5)), 2);
        assert_eq!(target_team_size(0, &sizing(0, 1, 3, 5)), 1);
        assert_eq!(target_team_size(100, &sizing(0, 1, 3, 5)), 3);
        assert_eq!(target_team_size(14, &sizing(0, 1, 3, 5)), 2);
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(
            check_preconditions(2, false, 5),
            Err(PreconditionFailure::NotEnoughReady { ready: 2, minimum: 5 })
        );
        assert!(check_preconditions(2, true, 5).is_ok());
        assert_eq!(
            check_preconditions(0, true, 5),
            Err(PreconditionFailure::NoOneReady)
        );
        assert_eq!(
            check_preconditions(0, false, 0),
            Err(PreconditionFailure::NoOneReady)
        );
    }

    #[test]
    fn test_precondition_failure_before_partition() {
        let pool = candidates(2, 2);
        let params = SelectionParams::new(sizing(5, 1, 3, 1), "Operative");
        let result = select_team(
            &pool,
            &params,
            &SnapshotResolver::new(&pool),
            &mut RoundRng::new(1),
        );

        assert_eq!(
            result,
            Err(SelectionError::Precondition(
                PreconditionFailure::NotEnoughReady { ready: 2, minimum: 5 }
            ))
        );
    }

    #[test]
    fn test_preferred_before_fallback() {
        let pool = candidates(10, 3);
        let params = SelectionParams::new(sizing(0, 1, 3, 5), "Operative");

        for seed in 0..20 {
            let team = select_team(
                &pool,
                &params,
                &SnapshotResolver::new(&pool),
                &mut RoundRng::new(seed),
            )
            .unwrap();

            assert_eq!(team.len(), 2);
            assert_eq!(team.count_from(PickSource::Preferred), 2);
            assert!(team.iter().all(|p| p.participant.raw() < 3));
        }
    }

    #[test]
    fn test_fallback_only() {
        let pool = candidates(4, 0);
        let params = SelectionParams::new(sizing(0, 1, 3, 1), "Operative");
        let team = select_team(
            &pool,
            &params,
            &SnapshotResolver::new(&pool),
            &mut RoundRng::new(5),
        )
        .unwrap();

        assert_eq!(team.len(), 3);
        assert_eq!(team.count_from(PickSource::Fallback), 3);
        assert!(team.contains(team.leader().unwrap().participant));
    }

    #[test]
    fn test_partial_fill_accepted_above_minimum() {
        // Ratio 1 targets 5, but only 3 eligible.
        let mut pool = candidates(3, 1);
        pool.push(Participant::new(ParticipantId::new(50)));
        pool.push(Participant::new(ParticipantId::new(51)));
        let params = SelectionParams::new(sizing(0, 2, 6, 1), "Operative");

        let team = select_team(
            &pool,
            &params,
            &SnapshotResolver::new(&pool),
            &mut RoundRng::new(3),
        )
        .unwrap();

        assert_eq!(team.len(), 3);
        assert!(team.leader().is_some());
    }

    #[test]
    fn test_shortfall_at_minimum() {
        let mut pool = candidates(2, 0);
        pool.extend((10..14).map(|i| Participant::new(ParticipantId::new(i))));
        let params = SelectionParams::new(sizing(0, 2, 6, 1), "Operative");

        let result = select_team(
            &pool,
            &params,
            &SnapshotResolver::new(&pool),
            &mut RoundRng::new(3),
        );

        assert_eq!(
            result,
            Err(SelectionError::Shortfall {
                selected: 2,
                target: 6,
                minimum: 2
            })
        );
    }

    struct Disconnecting(ParticipantId);

    impl IdentityResolver for Disconnecting {
        fn live_identity(&self, participant: ParticipantId) -> Option<IdentityId> {
            (participant != self.0).then(|| IdentityId::new(1000 + participant.raw()))
        }
    }

    #[test]
    fn test_stale_pick_skipped() {
        let pool = candidates(3, 3);
        let params = SelectionParams::new(sizing(0, 1, 3, 1), "Operative");
        let gone = ParticipantId::new(1);

        let team = select_team(&pool, &params, &Disconnecting(gone), &mut RoundRng::new(8)).unwrap();

        // Target 3, one dropped mid-selection: partial team of 2 > min 1.
        assert_eq!(team.len(), 2);
        assert!(!team.contains(gone));
    }

    #[test]
    fn test_deterministic_under_seed() {
        let pool = candidates(20, 5);
        let params = SelectionParams::new(sizing(0, 1, 6, 3), "Operative");
        let resolver = SnapshotResolver::new(&pool);

        let a = select_team(&pool, &params, &resolver, &mut RoundRng::new(77)).unwrap();
        let b = select_team(&pool, &params, &resolver, &mut RoundRng::new(77)).unwrap();
        assert_eq!(a, b);
    }
}
