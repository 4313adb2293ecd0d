//! Injectable random source for round setup.
//!
//! Every random decision made during a round (team picks, leader choice,
//! flavor names, codewords) goes through a [`RandomSource`]. Production code
//! uses [`RoundRng`]; tests seed it so a whole round replays identically.
//!
//! ## Usage
//!
//! ```
//! use antag_rules::core::{RandomSourceExt, RoundRng};
//!
//! let mut rng = RoundRng::new(42);
//! let mut pool = vec!["alpha", "bravo", "charlie"];
//!
//! let taken = rng.pick_and_take(&mut pool).unwrap();
//! assert_eq!(pool.len(), 2);
//! assert!(!pool.contains(&taken));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform random provider.
///
/// Implementors only need to supply index draws; the pick helpers live on
/// [`RandomSourceExt`] so `&mut dyn RandomSource` gets them too.
pub trait RandomSource {
    /// Draw an index uniformly from `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// Pick helpers available on every [`RandomSource`].
pub trait RandomSourceExt: RandomSource {
    /// Choose one element uniformly at random. `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }

    /// Remove and return one element chosen uniformly at random.
    ///
    /// Order of the remaining elements is not preserved.
    fn pick_and_take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        Some(items.swap_remove(i))
    }
}

impl<R: RandomSource + ?Sized> RandomSourceExt for R {}

/// Deterministic round RNG.
///
/// Uses ChaCha8 so a fixed seed reproduces every draw of a round, and the
/// position in the stream can be checkpointed for replays.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a fresh random seed.
    ///
    /// The seed stays retrievable through [`RoundRng::seed`] for replays.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RoundRngState {
        RoundRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RoundRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for RoundRng {
    fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_order(seed: u64) -> Vec<u64> {
        let mut rng = RoundRng::new(seed);
        let mut volunteers: Vec<u64> = (0..20).collect();
        std::iter::from_fn(|| rng.pick_and_take(&mut volunteers)).collect()
    }

    #[test]
    fn test_same_seed_same_draw_order() {
        assert_eq!(drain_order(42), drain_order(42));
    }

    #[test]
    fn test_seed_changes_draw_order() {
        assert_ne!(drain_order(1), drain_order(2));
    }

    #[test]
    fn test_pick() {
        let mut rng = RoundRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.pick(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.pick(&empty).is_none());
    }

    #[test]
    fn test_pick_and_take_drains_without_repeats() {
        let mut rng = RoundRng::new(7);
        let mut items: Vec<u32> = (0..20).collect();
        let mut taken = Vec::new();

        while let Some(item) = rng.pick_and_take(&mut items) {
            assert!(!taken.contains(&item));
            taken.push(item);
        }

        assert!(items.is_empty());
        taken.sort_unstable();
        assert_eq!(taken, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_dyn_source_has_helpers() {
        let mut rng = RoundRng::new(3);
        let source: &mut dyn RandomSource = &mut rng;
        let mut items = vec!["a"];

        assert_eq!(source.pick_and_take(&mut items), Some("a"));
        assert_eq!(source.pick_and_take(&mut items), None);
    }

    #[test]
    fn test_checkpoint_after_selection_replays_codewords() {
        use crate::content::ContentRegistry;
        use crate::core::{IdentityId, NameDatasets, Participant, ParticipantId, TeamSizing};
        use crate::naming::NameGenerator;
        use crate::selection::{select_team, SelectionParams, SnapshotResolver};

        let candidates: Vec<_> = (0..12)
            .map(|i| Participant::new(ParticipantId::new(i)).with_identity(IdentityId::new(i)))
            .collect();
        let sizing = TeamSizing {
            min_players: 0,
            min_size: 1,
            max_size: 4,
            players_per_member: 3,
        };
        let params = SelectionParams::new(sizing, "Operative");
        let mut catalog = ContentRegistry::new();
        catalog.register_word_list("adjectives", ["red", "quiet", "bold", "grim", "pale"]);
        catalog.register_word_list("verbs", ["run", "hide", "seek", "wait", "burn"]);

        let mut rng = RoundRng::new(42);
        select_team(&candidates, &params, &SnapshotResolver::new(&candidates), &mut rng).unwrap();

        let json = serde_json::to_string(&rng.state()).unwrap();
        let live = NameGenerator::new(NameDatasets::default())
            .codewords(4, &catalog, &mut rng)
            .to_vec();

        let state: RoundRngState = serde_json::from_str(&json).unwrap();
        let mut restored = RoundRng::from_state(&state);
        let replayed = NameGenerator::new(NameDatasets::default())
            .codewords(4, &catalog, &mut restored)
            .to_vec();

        assert_eq!(live, replayed);
        assert_eq!(restored.state(), rng.state());
    }

    #[test]
    fn test_from_entropy_keeps_seed() {
        let rng = RoundRng::from_entropy();
        assert_eq!(rng.state().seed, rng.seed());
    }
}
