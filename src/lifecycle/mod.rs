//! Round lifecycle.
//!
//! The host engine drives the rule through a fixed sequence of signals each
//! round:
//!
//! ```text
//! Idle --loading maps--> PreRound --spawning--> TeamSelected
//!   ^                       |                        |
//!   |                 start attempt              jobs assigned
//!   +----(cancelled)--------+                        v
//!   +-----------reset------------ RoundEnded <--round end-- RoundActive
//! ```
//!
//! [`RoundCoordinator`] owns all round state (team, roles, names, codewords)
//! and clears it unconditionally when the round ends. Signals arriving out of
//! order are rejected with [`LifecycleError`](crate::error::LifecycleError)
//! and leave the state untouched.

mod coordinator;
mod host;
mod signals;

pub use coordinator::RoundCoordinator;
pub use host::{RoundHost, SpawningContext};
pub use signals::{SpawnRequest, StartAttempt};

use serde::{Deserialize, Serialize};

/// Where the coordinator is within the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round in preparation.
    #[default]
    Idle,
    /// Maps registered, waiting for the start attempt and spawning.
    PreRound,
    /// Team selected and spawned.
    TeamSelected,
    /// Codewords distributed; the round is running.
    RoundActive,
    /// Summary produced and round state cleared.
    RoundEnded,
}

/// Lifecycle signals, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Maps are about to load.
    LoadingMaps,
    /// The host is trying to start the round.
    StartAttempt,
    /// Participants are about to be spawned.
    PlayerSpawning,
    /// Regular jobs have been handed out.
    JobsAssigned,
    /// The round is over and the summary is being written.
    RoundEnd,
}
