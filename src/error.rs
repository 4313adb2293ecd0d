//! Error types.
//!
//! None of these are fatal to the host. Precondition failures cancel the round
//! start, selection shortfalls leave the round without a team, and resource
//! failures only skip the feature that needed the resource.

use thiserror::Error;

use crate::lifecycle::{RoundPhase, Signal};
use crate::locale::LocMessage;

/// Round cannot start with the current ready participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PreconditionFailure {
    /// Nobody is ready.
    #[error("no participants are ready")]
    NoOneReady,

    /// Fewer ready participants than the rule needs and the start was not forced.
    #[error("{ready} participants ready, {minimum} required")]
    NotEnoughReady { ready: usize, minimum: usize },
}

impl PreconditionFailure {
    /// Announcement explaining the cancellation.
    #[must_use]
    pub fn to_message(&self) -> LocMessage {
        match *self {
            Self::NoOneReady => LocMessage::new("nuclear-no-one-ready"),
            Self::NotEnoughReady { ready, minimum } => {
                LocMessage::new("nuclear-not-enough-ready-players")
                    .with_arg("readyPlayersCount", ready)
                    .with_arg("minimumPlayers", minimum)
            }
        }
    }
}

/// Selection engine failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The pool failed the round-start preconditions.
    #[error(transparent)]
    Precondition(#[from] PreconditionFailure),

    /// Both pools ran dry before the minimum team size was exceeded.
    #[error("insufficient eligible participants: selected {selected} of {target}, minimum {minimum}")]
    Shortfall {
        selected: usize,
        target: usize,
        minimum: usize,
    },
}

/// A named external resource was not found.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("map `{0}` not found")]
    MissingMap(String),

    #[error("word list `{0}` not found")]
    MissingWordList(String),

    #[error("antagonist prototype `{0}` not found")]
    MissingPrototype(String),
}

/// Lifecycle signal arrived in a phase that cannot accept it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("{signal:?} signal is not valid in phase {phase:?}")]
    UnexpectedSignal { signal: Signal, phase: RoundPhase },
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
