//! Core types: participants, RNG, configuration.
//!
//! Everything else in the crate is built on these. They carry no round state
//! of their own.

pub mod config;
pub mod participant;
pub mod rng;

pub use config::{NameDatasets, RuleConfig, TeamSizing};
pub use participant::{IdentityId, Participant, ParticipantId, Profile};
pub use rng::{RandomSource, RandomSourceExt, RoundRng, RoundRngState};
