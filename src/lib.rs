//! # antag-rules
//!
//! Antagonist team selection and round lifecycle for round-based multiplayer
//! games.
//!
//! Once per round the rule picks a bounded team of participants for an
//! antagonist role, makes one of them leader, hands out shared codewords and
//! flavor names, and writes an end-of-round summary. The hosting engine stays
//! outside the crate: it feeds lifecycle signals in and receives messages,
//! spawn requests and summary text back.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Every draw goes through a [`RandomSource`].
//!    A seeded [`RoundRng`] replays a whole round exactly.
//!
//! 2. **Round-scoped state**: Team, roles, names and codewords live in the
//!    [`RoundCoordinator`] and are cleared when the round ends.
//!
//! 3. **Degrade, never abort**: Missing content or an unfillable team shrinks
//!    the round's team; it never takes the host down.
//!
//! ## Modules
//!
//! - `core`: Participants, RNG, configuration
//! - `content`: Maps, word lists and role prototypes
//! - `locale`: Localizable messages
//! - `selection`: Preference-then-fallback team selection
//! - `naming`: Round-cached flavor names and codewords
//! - `roles`: Role assignment and the identity-to-role registry
//! - `lifecycle`: Round state machine and host interfaces
//! - `summary`: End-of-round summary text

pub mod core;
pub mod content;
pub mod error;
pub mod lifecycle;
pub mod locale;
pub mod naming;
pub mod roles;
pub mod selection;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    IdentityId, NameDatasets, Participant, ParticipantId, Profile,
    RandomSource, RandomSourceExt, RoundRng, RoundRngState,
    RuleConfig, TeamSizing,
};

pub use crate::content::{AntagPrototype, Catalog, ContentRegistry};

pub use crate::error::{
    ConfigError, LifecycleError, PreconditionFailure, ResourceError, SelectionError,
};

pub use crate::lifecycle::{
    RoundCoordinator, RoundHost, RoundPhase, Signal, SpawnRequest, SpawningContext, StartAttempt,
};

pub use crate::locale::{FallbackLocalizer, LocMessage, Localizer};

pub use crate::naming::{NameGenerator, NameState};

pub use crate::roles::{assign, RoleRegistry, RoleState};

pub use crate::selection::{
    check_preconditions, select_team, target_team_size,
    IdentityResolver, ParticipantPool, Pick, PickSource, SelectionParams, SnapshotResolver, Team,
};

pub use crate::summary::{build_summary, summary_messages, SessionDirectory};
