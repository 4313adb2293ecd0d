//! End-of-round summary.
//!
//! One header line with the team size, then one line per member in team
//! order. Each line is phrased from whatever is known about the member: the
//! session handle, the display name, both, or neither (no line at all).

mod builder;

pub use builder::{build_summary, summary_messages};

use crate::core::ParticipantId;

/// Looks up session handles at round end.
///
/// Sessions may have disconnected during the round, so this is asked late
/// rather than captured at selection time.
pub trait SessionDirectory {
    /// The session handle (user name) for `participant`, if still known.
    fn session_name(&self, participant: ParticipantId) -> Option<String>;
}
