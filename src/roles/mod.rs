//! Role assignment.
//!
//! Wraps each picked participant in a [`RoleState`] and records the role
//! against its identity in a [`RoleRegistry`], so other systems can ask
//! whether an identity holds a given role (e.g. to gate a notification).
//!
//! ```
//! use antag_rules::content::AntagPrototype;
//! use antag_rules::core::{IdentityId, ParticipantId};
//! use antag_rules::roles::{assign, RoleRegistry};
//! use antag_rules::selection::{Pick, PickSource};
//!
//! let prototype = AntagPrototype::new("Operative", "Nuclear Operative");
//! let pick = Pick {
//!     participant: ParticipantId::new(1),
//!     identity: IdentityId::new(10),
//!     source: PickSource::Preferred,
//! };
//!
//! let mut registry = RoleRegistry::new();
//! let role = assign(&mut registry, &pick, &prototype, true);
//!
//! assert!(role.leader);
//! assert!(registry.holds_role(IdentityId::new(10), "Operative"));
//! ```

mod registry;
mod role;

pub use registry::RoleRegistry;
pub use role::{assign, RoleState};
