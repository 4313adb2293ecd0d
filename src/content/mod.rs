//! Content catalog: maps, word lists and antagonist prototypes.
//!
//! The rule looks up every named resource through the [`Catalog`] trait so
//! the host can back it with its own prototype storage. [`ContentRegistry`]
//! is the in-memory implementation used by tests and simple hosts.

mod registry;

pub use registry::{AntagPrototype, ContentRegistry};

/// Read-only lookup of named content.
pub trait Catalog {
    /// Check whether a map with this ID exists.
    fn has_map(&self, id: &str) -> bool;

    /// Get a word list by ID.
    fn word_list(&self, id: &str) -> Option<&[String]>;

    /// Get an antagonist prototype by ID.
    fn antag_prototype(&self, id: &str) -> Option<&AntagPrototype>;
}
