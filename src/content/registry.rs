//! In-memory content registry.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::error::ConfigError;

/// Antagonist role prototype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntagPrototype {
    /// Prototype ID, also the preference key.
    pub id: String,

    /// Display name of the role.
    pub name: String,

    /// Whether holders count as antagonists.
    #[serde(default = "default_antagonist")]
    pub antagonist: bool,

    /// Loadout equipped when the holder spawns.
    #[serde(default)]
    pub starting_gear: Option<String>,
}

fn default_antagonist() -> bool {
    true
}

impl AntagPrototype {
    /// Create an antagonist prototype with no starting gear.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            antagonist: true,
            starting_gear: None,
        }
    }

    /// Set the starting gear.
    #[must_use]
    pub fn with_starting_gear(mut self, gear: impl Into<String>) -> Self {
        self.starting_gear = Some(gear.into());
        self
    }
}

/// Registry of maps, word lists and antagonist prototypes.
///
/// ## Example
///
/// ```
/// use antag_rules::content::{AntagPrototype, Catalog, ContentRegistry};
///
/// let mut registry = ContentRegistry::new();
/// registry.register_map("nukieplanet");
/// registry.register_word_list("verbs", ["run", "hide"]);
/// registry.register_antag(AntagPrototype::new("Operative", "Nuclear Operative"));
///
/// assert!(registry.has_map("nukieplanet"));
/// assert_eq!(registry.word_list("verbs").unwrap().len(), 2);
/// assert!(registry.antag_prototype("Operative").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    maps: FxHashSet<String>,
    word_lists: FxHashMap<String, Vec<String>>,
    antags: FxHashMap<String, AntagPrototype>,
}

/// On-disk layout accepted by [`ContentRegistry::from_toml_str`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentFile {
    maps: Vec<String>,
    word_lists: FxHashMap<String, Vec<String>>,
    antags: Vec<AntagPrototype>,
}

impl ContentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a TOML document.
    ///
    /// ```toml
    /// maps = ["nukieplanet"]
    ///
    /// [word_lists]
    /// verbs = ["run", "hide"]
    ///
    /// [[antags]]
    /// id = "Operative"
    /// name = "Nuclear Operative"
    /// starting_gear = "SyndicateOperativeGearFull"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ContentFile = toml::from_str(content)?;

        let mut registry = Self::new();
        for map in file.maps {
            registry.register_map(map);
        }
        for (id, words) in file.word_lists {
            registry.register_word_list(id, words);
        }
        for antag in file.antags {
            registry.register_antag(antag);
        }
        Ok(registry)
    }

    /// Register a map ID.
    pub fn register_map(&mut self, id: impl Into<String>) {
        self.maps.insert(id.into());
    }

    /// Register a word list, replacing any list with the same ID.
    pub fn register_word_list<I, S>(&mut self, id: impl Into<String>, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect();
        self.word_lists.insert(id.into(), words);
    }

    /// Register an antagonist prototype, replacing any with the same ID.
    pub fn register_antag(&mut self, prototype: AntagPrototype) {
        self.antags.insert(prototype.id.clone(), prototype);
    }

    /// Number of registered word lists.
    #[must_use]
    pub fn word_list_count(&self) -> usize {
        self.word_lists.len()
    }
}

impl Catalog for ContentRegistry {
    fn has_map(&self, id: &str) -> bool {
        self.maps.contains(id)
    }

    fn word_list(&self, id: &str) -> Option<&[String]> {
        self.word_lists.get(id).map(Vec::as_slice)
    }

    fn antag_prototype(&self, id: &str) -> Option<&AntagPrototype> {
        self.antags.get(id)
    }
}
