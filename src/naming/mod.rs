//! Round-scoped flavor names and codewords.
//!
//! Everything here is drawn lazily from catalog word lists and cached until
//! [`NameGenerator::clear`] runs at round end. Repeated calls within a round
//! never redraw:
//!
//! ```
//! use antag_rules::content::ContentRegistry;
//! use antag_rules::core::{NameDatasets, RoundRng};
//! use antag_rules::naming::NameGenerator;
//!
//! let mut catalog = ContentRegistry::new();
//! catalog.register_word_list("adjectives", ["red", "quiet", "bold"]);
//! catalog.register_word_list("verbs", ["run", "hide"]);
//!
//! let mut rng = RoundRng::new(42);
//! let mut names = NameGenerator::new(NameDatasets::default());
//!
//! let first = names.codewords(3, &catalog, &mut rng).to_vec();
//! let second = names.codewords(3, &catalog, &mut rng).to_vec();
//! assert_eq!(first, second);
//!
//! // Only five words exist, so asking for ten yields five.
//! names.clear();
//! assert_eq!(names.codewords(10, &catalog, &mut rng).len(), 5);
//! ```

mod generator;

pub use generator::{NameGenerator, NameState};
