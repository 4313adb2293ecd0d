//! Name and codeword generator.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::content::Catalog;
use crate::core::{NameDatasets, RandomSource, RandomSourceExt};
use crate::error::ResourceError;

/// Cached flavor names for the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameState {
    /// Organization the team works for (e.g. "Bonk Corp").
    pub organization: Option<String>,
    /// Title prefix for the leader.
    pub leader_title: Option<String>,
    /// Title prefix for everyone else.
    pub member_title: Option<String>,
}

impl NameState {
    /// Check that nothing has been drawn yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organization.is_none() && self.leader_title.is_none() && self.member_title.is_none()
    }
}

/// Lazily draws and caches names and codewords for one round.
#[derive(Clone, Debug)]
pub struct NameGenerator {
    datasets: NameDatasets,
    names: NameState,
    codewords: Option<Vec<String>>,
}

impl NameGenerator {
    /// Create a generator drawing from the given word lists.
    #[must_use]
    pub fn new(datasets: NameDatasets) -> Self {
        Self {
            datasets,
            names: NameState::default(),
            codewords: None,
        }
    }

    /// Names drawn so far this round.
    #[must_use]
    pub fn names(&self) -> &NameState {
        &self.names
    }

    /// Codewords, if generated this round.
    #[must_use]
    pub fn cached_codewords(&self) -> Option<&[String]> {
        self.codewords.as_deref()
    }

    /// Organization name: one first-half and one second-half word.
    ///
    /// `None` if either word list is missing; nothing is cached in that case.
    pub fn organization_name<C, R>(&mut self, catalog: &C, rng: &mut R) -> Option<&str>
    where
        C: Catalog + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.names.organization.is_none() {
            let first = draw_word(catalog, &self.datasets.organization_first, rng);
            let last = draw_word(catalog, &self.datasets.organization_last, rng);
            self.names.organization = first.zip(last).map(|(f, l)| format!("{f} {l}"));
        }
        self.names.organization.as_deref()
    }

    /// Title prefix for the leader (e.g. "Commander").
    pub fn leader_title<C, R>(&mut self, catalog: &C, rng: &mut R) -> Option<&str>
    where
        C: Catalog + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.names.leader_title.is_none() {
            self.names.leader_title = draw_word(catalog, &self.datasets.leader_title, rng);
        }
        self.names.leader_title.as_deref()
    }

    /// Title prefix for regular members (e.g. "Agent").
    pub fn member_title<C, R>(&mut self, catalog: &C, rng: &mut R) -> Option<&str>
    where
        C: Catalog + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.names.member_title.is_none() {
            self.names.member_title = draw_word(catalog, &self.datasets.member_title, rng);
        }
        self.names.member_title.as_deref()
    }

    /// Full in-world name, e.g. "Bonk Corp Agent Smith".
    ///
    /// Organization and title come from the round cache; the surname is
    /// drawn fresh on every call.
    pub fn official_name<C, R>(&mut self, leader: bool, catalog: &C, rng: &mut R) -> Option<String>
    where
        C: Catalog + ?Sized,
        R: RandomSource + ?Sized,
    {
        let organization = self.organization_name(catalog, rng)?.to_string();
        let title = if leader {
            self.leader_title(catalog, rng)?.to_string()
        } else {
            self.member_title(catalog, rng)?.to_string()
        };
        let surname = draw_word(catalog, &self.datasets.surnames, rng)?;

        Some(format!("{organization} {title} {surname}"))
    }

    /// Distinct codewords for the round.
    ///
    /// The adjective and verb lists are merged and `min(count, merged size)`
    /// words drawn without replacement, in draw order. The first call fixes
    /// the set; later calls return it unchanged whatever `count` they pass.
    pub fn codewords<C, R>(&mut self, count: usize, catalog: &C, rng: &mut R) -> &[String]
    where
        C: Catalog + ?Sized,
        R: RandomSource + ?Sized,
    {
        let datasets = &self.datasets;
        let codewords = self.codewords.get_or_insert_with(|| {
            let mut pool: Vec<String> = Vec::new();
            for id in [&datasets.codeword_adjectives, &datasets.codeword_verbs] {
                match lookup(catalog, id) {
                    Ok(words) => pool.extend(words.iter().cloned()),
                    Err(err) => log_missing(&err),
                }
            }
            pool.sort_unstable();
            pool.dedup();

            let take = count.min(pool.len());
            let mut drawn = Vec::with_capacity(take);
            while drawn.len() < take {
                match rng.pick_and_take(&mut pool) {
                    Some(word) => drawn.push(word),
                    None => break,
                }
            }
            drawn
        });
        codewords.as_slice()
    }

    /// Forget everything drawn this round.
    pub fn clear(&mut self) {
        self.names = NameState::default();
        self.codewords = None;
    }
}

fn lookup<'a, C: Catalog + ?Sized>(catalog: &'a C, id: &str) -> Result<&'a [String], ResourceError> {
    catalog
        .word_list(id)
        .filter(|words| !words.is_empty())
        .ok_or_else(|| ResourceError::MissingWordList(id.to_string()))
}

fn log_missing(err: &ResourceError) {
    error!(target: "antag::naming", error = %err, "Failed to draw name");
}

fn draw_word<C, R>(catalog: &C, id: &str, rng: &mut R) -> Option<String>
where
    C: Catalog + ?Sized,
    R: RandomSource + ?Sized,
{
    match lookup(catalog, id) {
        Ok(words) => rng.pick(words).cloned(),
        Err(err) => {
            log_missing(&err);
            None
        }
    }
}
