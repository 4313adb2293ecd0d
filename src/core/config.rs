//! Rule configuration.
//!
//! Hosts supply a [`RuleConfig`] when the rule is constructed. Every field has
//! a default, so a TOML file only needs the options it overrides:
//!
//! ```
//! use antag_rules::core::RuleConfig;
//!
//! let config = RuleConfig::from_toml_str(r#"
//!     codeword_count = 6
//!
//!     [sizing]
//!     max_size = 4
//! "#).unwrap();
//!
//! assert_eq!(config.codeword_count, 6);
//! assert_eq!(config.sizing.max_size, 4);
//! assert_eq!(config.sizing.min_size, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Team sizing parameters consumed by the selection engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSizing {
    /// Minimum ready participants for an unforced round start.
    pub min_players: usize,

    /// Smallest team the selection engine will accept.
    pub min_size: usize,

    /// Largest team the selection engine will build.
    pub max_size: usize,

    /// One team member per this many participants in the pool.
    pub players_per_member: usize,
}

impl Default for TeamSizing {
    fn default() -> Self {
        Self {
            min_players: 15,
            min_size: 2,
            max_size: 6,
            players_per_member: 5,
        }
    }
}

impl TeamSizing {
    /// Check the sizing is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players_per_member == 0 {
            return Err(ConfigError::Invalid(
                "players_per_member must be at least 1".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "min_size ({}) exceeds max_size ({})",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}

/// Word lists used for flavor names and codewords.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameDatasets {
    /// First half of the organization name.
    pub organization_first: String,
    /// Second half of the organization name.
    pub organization_last: String,
    /// Title for regular members.
    pub member_title: String,
    /// Title for the leader.
    pub leader_title: String,
    /// Surnames used in official names.
    pub surnames: String,
    /// Codeword pool, part one.
    pub codeword_adjectives: String,
    /// Codeword pool, part two.
    pub codeword_verbs: String,
}

impl Default for NameDatasets {
    fn default() -> Self {
        Self {
            organization_first: "first_names_nuclear".to_string(),
            organization_last: "last_names_nuclear".to_string(),
            member_title: "agent_title_nuclear".to_string(),
            leader_title: "commander_title_nuclear".to_string(),
            surnames: "names_last".to_string(),
            codeword_adjectives: "adjectives".to_string(),
            codeword_verbs: "verbs".to_string(),
        }
    }
}

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Map loaded alongside the station for the team's base.
    pub map: String,

    /// Antagonist prototype assigned to team members.
    ///
    /// Also the preference key participants opt into.
    pub antag_prototype: String,

    /// Team sizing.
    pub sizing: TeamSizing,

    /// Number of codewords handed out per round.
    pub codeword_count: usize,

    /// Starting balance passed through to the spawner's uplink setup.
    pub starting_balance: i64,

    /// Word list names.
    pub datasets: NameDatasets,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            map: "nukieplanet".to_string(),
            antag_prototype: "Operative".to_string(),
            sizing: TeamSizing::default(),
            codeword_count: 4,
            starting_balance: 40,
            datasets: NameDatasets::default(),
        }
    }
}

impl RuleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the team sizing.
    #[must_use]
    pub fn with_sizing(mut self, sizing: TeamSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Set the codeword count.
    #[must_use]
    pub fn with_codeword_count(mut self, count: usize) -> Self {
        self.codeword_count = count;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sizing.validate()?;
        if self.antag_prototype.is_empty() {
            return Err(ConfigError::Invalid(
                "antag_prototype must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RuleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.antag_prototype, "Operative");
        assert_eq!(config.codeword_count, 4);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RuleConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuleConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = RuleConfig::from_toml_str(
            r#"
            map = "syndibase"
            starting_balance = 25

            [sizing]
            min_players = 0
            players_per_member = 3

            [datasets]
            codeword_verbs = "actions"
            "#,
        )
        .unwrap();

        assert_eq!(config.map, "syndibase");
        assert_eq!(config.starting_balance, 25);
        assert_eq!(config.sizing.min_players, 0);
        assert_eq!(config.sizing.players_per_member, 3);
        assert_eq!(config.sizing.max_size, 6);
        assert_eq!(config.datasets.codeword_verbs, "actions");
        assert_eq!(config.datasets.codeword_adjectives, "adjectives");
    }

    #[test]
    fn test_zero_ratio_rejected() {
        let result = RuleConfig::from_toml_str("[sizing]\nplayers_per_member = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let sizing = TeamSizing {
            min_size: 5,
            max_size: 3,
            ..TeamSizing::default()
        };
        assert!(sizing.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = RuleConfig::from_toml_str("codeword_count = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
