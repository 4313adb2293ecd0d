//! Localizable messages.
//!
//! The rule never formats user-facing text itself. It emits [`LocMessage`]s
//! (a message key plus named arguments) and the host renders them through a
//! [`Localizer`]. [`FallbackLocalizer`] ships English phrasings for every key
//! the rule emits so the crate is usable without a translation backend.

use serde::{Deserialize, Serialize};

/// A message key with named, pre-stringified arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocMessage {
    /// Message key.
    pub key: String,

    /// Named arguments, in insertion order.
    pub args: Vec<(String, String)>,
}

impl LocMessage {
    /// Create a message with no arguments.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument (builder pattern).
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args.push((name.into(), value.to_string()));
        self
    }

    /// Look up an argument by name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Renders messages to text.
pub trait Localizer {
    /// Render `message`. Unknown keys should render as something visible
    /// rather than an empty string.
    fn localize(&self, message: &LocMessage) -> String;
}

/// Built-in English phrasings.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackLocalizer;

impl FallbackLocalizer {
    fn template(key: &str) -> Option<&'static str> {
        Some(match key {
            "rule-nuclear-added-announcement" => "A nuclear operative team is inbound.",
            "nuclear-not-enough-ready-players" => {
                "Not enough players readied up for the game! There were {readyPlayersCount} players readied up out of {minimumPlayers} needed. Can't start Nukeops."
            }
            "nuclear-no-one-ready" => "No players readied up! Can't start Nukeops.",
            "operative-role-greeting" => {
                "You are a nuclear operative. Work with your team to secure the disk and detonate the station."
            }
            "operative-role-codewords" => "The codewords are: {codewords}",
            "nuclear-round-end-result" => "There were {operativeCount} nuclear operatives.",
            "nuclear-user-was-an-operative-named" => "{user} was a nuclear operative named {name}.",
            "nuclear-user-was-an-operative" => "{user} was a nuclear operative.",
            "nuclear-was-an-operative-named" => "{name} was a nuclear operative.",
            _ => return None,
        })
    }
}

impl Localizer for FallbackLocalizer {
    fn localize(&self, message: &LocMessage) -> String {
        let Some(template) = Self::template(&message.key) else {
            return message.key.clone();
        };

        interpolate(template, message)
    }
}

/// Fill `{name}` placeholders in one left-to-right pass.
///
/// Inserted values are never rescanned. Placeholders without a matching
/// argument are kept verbatim.
fn interpolate(template: &str, message: &LocMessage) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            text.push_str(&rest[open..]);
            return text;
        };

        let name = &after[..close];
        match message.arg(name) {
            Some(value) => text.push_str(value),
            None => {
                text.push('{');
                text.push_str(name);
                text.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    text.push_str(rest);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation() {
        let msg = LocMessage::new("nuclear-user-was-an-operative-named")
            .with_arg("user", "alice")
            .with_arg("name", "Bonk Corp Agent Smith");

        assert_eq!(
            FallbackLocalizer.localize(&msg),
            "alice was a nuclear operative named Bonk Corp Agent Smith."
        );
    }

    #[test]
    fn test_inserted_values_not_rescanned() {
        let msg = LocMessage::new("nuclear-user-was-an-operative-named")
            .with_arg("user", "{name}")
            .with_arg("name", "Jane Doe");

        assert_eq!(
            FallbackLocalizer.localize(&msg),
            "{name} was a nuclear operative named Jane Doe."
        );
    }

    #[test]
    fn test_missing_arg_keeps_placeholder() {
        let msg = LocMessage::new("nuclear-user-was-an-operative-named").with_arg("user", "bob");
        assert_eq!(
            FallbackLocalizer.localize(&msg),
            "bob was a nuclear operative named {name}."
        );
    }

    #[test]
    fn test_unknown_key_renders_key() {
        let msg = LocMessage::new("no-such-key");
        assert_eq!(FallbackLocalizer.localize(&msg), "no-such-key");
    }

    #[test]
    fn test_arg_lookup() {
        let msg = LocMessage::new("k").with_arg("count", 3);
        assert_eq!(msg.arg("count"), Some("3"));
        assert_eq!(msg.arg("missing"), None);
    }
}
