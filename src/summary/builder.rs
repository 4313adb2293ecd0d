//! Summary builder.

use crate::locale::{LocMessage, Localizer};
use crate::roles::RoleState;

use super::SessionDirectory;

/// Summary as messages: the header followed by one message per describable
/// member.
pub fn summary_messages(roles: &[RoleState], sessions: &dyn SessionDirectory) -> Vec<LocMessage> {
    let header = LocMessage::new("nuclear-round-end-result").with_arg("operativeCount", roles.len());

    std::iter::once(header)
        .chain(roles.iter().filter_map(|role| member_line(role, sessions)))
        .collect()
}

/// Render the summary to a single newline-separated block.
pub fn build_summary(
    roles: &[RoleState],
    sessions: &dyn SessionDirectory,
    localizer: &dyn Localizer,
) -> String {
    summary_messages(roles, sessions)
        .iter()
        .map(|message| localizer.localize(message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn member_line(role: &RoleState, sessions: &dyn SessionDirectory) -> Option<LocMessage> {
    let user = sessions.session_name(role.participant);
    let name = role.display_name();

    match (user, name) {
        (Some(user), Some(name)) => Some(
            LocMessage::new("nuclear-user-was-an-operative-named")
                .with_arg("user", user)
                .with_arg("name", name),
        ),
        (Some(user), None) => {
            Some(LocMessage::new("nuclear-user-was-an-operative").with_arg("user", user))
        }
        (None, Some(name)) => {
            Some(LocMessage::new("nuclear-was-an-operative-named").with_arg("name", name))
        }
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdentityId, ParticipantId};
    use crate::locale::FallbackLocalizer;
    use rustc_hash::FxHashMap;

    struct Sessions(FxHashMap<ParticipantId, String>);

    impl SessionDirectory for Sessions {
        fn session_name(&self, participant: ParticipantId) -> Option<String> {
            self.0.get(&participant).cloned()
        }
    }

    fn role(id: u64, name: Option<&str>) -> RoleState {
        RoleState {
            participant: ParticipantId::new(id),
            identity: IdentityId::new(id),
            prototype: "Operative".to_string(),
            name: "Nuclear Operative".to_string(),
            antagonist: true,
            leader: false,
            starting_gear: None,
            character_name: name.map(str::to_string),
            official_name: None,
            briefing: None,
        }
    }

    #[test]
    fn test_each_phrasing() {
        let mut sessions = FxHashMap::default();
        sessions.insert(ParticipantId::new(1), "alice".to_string());
        sessions.insert(ParticipantId::new(2), "bob".to_string());
        let sessions = Sessions(sessions);

        let roles = vec![
            role(1, Some("Jane Doe")),
            role(2, None),
            role(3, Some("John Roe")),
            role(4, None),
        ];

        let text = build_summary(&roles, &sessions, &FallbackLocalizer);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "There were 4 nuclear operatives.",
                "alice was a nuclear operative named Jane Doe.",
                "bob was a nuclear operative.",
                "John Roe was a nuclear operative.",
            ]
        );
    }

    #[test]
    fn test_official_name_wins_over_character_name() {
        let mut sessions = FxHashMap::default();
        sessions.insert(ParticipantId::new(1), "alice".to_string());
        let mut member = role(1, Some("Jane Doe"));
        member.official_name = Some("Bonk Corp Agent Smith".to_string());

        let text = build_summary(&[member], &Sessions(sessions), &FallbackLocalizer);
        assert_eq!(
            text.lines().nth(1),
            Some("alice was a nuclear operative named Bonk Corp Agent Smith.")
        );
    }

    #[test]
    fn test_empty_team_is_header_only() {
        let sessions = Sessions(FxHashMap::default());
        let messages = summary_messages(&[], &sessions);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].arg("operativeCount"), Some("0"));
    }

    #[test]
    fn test_order_follows_team() {
        let sessions = Sessions(FxHashMap::default());
        let roles = vec![role(9, Some("Zed")), role(1, Some("Abe"))];

        let messages = summary_messages(&roles, &sessions);
        assert_eq!(messages[1].arg("name"), Some("Zed"));
        assert_eq!(messages[2].arg("name"), Some("Abe"));
    }
}
