use tracing::info;

use crate::config::Settings;
use crate::engine::decoder;
use crate::engine::error::EngineError;
use crate::engine::llm_client::ChatTransport;
use crate::engine::schema;
use crate::engine::session::Session;
use crate::model::envelope::{ExplorationEnvelope, ExplorationKind};

/// Drives the exploration loop. Holds the narrative session for the
/// whole program lifetime; combat runs in its own `Encounter` with an
/// independent session.
pub struct NarrativeController<'a> {
    transport: &'a dyn ChatTransport,
    session: Session,
}

impl<'a> NarrativeController<'a> {
    pub fn new(transport: &'a dyn ChatTransport, settings: &Settings) -> Self {
        let session = Session::new(
            schema::EXPLORATION_SYSTEM_PROMPT,
            settings.model.clone(),
            schema::exploration_response_format(),
        );
        Self { transport, session }
    }

    /// Sends the opening scenario prompt. Same mechanics as `advance`;
    /// named separately because callers treat the first reply as the
    /// scene-setting turn.
    pub fn start(&mut self, initial_prompt: &str) -> Result<ExplorationEnvelope, EngineError> {
        self.advance(initial_prompt)
    }

    /// One exploration turn: append the user text, send the full
    /// history, decode. Exploration narration is appended back so
    /// future turns see it; combat narration is not, because it belongs
    /// to the new encounter's own session.
    pub fn advance(&mut self, user_text: &str) -> Result<ExplorationEnvelope, EngineError> {
        self.session.push_user(user_text);
        let raw = self.transport.complete(&self.session)?;
        let envelope = decoder::decode_exploration(&raw)?;

        match envelope.kind {
            ExplorationKind::Exploration => {
                self.session.push_assistant(&envelope.content);
            }
            ExplorationKind::Combat => {
                info!(combatants = envelope.combatants.len(), "model switched to combat");
            }
        }

        Ok(envelope)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::ScriptedTransport;
    use crate::model::message::Role;

    fn exploration_reply(text: &str) -> String {
        serde_json::json!({"content": {"type": "exploration", "content": text}}).to_string()
    }

    fn controller<'a>(transport: &'a ScriptedTransport) -> NarrativeController<'a> {
        NarrativeController::new(transport, &Settings::default())
    }

    #[test]
    fn each_exploration_turn_grows_history_by_two_in_order() {
        let transport = ScriptedTransport::new([
            exploration_reply("You wake in a cell."),
            exploration_reply("The lock gives way."),
        ]);
        let mut narrative = controller(&transport);

        narrative.start("I wake up").unwrap();
        narrative.advance("I pick the lock").unwrap();

        let messages = narrative.session().messages();
        assert_eq!(messages.len(), 5);
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
        assert_eq!(messages[2].content, "You wake in a cell.");
        assert_eq!(messages[4].content, "The lock gives way.");
    }

    #[test]
    fn combat_switch_does_not_record_the_narration() {
        let transport = ScriptedTransport::new([serde_json::json!({"content": {
            "type": "combat",
            "content": "A troll blocks the bridge!",
            "combatants": ["troll"]
        }})
        .to_string()]);
        let mut narrative = controller(&transport);

        let envelope = narrative.start("I cross the bridge").unwrap();
        assert_eq!(envelope.kind, ExplorationKind::Combat);
        assert_eq!(envelope.combatants, vec!["troll"]);

        // Only the user turn landed; the combat narration belongs to
        // the encounter's session.
        let messages = narrative.session().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn empty_exploration_content_is_the_end_sentinel() {
        let transport = ScriptedTransport::new([exploration_reply("")]);
        let mut narrative = controller(&transport);

        let envelope = narrative.advance("anything left?").unwrap();
        assert!(envelope.is_end_sentinel());

        // Still an exploration-typed reply: its empty narration is
        // appended like any other before the caller stops reading.
        let messages = narrative.session().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "");
    }

    #[test]
    fn malformed_reply_leaves_only_the_user_turn_appended() {
        let transport = ScriptedTransport::new(["not json at all".to_string()]);
        let mut narrative = controller(&transport);

        let err = narrative.advance("I look around").unwrap_err();
        assert!(matches!(err, EngineError::MalformedJson { .. }));

        let messages = narrative.session().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "I look around");
    }
}
