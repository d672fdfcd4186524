use tracing::info;

use crate::config::Settings;
use crate::engine::decoder;
use crate::engine::error::EngineError;
use crate::engine::llm_client::ChatTransport;
use crate::engine::protocol::{Mode, TerminalKind, TurnReport};
use crate::engine::schema;
use crate::engine::session::Session;
use crate::model::envelope::{CombatKind, CombatTurn, Combatant};

/// One combat engagement: its own session, the current roster, and the
/// most recent resolved move. Created on the switch into combat and
/// discarded once a terminal state is reached.
pub struct Encounter<'a> {
    transport: &'a dyn ChatTransport,
    session: Session,
    combatants: Vec<Combatant>,
    last_turn: Option<CombatTurn>,
    state: EncounterState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    Active,
    Victory,
    Defeat,
    /// The loop broke on the empty-content sentinel without the model
    /// declaring an outcome.
    Exhausted,
}

impl<'a> Encounter<'a> {
    pub fn new(transport: &'a dyn ChatTransport, settings: &Settings) -> Self {
        let session = Session::new(
            schema::COMBAT_SYSTEM_PROMPT,
            settings.model.clone(),
            schema::combat_response_format(),
        );
        Self {
            transport,
            session,
            combatants: Vec::new(),
            last_turn: None,
            state: EncounterState::Active,
        }
    }

    /// Feeds the scenario description handed over by the narrative
    /// controller as the encounter's first user turn.
    pub fn open(&mut self, scenario: &str) -> Result<TurnReport, EngineError> {
        self.advance(scenario)
    }

    /// One combat round. Unlike exploration, the assistant narration is
    /// always recorded, terminal or not, and the roster is replaced
    /// wholesale; the model is the sole authority on combatant state.
    pub fn advance(&mut self, user_text: &str) -> Result<TurnReport, EngineError> {
        // Terminal states are absorbing.
        if self.state != EncounterState::Active {
            return Ok(self.report(String::new()));
        }

        self.session.push_user(user_text);
        let raw = self.transport.complete(&self.session)?;
        let content = decoder::decode_combat(&raw)?;

        self.session.push_assistant(&content.content);
        self.combatants = content.combatants;
        self.last_turn = Some(content.combat_turn.mv);

        self.state = match content.kind {
            CombatKind::Victory => EncounterState::Victory,
            CombatKind::Defeat => EncounterState::Defeat,
            CombatKind::Combat if content.content.is_empty() => EncounterState::Exhausted,
            CombatKind::Combat => EncounterState::Active,
        };

        if self.state != EncounterState::Active {
            info!(state = ?self.state, "encounter ended");
        }

        Ok(self.report(content.content))
    }

    fn report(&self, narration: String) -> TurnReport {
        let terminal = match self.state {
            EncounterState::Active => None,
            EncounterState::Victory => Some(TerminalKind::Victory),
            EncounterState::Defeat => Some(TerminalKind::Defeat),
            EncounterState::Exhausted => Some(TerminalKind::EndOfInput),
        };
        TurnReport {
            mode: Mode::Combat,
            narration,
            terminal,
        }
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn last_turn(&self) -> Option<&CombatTurn> {
        self.last_turn.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
