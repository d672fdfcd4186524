use serde::{Deserialize, Serialize};

/// Wire wrapper for exploration replies. The exploration schema nests
/// the useful payload under a top-level `content` object:
/// `{"content": {"type": ..., "content": ...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationReply {
    pub content: ExplorationEnvelope,
}

/// Decoded model reply while in narrative mode. `combatants` and
/// `first_turn` only show up when the model switches to combat, and
/// even then the model may leave them out; decoding stays lenient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationEnvelope {
    #[serde(rename = "type")]
    pub kind: ExplorationKind,
    pub content: String,
    #[serde(default)]
    pub combatants: Vec<String>,
    #[serde(default)]
    pub first_turn: Option<FirstTurn>,
}

impl ExplorationEnvelope {
    /// Empty narration while still typed `exploration` means the model
    /// has nothing more to say. Indistinguishable from a genuinely
    /// empty reply; callers treat it as end of session.
    pub fn is_end_sentinel(&self) -> bool {
        self.kind == ExplorationKind::Exploration && self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorationKind {
    Exploration,
    Combat,
}

/// The opening move announced alongside a switch into combat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirstTurn {
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub damage: i64,
}

/// Decoded combat-mode reply: narration, outcome, the full replacement
/// roster, and the single move that was resolved this turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatContent {
    #[serde(rename = "type")]
    pub kind: CombatKind,
    pub content: String,
    pub combatants: Vec<Combatant>,
    pub combat_turn: CombatTurnContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatTurnContainer {
    #[serde(rename = "move")]
    pub mv: CombatTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatKind {
    Combat,
    Victory,
    Defeat,
}

/// One participant in an encounter. The roster is replaced wholesale
/// on every combat reply; nothing here is merged or diffed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health: u32,
    pub weapons: Vec<String>,
    pub armor: u32,
    pub spells: Vec<String>,
}

/// One resolved move. Actor and target are combatant names; they are
/// not validated against the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatTurn {
    pub actor: String,
    pub target: String,
    pub damage: i64,
    #[serde(rename = "type")]
    pub kind: String,
}
