use std::fmt;

use crate::model::envelope::ExplorationEnvelope;

/// What the front end needs to render one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub mode: Mode,
    pub narration: String,
    pub terminal: Option<TerminalKind>,
}

impl TurnReport {
    pub fn from_exploration(envelope: &ExplorationEnvelope) -> Self {
        let terminal = envelope
            .is_end_sentinel()
            .then_some(TerminalKind::EndOfInput);
        Self {
            mode: Mode::Exploration,
            narration: envelope.content.clone(),
            terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Exploration,
    Combat,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Exploration => write!(f, "exploration"),
            Mode::Combat => write!(f, "combat"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    Victory,
    Defeat,
    /// Empty-content sentinel: the model had nothing more to say. Kept
    /// distinct from a declared outcome so front ends can tell them
    /// apart.
    EndOfInput,
}
