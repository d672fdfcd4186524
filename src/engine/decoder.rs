//! Decode raw assistant text into the typed envelope for the active
//! mode. Structural mapping only: the JSON-schema constraints the model
//! was asked to honor (enum membership, minimums) are trusted, not
//! re-checked here.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::engine::error::EngineError;
use crate::model::envelope::{CombatContent, ExplorationEnvelope, ExplorationReply};

const SNIPPET_CHARS: usize = 200;

pub fn decode_exploration(raw: &str) -> Result<ExplorationEnvelope, EngineError> {
    let reply: ExplorationReply = decode(raw, "exploration")?;
    Ok(reply.content)
}

pub fn decode_combat(raw: &str) -> Result<CombatContent, EngineError> {
    decode(raw, "combat")
}

/// Two-step decode so "not JSON at all" and "JSON of the wrong shape"
/// stay distinguishable to callers.
fn decode<T: DeserializeOwned>(raw: &str, mode: &'static str) -> Result<T, EngineError> {
    let value: Value = serde_json::from_str(raw).map_err(|err| {
        warn!(mode, "assistant reply is not valid JSON");
        EngineError::MalformedJson {
            reason: err.to_string(),
            snippet: snippet(raw),
        }
    })?;

    serde_json::from_value(value).map_err(|err| EngineError::SchemaMismatch {
        mode,
        reason: err.to_string(),
    })
}

fn snippet(raw: &str) -> String {
    raw.chars().take(SNIPPET_CHARS).collect()
}
