//! System prompts and response-format descriptors for the two modes.
//! This module is intentionally dumb: it only produces text and JSON
//! values. No parsing, no networking, no engine logic.

use serde_json::{json, Value};

pub const EXPLORATION_SYSTEM_PROMPT: &str = "You are an expert Dungeon Master. \
You are running a D&D game for your best friends. You are well versed in running \
campaigns of any length, and you are highly motivated to ensure that your friends \
have a good, but challenging time with the adventure you lay out for them.\n\n\
You are highly skilled in the improv art of \"yes, and\", and you will give your \
friends the ability to direct the adventure where required while still giving them \
structure and answering questions when they feel confused. You understand that D&D \
campaigns are a back and forth conversation, and you will not attempt to force your \
friends into a path they clearly want to avoid.\n\n\
Your responses will either be EXPLORATION or COMBAT responses. Both of these will \
be expressed as JSON objects. Always respond with JSON objects only - never respond \
with unstructured text or structured text of any type other than JSON.\n\n\
If you respond with a COMBAT type response, you must also give the first turn of \
the combat encounter. Never respond with an EXPLORATION type response if your \
content contains a battle scene, or an impending battle.";

pub const COMBAT_SYSTEM_PROMPT: &str = "You are a fair combat system, built to give \
players a challenging combat encounter while still being winnable. You will be given \
a list of combatants, and a series of combat turns made by each combatant against \
the others. Your job is to simulate the encounter's next combat turn, and then \
return it in JSON format. Do not ever respond in anything other than valid JSON. \
Double-check the JSON if necessary to ensure compliance.\n\n\
Always respond with a valid combat turn. If the combat turn results in a victory or \
defeat, the TYPE should be \"victory\" or \"defeat\" respectively.";

/// Schema for narrative-mode replies: the payload sits under a
/// top-level `content` object.
pub fn exploration_response_format() -> Value {
    json!({
        "name": "Generic",
        "strict": "true",
        "schema": {
            "type": "object",
            "properties": {
                "content": {
                    "type": "object",
                    "properties": {
                        "type": {
                            "type": "string",
                            "enum": ["combat", "exploration"]
                        },
                        "content": {
                            "type": "string"
                        }
                    },
                    "required": ["content", "type"]
                }
            },
            "required": ["content"]
        }
    })
}

/// Schema for combat-mode replies: outcome type, narration, the full
/// combatant roster, and the one resolved move.
pub fn combat_response_format() -> Value {
    json!({
        "name": "Generic",
        "strict": "true",
        "schema": {
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "enum": ["combat", "victory", "defeat"]
                },
                "content": {
                    "type": "string"
                },
                "combatants": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "health": {"type": "integer", "minimum": 0},
                            "weapons": {
                                "type": "array",
                                "items": {"type": "string"}
                            },
                            "armor": {"type": "integer", "minimum": 0},
                            "spells": {
                                "type": "array",
                                "items": {"type": "string"}
                            }
                        },
                        "required": ["name", "health", "weapons", "armor", "spells"]
                    }
                },
                "combat_turn": {
                    "type": "object",
                    "properties": {
                        "move": {
                            "type": "object",
                            "properties": {
                                "type": {"type": "string"},
                                "damage": {"type": "integer"},
                                "actor": {"type": "string"},
                                "target": {"type": "string"}
                            },
                            "required": ["actor", "target", "damage", "type"]
                        }
                    },
                    "required": ["move"]
                }
            },
            "required": ["combat_turn", "combatants", "content", "type"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combat_schema_requires_all_top_level_fields() {
        let format = combat_response_format();
        let required = format["schema"]["required"].as_array().unwrap();
        for field in ["combat_turn", "combatants", "content", "type"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
    }

    #[test]
    fn exploration_schema_nests_payload_under_content() {
        let format = exploration_response_format();
        let kinds = format["schema"]["properties"]["content"]["properties"]["type"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(kinds.len(), 2);
    }
}
