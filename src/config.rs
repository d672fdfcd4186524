use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Endpoint and sampling knobs. Loaded from a JSON file under the
/// platform config directory; a missing or unreadable file falls back
/// to defaults that match a stock LM Studio install.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:1234/v1/chat/completions".into(),
            model: "hermes-3-llama-3.1-8b".into(),
            temperature: 0.7,
            timeout_secs: 300,
        }
    }
}

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dragons");
    path.push("settings.json");
    path
}

pub fn load_settings() -> Settings {
    fs::read_to_string(settings_path())
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}
