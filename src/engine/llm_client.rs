use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::Settings;
use crate::engine::error::EngineError;
use crate::engine::session::Session;

/// Anything that can turn a session into raw assistant text. The mode
/// controllers only speak to this trait, so tests can script replies
/// without a running server.
pub trait ChatTransport {
    fn complete(&self, session: &Session) -> Result<String, EngineError>;
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Blocking client against a local chat-completion endpoint. Exactly
/// one request is in flight at a time; there is no retry.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
    temperature: f32,
}

impl HttpTransport {
    pub fn new(settings: &Settings) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            temperature: settings.temperature,
        })
    }
}

impl ChatTransport for HttpTransport {
    fn complete(&self, session: &Session) -> Result<String, EngineError> {
        let body = json!({
            "model": session.model(),
            "stream": false,
            "messages": session.messages(),
            "temperature": self.temperature,
            "max_tokens": -1,
            "response_format": {
                "type": "json_schema",
                "json_schema": session.response_format(),
            },
        });

        debug!(
            messages = session.len(),
            context_length = session.context_length(),
            "sending chat completion request"
        );

        let resp = self.client.post(&self.endpoint).json(&body).send()?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            return Err(EngineError::Transport(format!("HTTP {status}: {detail}")));
        }

        let completion: ChatCompletionResponse = resp.json()?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::Transport("completion contained no choices".into()))?;

        Ok(choice.message.content)
    }
}
