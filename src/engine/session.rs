use serde_json::Value;

use crate::model::message::{Message, Role};

/// Append-only message history for one mode, plus the request metadata
/// sent alongside it on every call. The first message is always the
/// mode's system prompt; nothing is ever removed or reordered.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    context_length: usize,
    model: String,
    response_format: Value,
}

impl Session {
    pub fn new(system_prompt: &str, model: impl Into<String>, response_format: Value) -> Self {
        let system = Message::new(Role::System, system_prompt);
        let context_length = system.length;
        Self {
            messages: vec![system],
            context_length,
            model: model.into(),
            response_format,
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Message::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Message::new(Role::Assistant, content));
    }

    fn push(&mut self, message: Message) {
        self.context_length += message.length;
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total content bytes accumulated so far. Tracked for accounting;
    /// no context-window budget is enforced.
    pub fn context_length(&self) -> usize {
        self.context_length
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn response_format(&self) -> &Value {
        &self.response_format
    }
}
