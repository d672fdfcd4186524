use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of the conversation. Immutable once appended to a session.
/// `length` is the content size at append time, tracked for
/// context-budget accounting; it never goes over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip)]
    pub length: usize,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        let content = content.into();
        let length = content.len();
        Self {
            role,
            content,
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_tracks_content_size() {
        let msg = Message::new(Role::User, "look around");
        assert_eq!(msg.length, "look around".len());
    }

    #[test]
    fn wire_format_omits_length() {
        let msg = Message::new(Role::Assistant, "You see a door.");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "assistant", "content": "You see a door."})
        );
    }
}
