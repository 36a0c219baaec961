//! Conversation message types.
//!
//! The transcript is owned by the transport layer; the core only reads it.

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    /// The person placing the order.
    Human,
    /// The barista agent.
    Agent,
    /// System-generated message.
    System,
}

impl MessageOrigin {
    pub fn is_human(self) -> bool {
        matches!(self, MessageOrigin::Human)
    }
}

/// A single message in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The origin of the message.
    pub origin: MessageOrigin,
    /// The message text as transcribed.
    pub text: String,
}

impl ChatMessage {
    pub fn new(origin: MessageOrigin, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
        }
    }

    pub fn human(text: impl Into<String>) -> Self {
        Self::new(MessageOrigin::Human, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(MessageOrigin::Agent, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes_from_transport_json() {
        let json = r#"[{"origin":"human","text":"a latte"},{"origin":"agent","text":"sure"}]"#;
        let messages: Vec<ChatMessage> = serde_json::from_str(json).unwrap();
        assert_eq!(messages[0], ChatMessage::human("a latte"));
        assert_eq!(messages[1].origin, MessageOrigin::Agent);
        assert!(!messages[1].origin.is_human());
    }
}
