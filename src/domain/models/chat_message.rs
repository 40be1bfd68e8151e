use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaker of a stored conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn of a conversation, persisted in the message store.
///
/// Turns form a singly linked chain through `parent_id`; walking the chain
/// from any message id reconstructs the thread that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    id: String,
    parent_id: Option<String>,
    role: Role,
    text: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>, parent_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parent_id,
            role,
            text: text.into(),
        }
    }

    /// Rebuild a message with a known id, e.g. when loading from a store.
    pub fn with_id(
        id: impl Into<String>,
        role: Role,
        text: impl Into<String>,
        parent_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id,
            role,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The assistant's reply as returned to API callers.
///
/// `id` doubles as the conversation reference: sending it back as the next
/// request's `messageId` continues the thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_message_id: Option<String>,
    role: Role,
    text: String,
}

impl ChatReply {
    pub fn new(
        id: impl Into<String>,
        parent_message_id: Option<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_message_id,
            role: Role::Assistant,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent_message_id(&self) -> Option<&str> {
        self.parent_message_id.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_chain_links_through_parent_id() {
        let first = ChatMessage::new(Role::User, "hello", None);
        let second = ChatMessage::new(Role::Assistant, "hi", Some(first.id().to_string()));

        assert_eq!(second.parent_id(), Some(first.id()));
        assert!(first.parent_id().is_none());
    }

    #[test]
    fn reply_serializes_camel_case() {
        let reply = ChatReply::new("m-1", Some("m-0".to_string()), "answer");
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json["id"], "m-1");
        assert_eq!(json["parentMessageId"], "m-0");
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["text"], "answer");
    }

    #[test]
    fn reply_without_parent_omits_field() {
        let reply = ChatReply::new("m-1", None, "answer");
        let json = serde_json::to_value(&reply).unwrap();

        assert!(json.get("parentMessageId").is_none());
    }
}
