use async_trait::async_trait;

use crate::domain::{ChatReply, DomainError};

/// An interface for sending a prompt to a chat model and receiving the reply.
///
/// Implementors encapsulate transport, serialization, and conversation-history
/// reconstruction. `parent_id` links the new message to a prior reply; `None`
/// starts a fresh thread.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(
        &self,
        prompt: &str,
        parent_id: Option<&str>,
    ) -> Result<ChatReply, DomainError>;
}
