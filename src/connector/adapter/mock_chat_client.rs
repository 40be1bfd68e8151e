use tokio::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ChatClient;
use crate::domain::{ChatReply, DomainError};

/// Chat client for testing and development: echoes the prompt back and records
/// every call so tests can assert on what was sent.
pub struct MockChatClient {
    calls: Mutex<Vec<(String, Option<String>)>>,
    failure: Option<(u16, String)>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// A client whose every send fails with the given upstream status.
    pub fn failing(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some((status, status_text.into())),
        }
    }

    /// The `(prompt, parent_id)` pairs sent so far, in order.
    pub async fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send_message(
        &self,
        prompt: &str,
        parent_id: Option<&str>,
    ) -> Result<ChatReply, DomainError> {
        self.calls
            .lock()
            .await
            .push((prompt.to_string(), parent_id.map(str::to_string)));

        if let Some((status, status_text)) = &self.failure {
            return Err(DomainError::chat_api(*status, status_text.clone()));
        }

        Ok(ChatReply::new(
            Uuid::new_v4().to_string(),
            parent_id.map(str::to_string),
            format!("echo: {prompt}"),
        ))
    }
}
