use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::MessageStore;
use crate::domain::{ChatMessage, DomainError};

/// In-memory message store for testing, development, and cache-less deployments.
///
/// History lives only as long as the process; restarting the service starts
/// every conversation fresh.
pub struct InMemoryMessageStore {
    messages: Arc<Mutex<HashMap<String, ChatMessage>>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.messages.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.lock().await.is_empty()
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn get(&self, id: &str) -> Result<Option<ChatMessage>, DomainError> {
        let messages = self.messages.lock().await;
        Ok(messages.get(id).cloned())
    }

    async fn upsert(&self, message: &ChatMessage) -> Result<(), DomainError> {
        let mut messages = self.messages.lock().await;
        messages.insert(message.id().to_string(), message.clone());
        debug!("stored message {} ({} total)", message.id(), messages.len());
        Ok(())
    }
}
