use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError};

/// Keyed storage for conversation turns.
///
/// Uniqueness and lifetime of ids are the store's concern; callers only walk
/// parent links and insert new turns.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<ChatMessage>, DomainError>;

    async fn upsert(&self, message: &ChatMessage) -> Result<(), DomainError>;
}
