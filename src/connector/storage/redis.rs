use async_trait::async_trait;
use ::redis::aio::ConnectionManager;
use ::redis::{AsyncCommands, Client};
use tracing::{debug, info};

use crate::application::MessageStore;
use crate::domain::{ChatMessage, DomainError};

/// Azure Cache for Redis serves TLS on this port.
const TLS_PORT: u16 = 6380;
const KEY_PREFIX: &str = "promptrelay:message:";

/// Message store backed by Azure Cache for Redis.
///
/// Conversation turns are stored as JSON under a namespaced key. An optional
/// TTL bounds how long threads stay resumable; an expired parent link shows up
/// as a truncated thread, not an error.
pub struct RedisMessageStore {
    conn: ConnectionManager,
    ttl_secs: Option<u64>,
}

impl RedisMessageStore {
    /// Connect to the cache over TLS with the account access key.
    pub async fn connect(host: &str, access_key: &str) -> Result<Self, DomainError> {
        let url = connection_url(host, access_key);
        let client = Client::open(url)
            .map_err(|e| DomainError::store(format!("invalid cache address: {e}")))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::store(format!("failed to connect to {host}: {e}")))?;
        info!("connected to message cache at {host}");
        Ok(Self {
            conn,
            ttl_secs: None,
        })
    }

    /// Expire stored turns after `secs` seconds.
    pub fn with_ttl(mut self, secs: u64) -> Self {
        self.ttl_secs = Some(secs);
        self
    }
}

fn connection_url(host: &str, access_key: &str) -> String {
    format!("rediss://:{access_key}@{host}:{TLS_PORT}")
}

fn message_key(id: &str) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[async_trait]
impl MessageStore for RedisMessageStore {
    async fn get(&self, id: &str) -> Result<Option<ChatMessage>, DomainError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(message_key(id))
            .await
            .map_err(|e| DomainError::store(format!("cache read failed: {e}")))?;

        raw.map(|payload| {
            serde_json::from_str(&payload)
                .map_err(|e| DomainError::store(format!("corrupt cache entry for {id}: {e}")))
        })
        .transpose()
    }

    async fn upsert(&self, message: &ChatMessage) -> Result<(), DomainError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| DomainError::store(format!("failed to encode message: {e}")))?;
        let key = message_key(message.id());

        let mut conn = self.conn.clone();
        match self.ttl_secs {
            Some(secs) => {
                let _: () = conn
                    .set_ex(&key, payload, secs)
                    .await
                    .map_err(|e| DomainError::store(format!("cache write failed: {e}")))?;
            }
            None => {
                let _: () = conn
                    .set(&key, payload)
                    .await
                    .map_err(|e| DomainError::store(format!("cache write failed: {e}")))?;
            }
        }
        debug!("stored message {}", message.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_url_targets_tls_port() {
        let url = connection_url("cache.redis.cache.windows.net", "s3cret");
        assert_eq!(url, "rediss://:s3cret@cache.redis.cache.windows.net:6380");
    }

    #[test]
    fn message_keys_are_namespaced() {
        assert_eq!(message_key("m-1"), "promptrelay:message:m-1");
    }
}
