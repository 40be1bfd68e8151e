use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::application::{ChatClient, DispatchPromptUseCase, MessageStore};
use crate::connector::{AzureOpenAiClient, InMemoryMessageStore, RedisMessageStore};
use crate::domain::{DomainError, PromptCatalog};

pub const DEFAULT_DEPLOYMENT: &str = "chatgpt";
const DEFAULT_INIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which backend holds conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheConfig {
    /// Process-local history only.
    Disabled,
    /// Azure Cache for Redis, shared across instances.
    AzureRedis { host: String, access_key: String },
}

impl CacheConfig {
    /// Resolve the cache selector. `azureredis` (case-insensitive) enables the
    /// Redis store and makes both credentials mandatory; anything else, or no
    /// selector at all, disables it.
    pub fn from_values(
        use_cache: Option<&str>,
        host: Option<String>,
        access_key: Option<String>,
    ) -> Result<Self, DomainError> {
        match use_cache {
            Some(value) if value.eq_ignore_ascii_case("azureredis") => {
                let host = host
                    .filter(|h| !h.is_empty())
                    .ok_or_else(|| DomainError::config("AZURE_CACHE_FOR_REDIS_HOST_NAME is empty"))?;
                let access_key = access_key
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| DomainError::config("AZURE_CACHE_FOR_REDIS_ACCESS_KEY is empty"))?;
                Ok(Self::AzureRedis { host, access_key })
            }
            _ => Ok(Self::Disabled),
        }
    }
}

pub struct ContainerConfig {
    pub api_key: String,
    pub api_base: String,
    pub deployment: String,
    pub cache: CacheConfig,
    /// Upper bound on waiting for the shared client to initialize.
    pub init_timeout: Duration,
}

impl ContainerConfig {
    /// Read configuration from the environment:
    ///
    /// | Variable                           | Default     | Purpose                      |
    /// |------------------------------------|-------------|------------------------------|
    /// | `AZURE_OPENAI_API_KEY`             | required    | Chat API credential          |
    /// | `AZURE_OPENAI_API_BASE`            | required    | Chat API endpoint            |
    /// | `CHATGPT_DEPLOY_NAME`              | `chatgpt`   | Deployment name              |
    /// | `USE_CACHE`                        | disabled    | `azureredis` enables Redis   |
    /// | `AZURE_CACHE_FOR_REDIS_HOST_NAME`  | —           | Required with `azureredis`   |
    /// | `AZURE_CACHE_FOR_REDIS_ACCESS_KEY` | —           | Required with `azureredis`   |
    pub fn from_env() -> Result<Self, DomainError> {
        let api_key = non_empty_var("AZURE_OPENAI_API_KEY")
            .ok_or_else(|| DomainError::config("AZURE_OPENAI_API_KEY is empty"))?;
        let api_base = non_empty_var("AZURE_OPENAI_API_BASE")
            .ok_or_else(|| DomainError::config("AZURE_OPENAI_API_BASE is empty"))?;
        let deployment =
            non_empty_var("CHATGPT_DEPLOY_NAME").unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string());

        let cache = CacheConfig::from_values(
            std::env::var("USE_CACHE").ok().as_deref(),
            std::env::var("AZURE_CACHE_FOR_REDIS_HOST_NAME").ok(),
            std::env::var("AZURE_CACHE_FOR_REDIS_ACCESS_KEY").ok(),
        )?;

        Ok(Self {
            api_key,
            api_base,
            deployment,
            cache,
            init_timeout: DEFAULT_INIT_TIMEOUT,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Shared service state: configuration, the helper catalog, and the lazily
/// initialized chat client.
///
/// The client cell gives concurrent first-callers one shared in-flight
/// initialization attempt. A failed attempt leaves the cell empty, so the
/// next caller starts a fresh one; a successful attempt is permanent for the
/// process lifetime.
pub struct Container {
    config: ContainerConfig,
    catalog: Arc<PromptCatalog>,
    client: OnceCell<Arc<dyn ChatClient>>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(PromptCatalog::standard()),
            client: OnceCell::new(),
        }
    }

    /// The shared chat client, initializing it on first call.
    ///
    /// Waits at most `init_timeout`; a timed-out wait is safe to retry — the
    /// dropped waiter lets another caller run the initialization.
    pub async fn chat_client(&self) -> Result<Arc<dyn ChatClient>, DomainError> {
        let init = self.client.get_or_try_init(|| self.init_client());
        match tokio::time::timeout(self.config.init_timeout, init).await {
            Ok(Ok(client)) => Ok(client.clone()),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(DomainError::timeout(
                "chat client initialization did not complete",
            )),
        }
    }

    async fn init_client(&self) -> Result<Arc<dyn ChatClient>, DomainError> {
        let store: Arc<dyn MessageStore> = match &self.config.cache {
            CacheConfig::AzureRedis { host, access_key } => {
                Arc::new(RedisMessageStore::connect(host, access_key).await?)
            }
            CacheConfig::Disabled => {
                debug!("cache disabled, using in-memory message store");
                Arc::new(InMemoryMessageStore::new())
            }
        };

        info!("initializing chat client for deployment {}", self.config.deployment);
        Ok(Arc::new(AzureOpenAiClient::new(
            &self.config.api_key,
            &self.config.api_base,
            &self.config.deployment,
            store,
        )))
    }

    pub async fn dispatch_use_case(&self) -> Result<DispatchPromptUseCase, DomainError> {
        Ok(DispatchPromptUseCase::new(
            self.chat_client().await?,
            self.catalog.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cache: CacheConfig) -> ContainerConfig {
        ContainerConfig {
            api_key: "test-key".to_string(),
            api_base: "https://example.openai.azure.com".to_string(),
            deployment: DEFAULT_DEPLOYMENT.to_string(),
            cache,
            init_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn cache_selector_is_case_insensitive() {
        let cache = CacheConfig::from_values(
            Some("AzureRedis"),
            Some("host".to_string()),
            Some("key".to_string()),
        )
        .unwrap();
        assert!(matches!(cache, CacheConfig::AzureRedis { .. }));
    }

    #[test]
    fn other_selectors_disable_cache() {
        assert_eq!(
            CacheConfig::from_values(Some("memcached"), None, None).unwrap(),
            CacheConfig::Disabled
        );
        assert_eq!(
            CacheConfig::from_values(None, None, None).unwrap(),
            CacheConfig::Disabled
        );
    }

    #[test]
    fn enabled_cache_requires_host() {
        let err = CacheConfig::from_values(Some("azureredis"), None, Some("key".to_string()))
            .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("AZURE_CACHE_FOR_REDIS_HOST_NAME"));
    }

    #[test]
    fn enabled_cache_requires_access_key() {
        let err = CacheConfig::from_values(
            Some("azureredis"),
            Some("host".to_string()),
            Some(String::new()),
        )
        .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("AZURE_CACHE_FOR_REDIS_ACCESS_KEY"));
    }

    #[tokio::test]
    async fn chat_client_is_shared_across_calls() {
        let container = Container::new(config(CacheConfig::Disabled));

        let a = container.chat_client().await.unwrap();
        let b = container.chat_client().await.unwrap();

        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn failed_init_leaves_client_retryable() {
        // An unreachable cache host fails initialization. The cell must stay
        // empty, so a later caller re-attempts instead of seeing a poisoned
        // client.
        let container = Container::new(config(CacheConfig::AzureRedis {
            host: "nonexistent.invalid".to_string(),
            access_key: "key".to_string(),
        }));

        assert!(container.chat_client().await.is_err());
        assert!(container.chat_client().await.is_err());
    }
}
