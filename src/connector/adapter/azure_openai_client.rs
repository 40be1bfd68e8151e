use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use indicatif::ProgressBar;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{ChatClient, MessageStore};
use crate::domain::{ChatMessage, ChatReply, DomainError, Role};

const API_VERSION: &str = "2024-02-01";
const MAX_TOKENS: u32 = 1024;
/// Most turns included from the stored thread, newest first, before the
/// request is assembled. Keeps long conversations inside the context window.
const HISTORY_WINDOW: usize = 20;

const SYSTEM_PROMPT: &str =
    "You are ChatGPT, a large language model. Answer as concisely as possible.";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the Azure OpenAI chat-completions API.
///
/// The wire protocol is stateless, so conversation continuity is rebuilt here:
/// before each request the client walks the parent chain in the
/// [`MessageStore`], prepends the system prompt, and appends the new user
/// turn. Both the user turn and the assistant reply are persisted, so the
/// reply's id works as the next request's parent reference.
pub struct AzureOpenAiClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
    store: Arc<dyn MessageStore>,
}

impl AzureOpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        deployment: &str,
        store: Arc<dyn MessageStore>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url: endpoint_url(&api_base.into(), deployment),
            store,
        }
    }
}

/// Deployment-scoped chat-completions endpoint.
fn endpoint_url(api_base: &str, deployment: &str) -> String {
    let trimmed = api_base.trim_end_matches('/');
    format!("{trimmed}/openai/deployments/{deployment}/chat/completions?api-version={API_VERSION}")
}

/// Walk parent links from `parent_id` and return the thread oldest-first,
/// capped at [`HISTORY_WINDOW`] turns.
///
/// A dangling link (id not in the store, e.g. evicted by TTL) truncates the
/// thread there rather than failing the request.
pub(crate) async fn collect_thread(
    store: &dyn MessageStore,
    parent_id: Option<&str>,
) -> Result<Vec<ChatMessage>, DomainError> {
    let mut thread = Vec::new();
    let mut cursor = parent_id.map(str::to_string);

    while let Some(id) = cursor {
        if thread.len() >= HISTORY_WINDOW {
            break;
        }
        match store.get(&id).await? {
            Some(message) => {
                cursor = message.parent_id().map(str::to_string);
                thread.push(message);
            }
            None => {
                warn!("message {id} not found in store, truncating thread");
                break;
            }
        }
    }

    thread.reverse();
    Ok(thread)
}

#[async_trait]
impl ChatClient for AzureOpenAiClient {
    async fn send_message(
        &self,
        prompt: &str,
        parent_id: Option<&str>,
    ) -> Result<ChatReply, DomainError> {
        let thread = collect_thread(&*self.store, parent_id).await?;
        debug!("assembled {} prior turns", thread.len());

        let mut messages = Vec::with_capacity(thread.len() + 2);
        messages.push(ApiMessage {
            role: Role::System.as_str(),
            content: SYSTEM_PROMPT,
        });
        for turn in &thread {
            messages.push(ApiMessage {
                role: turn.role().as_str(),
                content: turn.text(),
            });
        }
        messages.push(ApiMessage {
            role: Role::User.as_str(),
            content: prompt,
        });

        let request = ApiRequest {
            messages,
            max_tokens: MAX_TOKENS,
        };

        // Progress spinner keyed to the prompt, hidden when not on a terminal.
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(prompt.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await;
        spinner.finish_and_clear();

        let response = result
            .map_err(|e| DomainError::upstream(format!("chat request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("chat API returned {status}: {body}");
            return Err(DomainError::chat_api(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("failed to parse chat response: {e}")))?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        let user_turn = ChatMessage::new(Role::User, prompt, parent_id.map(str::to_string));
        let assistant_turn =
            ChatMessage::new(Role::Assistant, &text, Some(user_turn.id().to_string()));
        self.store.upsert(&user_turn).await?;
        self.store.upsert(&assistant_turn).await?;

        Ok(ChatReply::new(
            assistant_turn.id(),
            Some(user_turn.id().to_string()),
            text,
        ))
    }
}
