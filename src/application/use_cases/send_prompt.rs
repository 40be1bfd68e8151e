use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ChatClient;
use crate::domain::{ChatReply, DomainError};

/// Direct send path: forwards a prompt to the chat client, threading the
/// conversation through the optional parent reference.
///
/// Failures are surfaced as structured errors, never panics; the API boundary
/// decides the user-facing phrasing.
pub struct SendPromptUseCase {
    client: Arc<dyn ChatClient>,
}

impl SendPromptUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        prompt: &str,
        parent_id: Option<&str>,
    ) -> Result<ChatReply, DomainError> {
        info!(parent = parent_id.unwrap_or("<none>"), "sending prompt: {prompt}");

        match self.client.send_message(prompt, parent_id).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!("failed to handle prompt {prompt:?}: {e}");
                Err(e)
            }
        }
    }
}
