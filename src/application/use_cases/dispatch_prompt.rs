use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, ListHelpersUseCase, SendPromptUseCase};
use crate::domain::{ChatReply, Choice, DomainError, PromptCatalog, PromptRequest};

/// Reserved selector that returns the helper listing instead of sending.
pub const METHOD_LIST_SELECTOR: &str = "getMethodList";

/// What a dispatched request produced.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The sorted helper listing.
    Helpers(Vec<Choice>),
    /// A model reply, from either the direct or the templated send path.
    Reply(ChatReply),
}

/// Routes a request envelope to one of three paths:
///
/// 1. `name == "getMethodList"` — list the catalog, ignoring the other fields.
/// 2. `name` set — render the named template around the prompt and send.
/// 3. `name` absent/empty — send the prompt as-is.
///
/// Helper names are validated against the catalog before anything is invoked;
/// unknown names are a `NotFound` error.
pub struct DispatchPromptUseCase {
    send: SendPromptUseCase,
    list: ListHelpersUseCase,
    catalog: Arc<PromptCatalog>,
}

impl DispatchPromptUseCase {
    pub fn new(client: Arc<dyn ChatClient>, catalog: Arc<PromptCatalog>) -> Self {
        Self {
            send: SendPromptUseCase::new(client),
            list: ListHelpersUseCase::new(catalog.clone()),
            catalog,
        }
    }

    pub async fn execute(&self, request: &PromptRequest) -> Result<DispatchOutcome, DomainError> {
        match request.selector() {
            Some(METHOD_LIST_SELECTOR) => Ok(DispatchOutcome::Helpers(self.list.execute())),

            Some(name) => {
                let template = self
                    .catalog
                    .get(name)
                    .ok_or_else(|| DomainError::not_found(format!("unknown helper: {name}")))?;

                let prompt = request
                    .prompt_text()
                    .ok_or_else(|| DomainError::invalid_input("prompt is required"))?;

                debug!(helper = name, "dispatching templated prompt");
                let rendered = template.render(prompt);
                let reply = self
                    .send
                    .execute(&rendered, request.parent_reference())
                    .await?;
                Ok(DispatchOutcome::Reply(reply))
            }

            None => {
                let prompt = request
                    .prompt_text()
                    .ok_or_else(|| DomainError::invalid_input("prompt is required"))?;

                let reply = self.send.execute(prompt, request.parent_reference()).await?;
                Ok(DispatchOutcome::Reply(reply))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::connector::MockChatClient;

    fn request(name: &str, prompt: &str, message_id: &str) -> PromptRequest {
        PromptRequest::new(
            Some(name.to_string()),
            Some(prompt.to_string()),
            Some(message_id.to_string()),
        )
    }

    fn use_case(client: Arc<MockChatClient>) -> DispatchPromptUseCase {
        DispatchPromptUseCase::new(client, Arc::new(PromptCatalog::standard()))
    }

    #[tokio::test]
    async fn method_list_selector_returns_listing() {
        let client = Arc::new(MockChatClient::new());
        let dispatch = use_case(client.clone());

        let outcome = dispatch
            .execute(&request(METHOD_LIST_SELECTOR, "ignored", "also-ignored"))
            .await
            .unwrap();

        let DispatchOutcome::Helpers(choices) = outcome else {
            panic!("expected helper listing");
        };
        assert_eq!(choices.len(), PromptCatalog::standard().len());
        assert!(client.calls().await.is_empty(), "listing must not send");
    }

    #[tokio::test]
    async fn method_list_ignores_prompt_and_message_id() {
        let dispatch = use_case(Arc::new(MockChatClient::new()));

        let with_fields = dispatch
            .execute(&request(METHOD_LIST_SELECTOR, "a", "b"))
            .await
            .unwrap();
        let without = dispatch
            .execute(&PromptRequest::new(
                Some(METHOD_LIST_SELECTOR.to_string()),
                None,
                None,
            ))
            .await
            .unwrap();

        let (DispatchOutcome::Helpers(a), DispatchOutcome::Helpers(b)) = (with_fields, without)
        else {
            panic!("expected helper listings");
        };
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn empty_name_takes_direct_send_path() {
        let client = Arc::new(MockChatClient::new());
        let dispatch = use_case(client.clone());

        let outcome = dispatch.execute(&request("", "hello", "")).await.unwrap();

        assert!(matches!(outcome, DispatchOutcome::Reply(_)));
        assert_eq!(client.calls().await, vec![("hello".to_string(), None)]);
    }

    #[tokio::test]
    async fn message_id_is_attached_as_parent() {
        let client = Arc::new(MockChatClient::new());
        let dispatch = use_case(client.clone());

        dispatch
            .execute(&request("", "follow-up", "abc123"))
            .await
            .unwrap();

        assert_eq!(
            client.calls().await,
            vec![("follow-up".to_string(), Some("abc123".to_string()))]
        );
    }

    #[tokio::test]
    async fn helper_name_renders_template_before_send() {
        let client = Arc::new(MockChatClient::new());
        let dispatch = use_case(client.clone());

        dispatch
            .execute(&request("actAsLinuxTerminal", "ls -la", "abc123"))
            .await
            .unwrap();

        let calls = client.calls().await;
        assert_eq!(calls.len(), 1);
        let (sent, parent) = &calls[0];
        assert!(sent.starts_with("I want you to act as a Linux terminal"));
        assert!(sent.ends_with("ls -la"));
        assert_eq!(parent.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn unknown_helper_is_not_found() {
        let dispatch = use_case(Arc::new(MockChatClient::new()));

        let err = dispatch
            .execute(&request("stealAllSecrets", "x", ""))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn missing_prompt_is_invalid_input() {
        let dispatch = use_case(Arc::new(MockChatClient::new()));

        let err = dispatch
            .execute(&PromptRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "invalid_input");
    }
}
