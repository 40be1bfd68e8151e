use serde::{Deserialize, Serialize};

/// Inbound request body for the prompt endpoint.
///
/// All fields are optional on the wire; the dispatcher decides the path from
/// which ones are present. An empty string counts the same as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptRequest {
    /// Helper selector, or the reserved `getMethodList` value.
    pub name: Option<String>,
    /// The user message.
    pub prompt: Option<String>,
    /// Conversation continuation reference; empty means a fresh thread.
    pub message_id: Option<String>,
}

impl PromptRequest {
    pub fn new(
        name: Option<String>,
        prompt: Option<String>,
        message_id: Option<String>,
    ) -> Self {
        Self {
            name,
            prompt,
            message_id,
        }
    }

    /// Selector, treating the empty string as absent.
    pub fn selector(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Parent reference, treating the empty string as absent.
    pub fn parent_reference(&self) -> Option<&str> {
        self.message_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The user message, required on send paths.
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_body() {
        let req: PromptRequest =
            serde_json::from_str(r#"{"name":"x","prompt":"hi","messageId":"abc123"}"#).unwrap();

        assert_eq!(req.selector(), Some("x"));
        assert_eq!(req.prompt_text(), Some("hi"));
        assert_eq!(req.parent_reference(), Some("abc123"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let req: PromptRequest = serde_json::from_str("{}").unwrap();

        assert!(req.selector().is_none());
        assert!(req.prompt_text().is_none());
        assert!(req.parent_reference().is_none());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let req: PromptRequest =
            serde_json::from_str(r#"{"name":"","prompt":"hello","messageId":""}"#).unwrap();

        assert!(req.selector().is_none());
        assert_eq!(req.prompt_text(), Some("hello"));
        assert!(req.parent_reference().is_none());
    }
}
