pub mod azure_openai_client;
pub mod mock_chat_client;

pub use azure_openai_client::AzureOpenAiClient;
pub use mock_chat_client::MockChatClient;
