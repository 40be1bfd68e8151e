pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, DispatchOutcome, DispatchPromptUseCase, ListHelpersUseCase, MessageStore,
    SendPromptUseCase, METHOD_LIST_SELECTOR,
};

pub use connector::api::{build_router, CacheConfig, Container, ContainerConfig};
pub use connector::{
    AzureOpenAiClient, InMemoryMessageStore, MockChatClient, RedisMessageStore,
};

pub use domain::{
    ChatMessage, ChatReply, Choice, DomainError, PromptCatalog, PromptRequest, PromptTemplate,
    Role,
};
