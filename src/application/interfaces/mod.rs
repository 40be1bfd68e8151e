pub mod chat_client;
pub mod message_store;

pub use chat_client::ChatClient;
pub use message_store::MessageStore;
