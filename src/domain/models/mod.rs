pub mod chat_message;
pub mod choice;
pub mod envelope;
pub mod prompt_template;

pub use chat_message::{ChatMessage, ChatReply, Role};
pub use choice::Choice;
pub use envelope::PromptRequest;
pub use prompt_template::{PromptCatalog, PromptTemplate};
