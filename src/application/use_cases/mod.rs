pub mod dispatch_prompt;
pub mod list_helpers;
pub mod send_prompt;

pub use dispatch_prompt::{DispatchOutcome, DispatchPromptUseCase, METHOD_LIST_SELECTOR};
pub use list_helpers::ListHelpersUseCase;
pub use send_prompt::SendPromptUseCase;
