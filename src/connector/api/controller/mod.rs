pub mod prompt_controller;

pub use prompt_controller::{handle_prompt, health, FALLBACK_MESSAGE};
