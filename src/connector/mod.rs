//! # Connector Layer
//!
//! External integrations implementing the application interfaces:
//! - Chat transport (Azure OpenAI over reqwest, mock for tests)
//! - Message storage (in-memory, Azure Cache for Redis)
//! - The HTTP API (axum router, container, controllers)

pub mod adapter;
pub mod api;
pub mod storage;

pub use adapter::*;
pub use storage::*;
