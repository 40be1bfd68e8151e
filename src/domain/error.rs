use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Chat API error: {status} {status_text}")]
    ChatApi { status: u16, status_text: String },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreError(msg.into())
    }

    pub fn chat_api(status: u16, status_text: impl Into<String>) -> Self {
        Self::ChatApi {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Stable machine-readable kind, used by the API boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config",
            Self::StoreError(_) => "store",
            Self::ChatApi { .. } => "chat_api",
            Self::Upstream(_) => "upstream",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Timeout(_) => "timeout",
            Self::IoError(_) => "io",
            Self::Internal(_) => "internal",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_chat_api(&self) -> bool {
        matches!(self, Self::ChatApi { .. })
    }

    /// True for any failure of the upstream chat service, whether it answered
    /// with an error status or never answered at all.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::ChatApi { .. } | Self::Upstream(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }
}
