#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Component limit exceeded")]
    ComponentLimitExceeded,

    #[error("Engine is already started")]
    AlreadyStarted,

    #[error("Engine is not started")]
    NotStarted,

    #[error("Component task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported url scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("user agent must not be empty")]
    EmptyUserAgent,

    #[error("max_components must be at least 1")]
    ZeroComponents,

    #[error("event_capacity must be at least 1")]
    ZeroEventCapacity,
}
