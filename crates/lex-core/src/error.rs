//! Error Types

use thiserror::Error;

/// Result type alias for dialog operations
pub type Result<T> = std::result::Result<T, DialogError>;

/// Faults that terminate an invocation.
///
/// Slot validation failures are not errors; they travel back to Lex as
/// `ElicitSlot` responses.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No handler registered for the requested intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// Request body is not a Lex event
    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An intent handler gave up on a request it accepted
    #[error("Intent handler failed: {0}")]
    Handler(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DialogError {
    /// Wrap a domain error raised inside an intent handler
    pub fn handler<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Handler(Box::new(err))
    }

    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedIntent(_) => "UNSUPPORTED_INTENT",
            Self::Malformed(_) => "MALFORMED_REQUEST",
            Self::Handler(_) => "HANDLER_ERROR",
        }
    }

    /// Whether the caller sent something we can never accept
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
