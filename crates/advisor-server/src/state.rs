//! Application State

use std::sync::Arc;

use lex_core::IntentRouter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Intent router, built once and shared read-only
    pub router: Arc<IntentRouter>,
}

impl AppState {
    pub fn new(router: IntentRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
