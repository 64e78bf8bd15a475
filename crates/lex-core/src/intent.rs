//! Intent Dispatch
//!
//! Handlers are registered by intent name; the router hands each inbound
//! event to the matching handler and rejects everything else.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DialogError, Result};
use crate::event::LexEvent;
use crate::response::LexResponse;

/// Implement to fulfill one Lex intent
pub trait IntentHandler: Send + Sync {
    /// Intent name as configured on the bot
    fn name(&self) -> &str;

    /// Produce exactly one response for the event
    fn handle(&self, event: LexEvent) -> Result<LexResponse>;
}

/// Routes events to intent handlers by name
pub struct IntentRouter {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRouter {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler, replacing any previous one for the same intent
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.handlers.insert(handler.name().to_owned(), Arc::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Route an event to its intent handler
    pub fn dispatch(&self, event: LexEvent) -> Result<LexResponse> {
        let intent_name = event.intent_name();

        let handler = self.get(intent_name).ok_or_else(|| {
            tracing::warn!(intent = %intent_name, "no handler for intent");
            DialogError::UnsupportedIntent(intent_name.to_owned())
        })?;

        tracing::debug!(
            intent = %intent_name,
            source = ?event.invocation_source,
            user = event.user_id.as_deref().unwrap_or("-"),
            "dispatching"
        );

        handler.handle(event)
    }

    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
