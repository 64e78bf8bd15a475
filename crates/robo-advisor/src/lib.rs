//! # robo-advisor
//!
//! Lex code hook for a retirement robo advisor. The bot collects a first
//! name, age, investment amount and risk level, and the hook answers with a
//! fixed bond/equity split.
//!
//! ## Allocation by Risk Level
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  None    AGG ████████████████████  100%  SPY    0%   │
//! │  Low     AGG ████████████          60%   SPY   40%   │
//! │  Medium  AGG ████████              40%   SPY   60%   │
//! │  High    AGG ████                  20%   SPY   80%   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dialog Phases
//!
//! - `DialogCodeHook`: validate slots; re-elicit the first bad one or
//!   delegate back to Lex
//! - anything else: fulfill and close with the recommendation

pub mod error;
pub mod model;
pub mod numeric;
pub mod strategy;
pub mod svckit;
pub mod validation;

use lex_core::{encode, IntentRouter, LexEvent, LexResponse, Result as DialogResult};

pub use error::{AdvisorError, Result};
pub use model::{Allocation, RiskLevel, SlotName};
pub use numeric::{parse_float, parse_int, Numeric};
pub use strategy::Recommendation;
pub use svckit::RecommendPortfolioHandler;
pub use validation::validate;

/// The one intent this bot fulfills
pub const INTENT_NAME: &str = "recommendPortfolio";

/// Router with every intent handler registered
pub fn router() -> IntentRouter {
    let mut router = IntentRouter::new();
    router.register(RecommendPortfolioHandler);
    router
}

/// Route an event to its intent handler
pub fn dispatch(router: &IntentRouter, event: LexEvent) -> DialogResult<LexResponse> {
    router.dispatch(event)
}

/// Code hook entry point
pub fn handle(event: LexEvent) -> DialogResult<LexResponse> {
    dispatch(&router(), event)
}

/// Entry point for raw JSON events
pub fn handle_json(body: &str) -> DialogResult<String> {
    let event: LexEvent = serde_json::from_str(body)?;
    let response = handle(event)?;
    encode(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_core::{DialogError, InvocationSource, Slots};

    #[test]
    fn test_router_has_single_intent() {
        let router = router();
        assert_eq!(router.names(), vec![INTENT_NAME]);
    }

    #[test]
    fn test_handle_rejects_other_intents() {
        let event = LexEvent::new("orderFlowers", InvocationSource::DialogCodeHook, Slots::new());
        match handle(event) {
            Err(DialogError::UnsupportedIntent(name)) => assert_eq!(name, "orderFlowers"),
            other => panic!("expected UnsupportedIntent, got {other:?}"),
        }
    }

    #[test]
    fn test_handle_json_rejects_garbage() {
        let err = handle_json("not json").unwrap_err();
        assert!(err.is_client_error());
    }
}
