//! # lex-core
//!
//! Amazon Lex V1 code hook protocol: event and response wire types, the
//! three dialog-action builders, and name-based intent dispatch.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌───────────────┐    ┌─────────────┐
//! │ LexEvent │───▶│ IntentRouter │───▶│ IntentHandler │───▶│ LexResponse │
//! └──────────┘    └──────────────┘    └───────────────┘    └─────────────┘
//!                        │                    │
//!                 UnsupportedIntent    ElicitSlot / Delegate / Close
//! ```
//!
//! Every invocation is independent. Session attributes are persisted by
//! Lex and must be echoed back on every response.

pub mod error;
pub mod event;
pub mod intent;
pub mod response;

pub use error::{DialogError, Result};
pub use event::{clear_slot, InvocationSource, LexEvent, Phase, SessionAttributes, Slots};
pub use intent::{IntentHandler, IntentRouter};
pub use response::{
    close, delegate, elicit_slot, encode, DialogAction, FulfillmentState, LexResponse, Message,
    ValidationResult,
};
