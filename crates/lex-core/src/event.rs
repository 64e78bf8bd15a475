//! Inbound Lex Events
//!
//! The Lex V1 Lambda input event. Only `currentIntent` and
//! `invocationSource` drive behavior; the rest of the envelope is kept for
//! logging and so the event can be re-serialized for replay.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot values keyed by slot name. `None` means "not yet supplied".
pub type Slots = HashMap<String, Option<String>>;

/// Opaque caller-persisted session state, echoed back on every response
pub type SessionAttributes = HashMap<String, String>;

/// Which code hook Lex is invoking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Initialization and validation, called on every user turn
    DialogCodeHook,
    /// Fulfillment once all slots are filled. Any unknown source lands here.
    #[serde(other)]
    FulfillmentCodeHook,
}

/// Dialog phase derived from the invocation source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Validating,
    Fulfilling,
}

impl From<InvocationSource> for Phase {
    fn from(source: InvocationSource) -> Self {
        match source {
            InvocationSource::DialogCodeHook => Self::Validating,
            InvocationSource::FulfillmentCodeHook => Self::Fulfilling,
        }
    }
}

/// User confirmation state for the intent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

/// Bot that produced the event
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// A resolved value for a slot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlotResolution {
    pub value: String,
}

/// What Lex resolved a slot from
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDetail {
    #[serde(default)]
    pub resolutions: Vec<SlotResolution>,
    #[serde(default)]
    pub original_value: Option<String>,
}

/// The intent Lex believes the user is expressing
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,

    pub slots: Slots,

    #[serde(default)]
    pub slot_details: HashMap<String, Option<SlotDetail>>,

    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

/// Lex V1 code hook input event
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub current_intent: CurrentIntent,

    pub invocation_source: InvocationSource,

    /// `None` when Lex sent null or omitted the field; echoed as-is
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,

    #[serde(default)]
    pub request_attributes: Option<HashMap<String, String>>,

    #[serde(default)]
    pub message_version: Option<String>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub input_transcript: Option<String>,

    #[serde(default)]
    pub output_dialog_mode: Option<String>,

    #[serde(default)]
    pub bot: Option<Bot>,
}

impl LexEvent {
    /// Minimal event carrying only what handlers read
    pub fn new(
        intent_name: impl Into<String>,
        invocation_source: InvocationSource,
        slots: Slots,
    ) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots,
                slot_details: HashMap::new(),
                confirmation_status: ConfirmationStatus::None,
            },
            invocation_source,
            session_attributes: Some(SessionAttributes::new()),
            request_attributes: None,
            message_version: Some("1.0".into()),
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
        }
    }

    pub fn with_session_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn phase(&self) -> Phase {
        self.invocation_source.into()
    }

    /// Value of a slot, `None` when missing or not yet supplied
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|v| v.as_deref())
    }
}

/// Null-out a slot value without ever adding a key
pub fn clear_slot(slots: &mut Slots, name: &str) {
    if let Some(value) = slots.get_mut(name) {
        *value = None;
    }
}
