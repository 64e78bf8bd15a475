//! Dialog Responses
//!
//! The three dialog actions a code hook can hand back to Lex, plus the
//! validation result used to decide between them.

use serde::{Deserialize, Serialize};

use crate::error::{DialogError, Result};
use crate::event::{SessionAttributes, Slots};

/// Message content type understood by Lex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

/// A message rendered to the end user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

/// Outcome reported on a `Close` action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Next step Lex should take
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Re-prompt the user for one slot
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },

    /// Let Lex pick the next step with the current slots
    Delegate { slots: Slots },

    /// End the turn
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

/// Lex V1 code hook response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    /// Exactly what the event carried, null included
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

impl LexResponse {
    /// `type` tag of the dialog action, for logging
    pub const fn action_type(&self) -> &'static str {
        match self.dialog_action {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}

/// Build an `ElicitSlot` response
pub fn elicit_slot(
    session_attributes: Option<SessionAttributes>,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Build a `Delegate` response
pub fn delegate(session_attributes: Option<SessionAttributes>, slots: Slots) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// Build a `Close` response
pub fn close(
    session_attributes: Option<SessionAttributes>,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

/// Serialize a response body. Failing here is our fault, never the caller's.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(DialogError::handler)
}

/// Result of checking slot values against business rules.
/// Carries at most one violation: the first one found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,

    pub violated_slot: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(violated_slot: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(violated_slot.into()),
            message: Some(Message::plain_text(content)),
        }
    }
}
