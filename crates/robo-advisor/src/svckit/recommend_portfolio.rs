//! Recommend Portfolio Intent
//!
//! Validates slots on every dialog turn and, once Lex moves to fulfillment,
//! closes the conversation with a bond/equity recommendation.

use lex_core::{
    clear_slot, close, delegate, elicit_slot, FulfillmentState, IntentHandler, LexEvent,
    LexResponse, Message, Phase, Result as DialogResult,
};

use crate::error::{AdvisorError, Result};
use crate::model::{RiskLevel, SlotName};
use crate::numeric::parse_float;
use crate::strategy::Recommendation;
use crate::validation::validate;
use crate::INTENT_NAME;

/// Handler for the `recommendPortfolio` intent
pub struct RecommendPortfolioHandler;

impl IntentHandler for RecommendPortfolioHandler {
    fn name(&self) -> &str {
        INTENT_NAME
    }

    fn handle(&self, event: LexEvent) -> DialogResult<LexResponse> {
        match event.phase() {
            Phase::Validating => Ok(validate_slots(event)),
            Phase::Fulfilling => Ok(fulfill(event)?),
        }
    }
}

/// Re-elicit the first invalid slot, or hand control back to Lex
fn validate_slots(event: LexEvent) -> LexResponse {
    let result = validate(
        event.slot(SlotName::Age.key()),
        event.slot(SlotName::InvestmentAmount.key()),
        event.slot(SlotName::RiskLevel.key()),
    );

    let LexEvent {
        current_intent,
        session_attributes,
        ..
    } = event;

    if result.is_valid {
        tracing::debug!(intent = %current_intent.name, "slots valid, delegating");
        return delegate(session_attributes, current_intent.slots);
    }

    let violated = result.violated_slot.unwrap_or_default();
    let message = result
        .message
        .unwrap_or_else(|| Message::plain_text("Please provide a valid value."));
    tracing::warn!(slot = %violated, reason = %message.content, "slot validation failed");

    let mut slots = current_intent.slots;
    let key = SlotName::from_label(&violated).map_or(violated.as_str(), |slot| slot.key());
    clear_slot(&mut slots, key);

    elicit_slot(session_attributes, current_intent.name, slots, violated, message)
}

/// Close the dialog with the allocation for the chosen risk level
fn fulfill(event: LexEvent) -> Result<LexResponse> {
    let risk_level: RiskLevel = event
        .slot(SlotName::RiskLevel.key())
        .unwrap_or_default()
        .parse()
        .inspect_err(|err| tracing::error!(%err, "fulfillment reached with unvalidated risk level"))?;

    let amount = event
        .slot(SlotName::InvestmentAmount.key())
        .map(parse_float)
        .ok_or(AdvisorError::MissingSlot(SlotName::InvestmentAmount.key()))?;

    let recommendation = Recommendation::new(amount, risk_level);
    let content = recommendation.summary(event.slot(SlotName::FirstName.key()));

    tracing::info!(
        risk_level = %risk_level,
        bonds = %recommendation.bonds_amount,
        stocks = %recommendation.stocks_amount,
        "portfolio recommended"
    );

    Ok(close(
        event.session_attributes,
        FulfillmentState::Fulfilled,
        Message::plain_text(content),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_core::{DialogAction, DialogError, InvocationSource, SessionAttributes, Slots};

    fn slots(age: Option<&str>, amount: Option<&str>, risk: Option<&str>) -> Slots {
        Slots::from([
            ("firstName".to_string(), Some("Ada".to_string())),
            ("age".to_string(), age.map(String::from)),
            ("investmentAmount".to_string(), amount.map(String::from)),
            ("riskLevel".to_string(), risk.map(String::from)),
        ])
    }

    fn attributes() -> SessionAttributes {
        SessionAttributes::from([("returning".to_string(), "true".to_string())])
    }

    fn event(source: InvocationSource, slots: Slots) -> LexEvent {
        LexEvent::new(INTENT_NAME, source, slots).with_session_attributes(attributes())
    }

    #[test]
    fn test_invalid_age_elicits_and_clears_slot() {
        let response = RecommendPortfolioHandler
            .handle(event(InvocationSource::DialogCodeHook, slots(Some("0"), Some("10000"), Some("Low"))))
            .unwrap();

        assert_eq!(response.session_attributes, Some(attributes()));
        match response.dialog_action {
            DialogAction::ElicitSlot { intent_name, slots, slot_to_elicit, message } => {
                assert_eq!(intent_name, INTENT_NAME);
                assert_eq!(slot_to_elicit, "age");
                assert_eq!(slots.len(), 4);
                assert_eq!(slots["age"], None);
                assert_eq!(slots["investmentAmount"].as_deref(), Some("10000"));
                assert!(message.content.contains("at least one year"));
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_low_investment_clears_amount_slot() {
        let response = RecommendPortfolioHandler
            .handle(event(InvocationSource::DialogCodeHook, slots(Some("30"), Some("100"), Some("Low"))))
            .unwrap();

        match response.dialog_action {
            DialogAction::ElicitSlot { slots, slot_to_elicit, .. } => {
                assert_eq!(slot_to_elicit, "investment_amount");
                assert_eq!(slots.len(), 4);
                assert_eq!(slots["investmentAmount"], None);
                assert!(!slots.contains_key("investment_amount"));
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_slots_delegate_unchanged() {
        let original = slots(Some("30"), Some("10000"), Some("Medium"));
        let response = RecommendPortfolioHandler
            .handle(event(InvocationSource::DialogCodeHook, original.clone()))
            .unwrap();

        assert_eq!(response.session_attributes, Some(attributes()));
        assert_eq!(response.dialog_action, DialogAction::Delegate { slots: original });
    }

    #[test]
    fn test_fulfillment_closes_with_recommendation() {
        let response = RecommendPortfolioHandler
            .handle(event(InvocationSource::FulfillmentCodeHook, slots(Some("30"), Some("10000"), Some("Low"))))
            .unwrap();

        assert_eq!(response.session_attributes, Some(attributes()));
        match response.dialog_action {
            DialogAction::Close { fulfillment_state, message } => {
                assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
                assert!(message.content.contains("6000"));
                assert!(message.content.contains("4000"));
                assert!(message.content.contains("60%"));
                assert!(message.content.contains("40%"));
            }
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[test]
    fn test_fulfillment_skips_validation() {
        // Age would fail validation, but fulfillment trusts the earlier turn.
        let response = RecommendPortfolioHandler
            .handle(event(InvocationSource::FulfillmentCodeHook, slots(Some("90"), Some("10000"), Some("High"))))
            .unwrap();

        assert_eq!(response.action_type(), "Close");
    }

    #[test]
    fn test_fulfillment_with_unmapped_risk_level_fails() {
        let err = RecommendPortfolioHandler
            .handle(event(InvocationSource::FulfillmentCodeHook, slots(Some("30"), Some("10000"), Some("Extreme"))))
            .unwrap_err();

        assert_eq!(err.code(), "HANDLER_ERROR");
        match err {
            DialogError::Handler(source) => assert_eq!(
                source.downcast_ref::<AdvisorError>(),
                Some(&AdvisorError::UnmappedRiskLevel("Extreme".into()))
            ),
            other => panic!("expected handler error, got {other:?}"),
        }
    }

    #[test]
    fn test_fulfillment_without_amount_fails() {
        let err = RecommendPortfolioHandler
            .handle(event(InvocationSource::FulfillmentCodeHook, slots(Some("30"), None, Some("Low"))))
            .unwrap_err();

        assert!(err.to_string().contains("investmentAmount"));
    }
}
