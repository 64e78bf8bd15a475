//! Slot Validation
//!
//! Business rules for the collected slots. Rules run in a fixed order and
//! only the first violation is reported. A slot that has not been supplied
//! yet skips its numeric rule; the risk level is always checked.

use lex_core::ValidationResult;

use crate::model::{RiskLevel, SlotName};
use crate::numeric::parse_int;

pub const MIN_AGE_MESSAGE: &str =
    "You must be at least one year of age to start saving for retirement!";
pub const RETIRED_MESSAGE: &str = "You are already retired!";
pub const MIN_INVESTMENT_MESSAGE: &str = "Sorry, you must invest $5,000 or more.";
pub const RISK_LEVEL_MESSAGE: &str =
    "Sorry you must select one of the following options: 'None', 'Low', 'Medium', or 'High'";

/// Oldest age still saving for retirement
pub const MAX_AGE: i64 = 64;

/// Smallest accepted investment, in dollars
pub const MIN_INVESTMENT: i64 = 5_000;

/// Check raw slot values, reporting the first violation
pub fn validate(
    age: Option<&str>,
    investment_amount: Option<&str>,
    risk_level: Option<&str>,
) -> ValidationResult {
    if let Some(age) = age.map(parse_int) {
        if age <= 0 {
            return ValidationResult::invalid(SlotName::Age.label(), MIN_AGE_MESSAGE);
        } else if age > MAX_AGE {
            return ValidationResult::invalid(SlotName::Age.label(), RETIRED_MESSAGE);
        }
    }

    if let Some(amount) = investment_amount.map(parse_int) {
        if amount < MIN_INVESTMENT {
            return ValidationResult::invalid(
                SlotName::InvestmentAmount.label(),
                MIN_INVESTMENT_MESSAGE,
            );
        }
    }

    if risk_level.and_then(|r| r.parse::<RiskLevel>().ok()).is_none() {
        return ValidationResult::invalid(SlotName::RiskLevel.label(), RISK_LEVEL_MESSAGE);
    }

    ValidationResult::valid()
}
