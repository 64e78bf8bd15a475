//! Error Types for Robo Advisor

use thiserror::Error;

use lex_core::DialogError;

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Fulfillment faults. Both mean validation was bypassed upstream.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Risk level {0:?} has no allocation")]
    UnmappedRiskLevel(String),

    #[error("Slot {0} is required for fulfillment")]
    MissingSlot(&'static str),
}

impl From<AdvisorError> for DialogError {
    fn from(err: AdvisorError) -> Self {
        Self::handler(err)
    }
}
