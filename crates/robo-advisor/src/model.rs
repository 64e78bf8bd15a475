//! Domain Models
//!
//! Slots collected by the bot, risk levels and the allocation each one maps
//! to. Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Aggregate bond fund backing the bond sleeve
pub const BOND_FUND: &str = "AGG";

/// S&P 500 fund backing the equity sleeve
pub const EQUITY_FUND: &str = "SPY";

/// Slots defined on the `recommendPortfolio` intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotName {
    FirstName,
    Age,
    InvestmentAmount,
    RiskLevel,
}

impl SlotName {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::Age, Self::InvestmentAmount, Self::RiskLevel];

    /// Key in the Lex slots map
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Age => "age",
            Self::InvestmentAmount => "investmentAmount",
            Self::RiskLevel => "riskLevel",
        }
    }

    /// Name reported as the violated slot
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvestmentAmount => "investment_amount",
            other => other.key(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

/// How much volatility the user accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Fixed bond/equity split for this level
    pub fn allocation(self) -> Allocation {
        match self {
            Self::None => Allocation::new(dec!(1.0), dec!(0.0)),
            Self::Low => Allocation::new(dec!(0.6), dec!(0.4)),
            Self::Medium => Allocation::new(dec!(0.4), dec!(0.6)),
            Self::High => Allocation::new(dec!(0.2), dec!(0.8)),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    /// Exact, case-sensitive match on the slot literal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AdvisorError::UnmappedRiskLevel(s.to_owned()))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio split as fractions of the investment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Fraction in bonds (AGG)
    pub bond_pct: Decimal,

    /// Fraction in equities (SPY)
    pub stock_pct: Decimal,
}

impl Allocation {
    pub const fn new(bond_pct: Decimal, stock_pct: Decimal) -> Self {
        Self { bond_pct, stock_pct }
    }

    pub fn bond_percent(&self) -> Decimal {
        self.bond_pct * dec!(100)
    }

    pub fn stock_percent(&self) -> Decimal {
        self.stock_pct * dec!(100)
    }
}
