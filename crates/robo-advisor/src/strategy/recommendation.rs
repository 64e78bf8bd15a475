//! Portfolio Recommendation
//!
//! Splits an investment between the bond and equity sleeves.

use rust_decimal::Decimal;

use crate::model::{Allocation, RiskLevel, BOND_FUND, EQUITY_FUND};
use crate::numeric::Numeric;

/// Dollar split for one investment at one risk level
#[derive(Clone, Copy, Debug)]
pub struct Recommendation {
    pub risk_level: RiskLevel,
    pub allocation: Allocation,
    pub bonds_amount: Numeric<Decimal>,
    pub stocks_amount: Numeric<Decimal>,
}

impl Recommendation {
    /// A `NotANumber` amount yields `NotANumber` sleeves
    pub fn new(investment_amount: Numeric<Decimal>, risk_level: RiskLevel) -> Self {
        let allocation = risk_level.allocation();
        Self {
            risk_level,
            allocation,
            bonds_amount: investment_amount * allocation.bond_pct,
            stocks_amount: investment_amount * allocation.stock_pct,
        }
    }

    /// Closing message shown to the user
    pub fn summary(&self, first_name: Option<&str>) -> String {
        let greeting = first_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(String::new, |name| format!(", {name}"));

        format!(
            "Thank you for your information{greeting}. Based on your {risk} risk level, \
             you should invest ${bonds:.2} in bonds ({BOND_FUND}) and ${stocks:.2} in stocks \
             ({EQUITY_FUND}). Bonds will make up {bond_pct:.0}% of your portfolio and stocks \
             will make up {stock_pct:.0}% of your portfolio.",
            risk = self.risk_level,
            bonds = self.bonds_amount,
            stocks = self.stocks_amount,
            bond_pct = self.allocation.bond_percent(),
            stock_pct = self.allocation.stock_percent(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::parse_float;
    use rust_decimal_macros::dec;

    #[test]
    fn test_low_risk_split() {
        let rec = Recommendation::new(parse_float("10000"), RiskLevel::Low);
        assert_eq!(rec.bonds_amount, dec!(6000));
        assert_eq!(rec.stocks_amount, dec!(4000));
    }

    #[test]
    fn test_every_level_splits_whole_amount() {
        for level in RiskLevel::ALL {
            let rec = Recommendation::new(parse_float("12345.67"), level);
            let (Numeric::Value(bonds), Numeric::Value(stocks)) = (rec.bonds_amount, rec.stocks_amount)
            else {
                panic!("{level} produced a non-number");
            };
            assert_eq!(bonds + stocks, dec!(12345.67), "{level}");
        }
    }

    #[test]
    fn test_summary_text() {
        let rec = Recommendation::new(parse_float("10000"), RiskLevel::Low);
        let text = rec.summary(Some("Ada"));

        assert!(text.starts_with("Thank you for your information, Ada."));
        assert!(text.contains("Low risk level"));
        assert!(text.contains("$6000.00 in bonds (AGG)"));
        assert!(text.contains("$4000.00 in stocks (SPY)"));
        assert!(text.contains("Bonds will make up 60%"));
        assert!(text.contains("stocks will make up 40%"));
    }

    #[test]
    fn test_summary_without_name() {
        let rec = Recommendation::new(parse_float("5000"), RiskLevel::None);
        let text = rec.summary(Some("  "));

        assert!(text.starts_with("Thank you for your information. Based on your None risk level"));
        assert!(text.contains("$5000.00 in bonds"));
        assert!(text.contains("$0.00 in stocks"));
        assert!(text.contains("100% of your portfolio"));
    }

    #[test]
    fn test_nan_amount_is_rendered() {
        let rec = Recommendation::new(parse_float("a lot"), RiskLevel::High);
        let text = rec.summary(None);

        assert!(rec.bonds_amount.is_nan());
        assert!(text.contains("$nan in bonds"));
        assert!(text.contains("$nan in stocks"));
        assert!(text.contains("80%"));
    }
}
