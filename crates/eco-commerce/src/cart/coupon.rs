//! Coupon codes and discount rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::CommerceError;

/// How a coupon computes its discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountRule {
    /// Percentage of the subtotal, rounded to whole currency units.
    PercentOfSubtotal(i64),
    /// Fixed amount in whole currency units. Not capped at the subtotal.
    Flat(i64),
}

impl DiscountRule {
    /// Discount for a subtotal. `None` on overflow.
    pub fn discount_for(&self, subtotal: &Money) -> Option<Money> {
        match self {
            DiscountRule::PercentOfSubtotal(percent) => subtotal.whole_percentage(*percent),
            DiscountRule::Flat(units) => {
                let minor = units.checked_mul(subtotal.currency.minor_per_unit())?;
                Some(Money::new(minor, subtotal.currency))
            }
        }
    }
}

/// The storefront's fixed coupon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coupon {
    /// 10% off the subtotal.
    Eco10,
    /// 50 off.
    Green50,
    /// 100 off.
    Save100,
}

impl Coupon {
    pub const ALL: [Coupon; 3] = [Coupon::Eco10, Coupon::Green50, Coupon::Save100];

    pub fn code(&self) -> &'static str {
        match self {
            Coupon::Eco10 => "ECO10",
            Coupon::Green50 => "GREEN50",
            Coupon::Save100 => "SAVE100",
        }
    }

    pub fn rule(&self) -> DiscountRule {
        match self {
            Coupon::Eco10 => DiscountRule::PercentOfSubtotal(10),
            Coupon::Green50 => DiscountRule::Flat(50),
            Coupon::Save100 => DiscountRule::Flat(100),
        }
    }

    /// Human-readable description, e.g. "10% discount".
    pub fn description(&self) -> String {
        match self.rule() {
            DiscountRule::PercentOfSubtotal(p) => format!("{p}% discount"),
            DiscountRule::Flat(units) => format!("{units} off"),
        }
    }

    /// Look up a code, ignoring case. Whitespace is not trimmed.
    pub fn parse(code: &str) -> Result<Self, CommerceError> {
        let upper = code.to_uppercase();
        Coupon::ALL
            .into_iter()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CommerceError::InvalidCouponCode(code.to_string()))
    }
}

impl FromStr for Coupon {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coupon::parse(s)
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What happened to the coupon code supplied at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CouponOutcome {
    /// No code was entered.
    #[default]
    None,
    /// A known code was applied.
    Applied { coupon: Coupon, amount: Money },
    /// The code is not in the table; no discount was given.
    Invalid { code: String },
}

impl CouponOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CouponOutcome::Applied { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, CouponOutcome::Invalid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Coupon::parse("eco10").unwrap(), Coupon::Eco10);
        assert_eq!(Coupon::parse("Green50").unwrap(), Coupon::Green50);
        assert_eq!("SAVE100".parse::<Coupon>().unwrap(), Coupon::Save100);
    }

    #[test]
    fn test_parse_rejects_unknown_and_padded() {
        assert!(matches!(
            Coupon::parse("SAVE20"),
            Err(CommerceError::InvalidCouponCode(_))
        ));
        assert!(Coupon::parse(" ECO10").is_err());
    }

    #[test]
    fn test_rules() {
        let subtotal = Money::from_whole(1234, Currency::INR);
        assert_eq!(
            Coupon::Eco10.rule().discount_for(&subtotal),
            Some(Money::from_whole(123, Currency::INR))
        );
        assert_eq!(
            Coupon::Green50.rule().discount_for(&subtotal),
            Some(Money::from_whole(50, Currency::INR))
        );
        // flat discounts may exceed a small subtotal
        let small = Money::from_whole(30, Currency::INR);
        assert_eq!(
            Coupon::Save100.rule().discount_for(&small),
            Some(Money::from_whole(100, Currency::INR))
        );
    }

    #[test]
    fn test_eco10_on_thousand() {
        let subtotal = Money::from_whole(1000, Currency::INR);
        assert_eq!(
            Coupon::Eco10.rule().discount_for(&subtotal),
            Some(Money::from_whole(100, Currency::INR))
        );
        assert_eq!(
            Coupon::Save100.rule().discount_for(&subtotal),
            Some(Money::from_whole(100, Currency::INR))
        );
    }

    #[test]
    fn test_eco10_rounds_half_up() {
        let subtotal = Money::from_whole(105, Currency::INR);
        assert_eq!(
            Coupon::Eco10.rule().discount_for(&subtotal),
            Some(Money::from_whole(11, Currency::INR))
        );
    }
}
