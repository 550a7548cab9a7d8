//! Money type for representing monetary values.
//!
//! Amounts are held in the currency's minor unit (paise for INR) so that
//! sums never drift. Storefront rules that round to whole units (tax and
//! percentage coupons) go through [`Money::whole_percentage`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Number of minor units in one whole unit.
    pub fn minor_per_unit(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use eco_commerce::money::{Money, Currency};
    /// assert_eq!(Money::from_whole(50, Currency::INR).amount_minor, 5000);
    /// ```
    pub fn from_whole(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(currency.minor_per_unit()), currency)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use eco_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::INR);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_minor = (amount * currency.minor_per_unit() as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_unit() as f64
    }

    /// Whether the amount is a whole number of currency units.
    pub fn is_whole(&self) -> bool {
        self.amount_minor % self.currency.minor_per_unit() == 0
    }

    /// Format as a display string: "₹500" for whole amounts, "₹49.50" otherwise.
    ///
    /// Negative amounts carry the sign before the symbol: "-₹99".
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = Money::new(self.amount_minor.saturating_abs(), self.currency);
        format!("{}{}{}", sign, self.currency.symbol(), magnitude.display_amount())
    }

    /// Format without the currency symbol.
    pub fn display_amount(&self) -> String {
        if self.is_whole() {
            return format!("{}", self.amount_minor / self.currency.minor_per_unit());
        }
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_sub(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by an integer quantity.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// `percent`% of this amount, rounded to the nearest whole currency unit.
    ///
    /// Halves round up, so 5% of ₹10 is ₹1.
    ///
    /// ```
    /// use eco_commerce::money::{Money, Currency};
    /// let subtotal = Money::from_whole(500, Currency::INR);
    /// assert_eq!(subtotal.whole_percentage(5), Some(Money::from_whole(25, Currency::INR)));
    /// ```
    pub fn whole_percentage(&self, percent: i64) -> Option<Money> {
        let per_unit = i128::from(self.currency.minor_per_unit());
        let scaled = i128::from(self.amount_minor) * i128::from(percent);
        let denominator = 100 * per_unit;
        let whole_units = (scaled + denominator / 2).div_euclid(denominator);
        let amount = i64::try_from(whole_units * per_unit).ok()?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, None on mismatch or overflow.
    pub fn try_sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.fold(Some(Money::zero(currency)), |acc, m| acc?.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_whole() {
        let m = Money::from_whole(500, Currency::INR);
        assert_eq!(m.amount_minor, 50000);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::INR);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_whole(500, Currency::INR).display(), "\u{20b9}500");
        assert_eq!(Money::new(4950, Currency::INR).display(), "\u{20b9}49.50");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::from_whole(-99, Currency::INR).display(), "-\u{20b9}99");
        assert_eq!(Money::new(-4950, Currency::INR).display(), "-\u{20b9}49.50");
        assert_eq!(Money::new(-50, Currency::USD).display(), "-$0.50");
    }

    #[test]
    fn test_money_ordering() {
        let small = Money::from_whole(10, Currency::INR);
        let large = Money::from_whole(25, Currency::INR);
        assert!(small < large);
        assert!(Currency::INR < Currency::USD);
    }

    #[test]
    fn test_money_try_add_mismatch() {
        let inr = Money::from_whole(10, Currency::INR);
        let usd = Money::from_whole(10, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);
        assert_eq!(inr.try_add(&inr), Some(Money::from_whole(20, Currency::INR)));
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert_eq!(m.try_multiply(2), None);
        assert_eq!(
            Money::new(250, Currency::INR).try_multiply(3),
            Some(Money::new(750, Currency::INR))
        );
    }

    #[test]
    fn test_whole_percentage_rounding() {
        let inr = |minor| Money::new(minor, Currency::INR);
        // 5% of 10 = 0.5, rounds half up
        assert_eq!(inr(1000).whole_percentage(5), Some(inr(100)));
        // 5% of 49.50 = 2.475 -> 2
        assert_eq!(inr(4950).whole_percentage(5), Some(inr(200)));
        // 10% of 1234 = 123.4 -> 123
        assert_eq!(inr(123400).whole_percentage(10), Some(inr(12300)));
        // 10% of 1235 = 123.5 -> 124
        assert_eq!(inr(123500).whole_percentage(10), Some(inr(12400)));
        assert_eq!(inr(0).whole_percentage(5), Some(inr(0)));
    }

    #[test]
    fn test_try_sum() {
        let items = [
            Money::from_whole(1, Currency::INR),
            Money::from_whole(2, Currency::INR),
        ];
        assert_eq!(
            Money::try_sum(items.iter(), Currency::INR),
            Some(Money::from_whole(3, Currency::INR))
        );
        assert_eq!(Money::try_sum(items.iter(), Currency::USD), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
