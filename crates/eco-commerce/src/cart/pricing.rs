//! Cart pricing and rewards calculation.
//!
//! Money is summed in minor units, tax and percentage coupons round to whole
//! currency units, and carbon is summed as floating point kilograms. The
//! summary is a pure function of the line items and the coupon code.

use serde::{Deserialize, Serialize};

use crate::cart::{Coupon, CouponOutcome, LineItem};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::rewards::{eco_points_for, CarbonLevel};

/// Goods and services tax applied to the subtotal.
pub const TAX_PERCENT: i64 = 5;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Σ unit price × quantity.
    pub subtotal: Money,
    /// Σ unit delivery charge × quantity.
    pub delivery_total: Money,
    /// 5% of the subtotal, rounded to whole units.
    pub tax_total: Money,
    /// Coupon discount.
    pub discount_total: Money,
    /// subtotal + delivery + tax - discount. May be negative.
    pub grand_total: Money,
    /// Σ co2 × quantity, in kilograms.
    pub total_co2_kg: f64,
    /// Reward points for this cart's carbon. May be negative.
    pub eco_points: i64,
    /// What happened to the coupon code.
    pub coupon: CouponOutcome,
}

impl CheckoutSummary {
    /// An all-zero summary.
    pub fn empty(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            delivery_total: Money::zero(currency),
            tax_total: Money::zero(currency),
            discount_total: Money::zero(currency),
            grand_total: Money::zero(currency),
            total_co2_kg: 0.0,
            eco_points: 0,
            coupon: CouponOutcome::None,
        }
    }

    /// Check if a discount was applied.
    pub fn has_discount(&self) -> bool {
        self.discount_total.is_positive()
    }

    /// Carbon rating of the cart.
    pub fn carbon_level(&self) -> CarbonLevel {
        CarbonLevel::for_cart(self.total_co2_kg)
    }
}

/// Price a cart.
///
/// The currency is taken from the first line item. An absent or empty
/// coupon code means no coupon; an unknown code gives no discount and is
/// reported in [`CheckoutSummary::coupon`].
///
/// ```
/// use eco_commerce::cart::{summarize, LineItem};
/// use eco_commerce::catalog::{Category, Product};
/// use eco_commerce::money::{Currency, Money};
///
/// let tote = Product::new("Tote", "Loom", Money::from_whole(500, Currency::INR), 8.0, Category::Bags);
/// let summary = summarize(&[LineItem::new(tote, 1)], Some("ECO10")).unwrap();
/// assert_eq!(summary.grand_total, Money::from_whole(475, Currency::INR));
/// assert_eq!(summary.eco_points, 80);
/// ```
pub fn summarize(items: &[LineItem], coupon_code: Option<&str>) -> Result<CheckoutSummary, CommerceError> {
    let currency = items
        .first()
        .map(|i| i.product.price.currency)
        .unwrap_or_default();

    let mut subtotal = Money::zero(currency);
    let mut delivery_total = Money::zero(currency);
    let mut total_co2_kg = 0.0;

    for item in items {
        let line_price = item.line_subtotal()?;
        let line_delivery = item.line_delivery()?;
        subtotal = add(subtotal, line_price)?;
        delivery_total = add(delivery_total, line_delivery)?;
        total_co2_kg += item.line_co2_kg();
    }

    let tax_total = subtotal
        .whole_percentage(TAX_PERCENT)
        .ok_or(CommerceError::Overflow)?;

    let coupon = match coupon_code.filter(|c| !c.is_empty()) {
        None => CouponOutcome::None,
        Some(code) => match Coupon::parse(code) {
            Ok(coupon) => {
                let amount = coupon
                    .rule()
                    .discount_for(&subtotal)
                    .ok_or(CommerceError::Overflow)?;
                CouponOutcome::Applied { coupon, amount }
            }
            Err(_) => {
                tracing::debug!(code, "unknown coupon code");
                CouponOutcome::Invalid {
                    code: code.to_string(),
                }
            }
        },
    };
    let discount_total = match &coupon {
        CouponOutcome::Applied { amount, .. } => *amount,
        _ => Money::zero(currency),
    };

    let grand_total = add(add(subtotal, delivery_total)?, tax_total)?
        .try_subtract(&discount_total)
        .ok_or(CommerceError::Overflow)?;
    let eco_points = eco_points_for(total_co2_kg);

    tracing::debug!(
        items = items.len(),
        subtotal = %subtotal,
        total = %grand_total,
        co2_kg = total_co2_kg,
        eco_points,
        "cart summarized"
    );

    Ok(CheckoutSummary {
        subtotal,
        delivery_total,
        tax_total,
        discount_total,
        grand_total,
        total_co2_kg,
        eco_points,
        coupon,
    })
}

fn add(a: Money, b: Money) -> Result<Money, CommerceError> {
    if a.currency != b.currency {
        return Err(CommerceError::CurrencyMismatch {
            expected: a.currency.code().to_string(),
            got: b.currency.code().to_string(),
        });
    }
    a.try_add(&b).ok_or(CommerceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};
    use proptest::prelude::*;

    fn inr(units: i64) -> Money {
        Money::from_whole(units, Currency::INR)
    }

    fn item(price: i64, delivery: i64, co2: f64, quantity: i64) -> LineItem {
        let product = Product::new("Item", "Brand", inr(price), co2, Category::Home)
            .with_delivery_charge(inr(delivery));
        LineItem::new(product, quantity)
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let summary = summarize(&[], None).unwrap();
        assert_eq!(summary, CheckoutSummary::empty(Currency::INR));
    }

    #[test]
    fn test_eco10_scenario() {
        let summary = summarize(&[item(500, 0, 8.0, 1)], Some("ECO10")).unwrap();
        assert_eq!(summary.subtotal, inr(500));
        assert_eq!(summary.delivery_total, inr(0));
        assert_eq!(summary.tax_total, inr(25));
        assert_eq!(summary.discount_total, inr(50));
        assert!((summary.total_co2_kg - 8.0).abs() < 1e-9);
        assert_eq!(summary.eco_points, 80);
        assert_eq!(summary.grand_total, inr(475));
        assert!(summary.coupon.is_applied());
    }

    #[test]
    fn test_eco10_lowercase_on_larger_subtotal() {
        let summary = summarize(&[item(1000, 0, 0.0, 1)], Some("eco10")).unwrap();
        assert_eq!(summary.discount_total, inr(100));
        assert_eq!(summary.grand_total, inr(1000 + 50 - 100));
    }

    #[test]
    fn test_heaviest_cart_total_below_zero_displays_with_sign() {
        let summary = summarize(&[item(1, 0, 61.0, 1)], Some("SAVE100")).unwrap();
        assert_eq!(summary.eco_points, -2);
        assert_eq!(summary.grand_total.display(), "-\u{20b9}99");
    }

    #[test]
    fn test_sums_and_delivery() {
        let items = [item(200, 40, 1.5, 2), item(1000, 0, 3.0, 1)];
        let summary = summarize(&items, None).unwrap();
        assert_eq!(summary.subtotal, inr(1400));
        assert_eq!(summary.delivery_total, inr(80));
        assert_eq!(summary.tax_total, inr(70));
        assert_eq!(summary.grand_total, inr(1550));
        assert!((summary.total_co2_kg - 6.0).abs() < 1e-9);
        assert_eq!(summary.eco_points, 60);
        assert_eq!(summary.coupon, CouponOutcome::None);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 5% of 10 is 0.5, rounds to 1
        let summary = summarize(&[item(10, 0, 0.0, 1)], None).unwrap();
        assert_eq!(summary.tax_total, inr(1));
        // 5% of 129 is 6.45, rounds to 6
        let summary = summarize(&[item(129, 0, 0.0, 1)], None).unwrap();
        assert_eq!(summary.tax_total, inr(6));
    }

    #[test]
    fn test_invalid_coupon_gives_no_discount() {
        let summary = summarize(&[item(500, 0, 1.0, 1)], Some("FREE")).unwrap();
        assert!(summary.discount_total.is_zero());
        assert_eq!(
            summary.coupon,
            CouponOutcome::Invalid {
                code: "FREE".to_string()
            }
        );
        assert_eq!(summary.grand_total, inr(525));
    }

    #[test]
    fn test_empty_coupon_is_none() {
        let summary = summarize(&[item(500, 0, 1.0, 1)], Some("")).unwrap();
        assert_eq!(summary.coupon, CouponOutcome::None);
    }

    #[test]
    fn test_flat_coupon_can_make_total_negative() {
        let summary = summarize(&[item(20, 0, 0.1, 1)], Some("SAVE100")).unwrap();
        assert_eq!(summary.grand_total, inr(20 + 1 - 100));
        assert!(summary.grand_total.is_negative());
    }

    #[test]
    fn test_heavy_cart_negative_points() {
        let summary = summarize(&[item(100, 0, 35.0, 2)], None).unwrap();
        assert_eq!(summary.eco_points, -20);
        assert_eq!(summary.carbon_level(), CarbonLevel::High);
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let usd = Product::new("Gadget", "Acme", Money::from_whole(5, Currency::USD), 1.0, Category::Electronics);
        let items = [item(100, 0, 1.0, 1), LineItem::new(usd, 1)];
        assert!(matches!(
            summarize(&items, None),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_summary_is_idempotent(price in 0i64..100_000, qty in 1i64..50, co2 in 0.0f64..20.0) {
            let items = [item(price, 0, co2, qty)];
            prop_assert_eq!(summarize(&items, Some("ECO10")).unwrap(), summarize(&items, Some("ECO10")).unwrap());
        }

        #[test]
        fn prop_subtotal_and_carbon_grow_with_quantity(price in 0i64..100_000, co2 in 0.0f64..20.0, qty in 1i64..100) {
            let less = summarize(&[item(price, 0, co2, qty)], None).unwrap();
            let more = summarize(&[item(price, 0, co2, qty + 1)], None).unwrap();
            prop_assert!(more.subtotal >= less.subtotal);
            prop_assert!(more.total_co2_kg >= less.total_co2_kg);
        }

        #[test]
        fn prop_total_identity(price in 0i64..100_000, delivery in 0i64..200, qty in 1i64..20) {
            let s = summarize(&[item(price, delivery, 1.0, qty)], Some("GREEN50")).unwrap();
            let expected = s.subtotal.amount_minor + s.delivery_total.amount_minor
                + s.tax_total.amount_minor - s.discount_total.amount_minor;
            prop_assert_eq!(s.grand_total.amount_minor, expected);
        }
    }
}
