//! # Delivery Charge Module
//!
//! A [`DeliveryChargeRule`] is a half-open price band over the basket
//! subtotal with a flat charge. The basket evaluates every rule against the
//! subtotal and sums the charges of the eligible ones.
//!
//! ```text
//!   subtotal:   0 ───────── 50 ───────── 90 ─────────►
//!   bands:     [   4.95    )[   2.95    )[   0.00
//!               min ≤ subtotal < max, absent bound = unbounded
//! ```
//!
//! Rules are independent of each other. Bands are designed to be mutually
//! exclusive but nothing enforces it; overlapping bands stack their charges.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Delivery Charge Rule
// =============================================================================

/// A delivery charge band: flat `price` applied when the basket subtotal
/// falls in `[min_price, max_price)`.
///
/// Negative prices are allowed and act as delivery discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryChargeRule {
    /// Minimum subtotal (inclusive) for the rule to apply, or `None` for no
    /// minimum.
    min_price: Option<Money>,

    /// Maximum subtotal (exclusive) for the rule to apply, or `None` for no
    /// maximum.
    max_price: Option<Money>,

    /// Charge added when the rule applies. `None` means free (exact zero).
    price: Option<Money>,
}

impl DeliveryChargeRule {
    /// Creates a delivery charge rule.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{DeliveryChargeRule, Money};
    ///
    /// // Orders from 50 up to (not including) 90 ship for 2.95
    /// let mid_band = DeliveryChargeRule::new(
    ///     Some("50".parse::<Money>().unwrap()),
    ///     Some("90".parse().unwrap()),
    ///     Some("2.95".parse().unwrap()),
    /// );
    /// assert!(mid_band.is_eligible("60".parse().unwrap()));
    /// ```
    #[inline]
    pub const fn new(
        min_price: Option<Money>,
        max_price: Option<Money>,
        price: Option<Money>,
    ) -> Self {
        DeliveryChargeRule {
            min_price,
            max_price,
            price,
        }
    }

    /// Whether the basket subtotal falls within this rule's band:
    /// `min_price <= total < max_price`.
    ///
    /// Either bound set to `None` is ignored; both `None` always applies.
    pub fn is_eligible(&self, total: Money) -> bool {
        let above_min = self.min_price.is_none_or(|min| total >= min);
        let below_max = self.max_price.is_none_or(|max| total < max);

        above_min && below_max
    }

    /// The charge added to the order when this rule applies.
    ///
    /// An unset price is exact zero, never a missing value.
    #[inline]
    pub fn price(&self) -> Money {
        self.price.unwrap_or_else(Money::zero)
    }

    /// The order total including this rule's charge: `cart_total + price()`
    /// when eligible, the unchanged `cart_total` otherwise.
    ///
    /// Note the distinct contract from [`crate::Basket::delivery_cost`],
    /// which aggregates the bare `price()` of every eligible rule. Both
    /// entry points are part of the public surface: this one answers "what
    /// would the order cost shipped under this rule alone".
    pub fn total(&self, cart_total: Money) -> Money {
        if self.is_eligible(cart_total) {
            cart_total + self.price()
        } else {
            cart_total
        }
    }

    /// The minimum subtotal bound, or `None` for no minimum.
    #[inline]
    pub const fn min_price(&self) -> Option<Money> {
        self.min_price
    }

    /// The maximum subtotal bound, or `None` for no maximum.
    #[inline]
    pub const fn max_price(&self) -> Option<Money> {
        self.max_price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
