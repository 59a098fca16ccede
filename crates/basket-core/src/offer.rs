//! # Product Offer Module
//!
//! A [`ProductOffer`] bundles eligibility conditions with price adjustments
//! for a single product line. The basket associates offers with SKUs through
//! its own mapping; an offer never knows which product it is attached to.
//!
//! ## How an offer is applied
//! ```text
//! line quantity ──► is_eligible(quantity)   (AND over all conditions)
//!                        │
//!                        ▼ true
//! line subtotal ──► total(subtotal)         (fold adjustments, in order)
//! ```
//!
//! `total` performs no eligibility check of its own; callers gate on
//! `is_eligible` first. Application is unconditional once invoked.

use crate::adjustment::PriceAdjustment;
use crate::condition::{self, Condition};
use crate::money::Money;

// =============================================================================
// Product Offer
// =============================================================================

/// A conditional, per-SKU price adjustment bundle.
#[derive(Debug)]
pub struct ProductOffer {
    /// Offer headline. Ex. "Buy one red widget, get the second at half price"
    title: String,

    /// Longer copy for the storefront. Ex. "Limited time offer"
    description: String,

    /// All conditions must pass against the line quantity.
    conditions: Vec<Box<dyn Condition>>,

    /// Applied in list order. Order only matters once percentage adjustments
    /// chain onto fixed ones; fixed deltas commute.
    adjustments: Vec<Box<dyn PriceAdjustment>>,
}

impl ProductOffer {
    /// Creates a new product offer.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        conditions: Vec<Box<dyn Condition>>,
        adjustments: Vec<Box<dyn PriceAdjustment>>,
    ) -> Self {
        ProductOffer {
            title: title.into(),
            description: description.into(),
            conditions,
            adjustments,
        }
    }

    /// The offer headline.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The offer description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the offer applies at the given line quantity.
    ///
    /// Logical AND of every condition; an offer with no conditions is always
    /// eligible. Pure: repeated calls with the same quantity give the same
    /// answer.
    pub fn is_eligible(&self, quantity: i64) -> bool {
        condition::test_all(&self.conditions, quantity)
    }

    /// The adjusted line total: every adjustment's value added onto
    /// `subtotal`, in list order.
    ///
    /// Does NOT check eligibility; gate on [`ProductOffer::is_eligible`]
    /// before calling.
    pub fn total(&self, subtotal: Money) -> Money {
        self.adjustments
            .iter()
            .fold(subtotal, |total, adjustment| total + adjustment.value())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
