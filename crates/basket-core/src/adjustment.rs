//! # Price Adjustment Module
//!
//! When an offer applies, it manipulates a line's subtotal through one or
//! more price adjustments. A [`PriceAdjustment`] yields a signed delta that
//! the offer adds onto the subtotal; the adjustment itself never compounds
//! or applies anything.
//!
//! The trait is the extension seam. Only [`FixedAdjustment`] exists today;
//! [`AdjustmentKind::Percentage`] is reserved as a storage tag for the
//! percentage variant that back-office storage already anticipates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Adjustment Kind
// =============================================================================

/// Identifying tag for an adjustment variant, used when adjustments are
/// stored outside the process (database rows, JSON configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    /// Adds or subtracts a fixed amount from the total. Ex. +15.00 or -5.00
    Fixed,
    /// Adds or subtracts a percentage of the total. Ex. +10% or -5%
    /// Reserved: no implementation carries this tag yet.
    Percentage,
}

// =============================================================================
// Price Adjustment Trait
// =============================================================================

/// A value-producer yielding a signed money delta.
///
/// The caller ([`crate::offer::ProductOffer`]) applies the delta additively;
/// `value()` is a pure accessor with no internal compounding.
pub trait PriceAdjustment: fmt::Debug {
    /// The variant tag for storage.
    fn kind(&self) -> AdjustmentKind;

    /// The signed delta. Negative for discounts, positive for surcharges.
    fn value(&self) -> Money;
}

// =============================================================================
// Fixed Adjustment
// =============================================================================

/// A constant signed delta. Ex. +15.00 or -5.00. Use negative amounts for
/// discounts.
///
/// ## Example
/// ```rust
/// use basket_core::adjustment::{FixedAdjustment, PriceAdjustment};
///
/// let half_price_second = FixedAdjustment::new("-16.475".parse().unwrap());
/// assert_eq!(half_price_second.value().to_string(), "-16.475");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAdjustment {
    amount: Money,
}

impl FixedAdjustment {
    /// Creates a fixed adjustment with the given signed delta.
    #[inline]
    pub const fn new(amount: Money) -> Self {
        FixedAdjustment { amount }
    }
}

impl PriceAdjustment for FixedAdjustment {
    #[inline]
    fn kind(&self) -> AdjustmentKind {
        AdjustmentKind::Fixed
    }

    #[inline]
    fn value(&self) -> Money {
        self.amount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
