//! # Condition Module
//!
//! Offers apply conditionally. A [`Condition`] is a pure predicate over the
//! quantity of a product in the basket; an offer carries a list of them and
//! is eligible only when every condition passes.
//!
//! The trait is the extension seam: composite AND/OR conditions or
//! time-window conditions can be added later without touching any caller.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Condition Trait
// =============================================================================

/// A pure predicate tested against a product's quantity in the basket.
pub trait Condition: fmt::Debug {
    /// Tests the condition. Pure: no side effects, no hidden state.
    fn test(&self, quantity: i64) -> bool;
}

/// Tests an ordered sequence of conditions as a short-circuiting AND.
///
/// An empty sequence passes: an offer with no conditions is always eligible.
pub fn test_all(conditions: &[Box<dyn Condition>], quantity: i64) -> bool {
    conditions.iter().all(|condition| condition.test(quantity))
}

// =============================================================================
// Quantity Condition
// =============================================================================

/// Passes when the product quantity falls within a half-open range.
///
/// `quantity >= min` (when set) AND `quantity < max` (when set). A bound set
/// to `None` is unbounded on that side; both `None` always passes.
///
/// ## Example
/// ```rust
/// use basket_core::condition::{Condition, QuantityCondition};
///
/// // "Buy two or more"
/// let at_least_two = QuantityCondition::new(Some(2), None);
/// assert!(!at_least_two.test(1));
/// assert!(at_least_two.test(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityCondition {
    min: Option<i64>,
    max: Option<i64>,
}

impl QuantityCondition {
    /// Creates a quantity range condition.
    #[inline]
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        QuantityCondition { min, max }
    }

    /// The minimum quantity (inclusive), or `None` for no minimum.
    #[inline]
    pub const fn min(&self) -> Option<i64> {
        self.min
    }

    /// The maximum quantity (exclusive), or `None` for no maximum.
    #[inline]
    pub const fn max(&self) -> Option<i64> {
        self.max
    }
}

impl Condition for QuantityCondition {
    fn test(&self, quantity: i64) -> bool {
        let above_min = self.min.is_none_or(|min| quantity >= min);
        let below_max = self.max.is_none_or(|max| quantity < max);

        above_min && below_max
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_condition_range_passes_or_fails() {
        let condition = QuantityCondition::new(Some(1), Some(5));

        assert!(condition.test(3));
        assert!(!condition.test(10));
    }

    #[test]
    fn test_quantity_condition_bounds_are_half_open() {
        let condition = QuantityCondition::new(Some(2), Some(5));

        assert!(!condition.test(1));
        assert!(condition.test(2)); // min is inclusive
        assert!(condition.test(4));
        assert!(!condition.test(5)); // max is exclusive
    }

    #[test]
    fn test_quantity_condition_unbounded_sides() {
        let no_max = QuantityCondition::new(Some(2), None);
        assert!(no_max.test(2));
        assert!(no_max.test(1_000));
        assert!(!no_max.test(1));

        let no_min = QuantityCondition::new(None, Some(3));
        assert!(no_min.test(0));
        assert!(!no_min.test(3));

        let unbounded = QuantityCondition::new(None, None);
        assert!(unbounded.test(0));
        assert!(unbounded.test(999));
    }

    #[test]
    fn test_condition_is_pure() {
        let condition = QuantityCondition::new(Some(2), None);
        // Repeated calls with the same quantity give the same answer
        for _ in 0..3 {
            assert!(condition.test(2));
            assert!(!condition.test(1));
        }
    }

    #[test]
    fn test_test_all_is_short_circuiting_and() {
        let conditions: Vec<Box<dyn Condition>> = vec![
            Box::new(QuantityCondition::new(Some(2), None)),
            Box::new(QuantityCondition::new(None, Some(10))),
        ];

        assert!(test_all(&conditions, 5));
        assert!(!test_all(&conditions, 1)); // fails min
        assert!(!test_all(&conditions, 10)); // fails max
    }

    #[test]
    fn test_test_all_empty_passes() {
        let conditions: Vec<Box<dyn Condition>> = vec![];
        assert!(test_all(&conditions, 0));
    }
}
