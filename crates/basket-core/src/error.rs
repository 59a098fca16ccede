//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── BasketError      - Basket operation failures                      │
//! │  └── ParseMoneyError  - Malformed decimal literals                     │
//! │                                                                         │
//! │  Everything else in the engine is a defined no-op or `None`:           │
//! │  removing an absent product, looking up a missing offer, and so on     │
//! │  are deliberate leniency contracts, not errors.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, offending literal)
//! 3. Errors are enum variants, never String
//! 4. Operations fail atomically: an error never leaves partial state behind

use thiserror::Error;

// =============================================================================
// Basket Error
// =============================================================================

/// Basket operation errors.
#[derive(Debug, Error)]
pub enum BasketError {
    /// Product SKU is not a member of the basket's catalog.
    ///
    /// ## When This Occurs
    /// - `Basket::add` is called with a SKU the catalog does not carry
    ///
    /// The basket's item quantities are left untouched when this is raised.
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(String),

    /// A price literal in catalog/offer/rule configuration failed to parse.
    #[error("Invalid price: {0}")]
    Parse(#[from] ParseMoneyError),
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Errors from constructing [`crate::money::Money`] out of a decimal literal.
///
/// A malformed literal always fails loudly; it is never coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Input was empty or whitespace only.
    #[error("empty money literal")]
    Empty,

    /// Input was not a plain decimal literal.
    #[error("invalid money literal: {literal:?}")]
    InvalidLiteral { literal: String },

    /// Literal carries more fractional digits than the working scale holds.
    /// Truncating would silently lose money, so the input is rejected.
    #[error("money literal {literal:?} exceeds {max} decimal places")]
    TooManyDecimals { literal: String, max: u32 },

    /// Magnitude does not fit the underlying 64-bit representation.
    #[error("money literal {literal:?} is out of range")]
    OutOfRange { literal: String },
}

impl ParseMoneyError {
    pub(crate) fn invalid(literal: &str) -> Self {
        ParseMoneyError::InvalidLiteral {
            literal: literal.trim().to_string(),
        }
    }

    pub(crate) fn out_of_range(literal: &str) -> Self {
        ParseMoneyError::OutOfRange {
            literal: literal.trim().to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BasketError.
pub type BasketResult<T> = Result<T, BasketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BasketError::ProductNotFound("LOW-QUALITY-PRODUCT".to_string());
        assert_eq!(
            err.to_string(),
            "Product not found in catalog: LOW-QUALITY-PRODUCT"
        );
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseMoneyError::TooManyDecimals {
            literal: "1.23456".to_string(),
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "money literal \"1.23456\" exceeds 4 decimal places"
        );
    }

    #[test]
    fn test_parse_error_converts_to_basket_error() {
        let parse_err = ParseMoneyError::Empty;
        let err: BasketError = parse_err.into();
        assert!(matches!(err, BasketError::Parse(_)));
    }
}
