//! # Catalog Module
//!
//! The catalog is the read-only set of products a basket can sell. It is
//! built by an external data source (database, config file, fixture) and
//! handed to the basket at construction time; the basket never mutates it.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog Product
// =============================================================================

/// A product available for sale.
///
/// Immutable after construction: the basket holds products by value in its
/// catalog index and resolves them by SKU, never mutating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Stock Keeping Unit - unique business identifier within the catalog.
    sku: String,

    /// Display name shown on the storefront and receipt.
    name: String,

    /// Unit price. Non-negative by the catalog source's contract.
    price: Money,
}

impl CatalogProduct {
    /// Creates a new catalog product.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{CatalogProduct, Money};
    ///
    /// let widget = CatalogProduct::new("R01", "Red Widget", "32.95".parse().unwrap());
    /// assert_eq!(widget.sku(), "R01");
    /// assert_eq!(widget.price(), "32.95".parse::<Money>().unwrap());
    /// ```
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        CatalogProduct {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }

    /// The product's SKU.
    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// The product's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product's unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
