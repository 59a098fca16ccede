//! # basket-core: Pure Pricing Logic for the Acme Basket
//!
//! This crate is the **heart** of the basket pricing engine. It contains all
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Basket Engine Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Catalog / Offer / Rule configuration               │   │
//! │  │        (database, config file, fixture - out of scope)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ construction-time input                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌───────────┐ ┌────────────┐ ┌──────────────────┐ │   │
//! │  │  │  money  │ │  catalog  │ │   offer    │ │      basket      │ │   │
//! │  │  │  Money  │ │  Catalog  │ │ Conditions │ │ quantities, line │ │   │
//! │  │  │ scale 4 │ │  Product  │ │Adjustments │ │ totals, delivery │ │   │
//! │  │  └─────────┘ └───────────┘ └────────────┘ └──────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact fixed-point money type (no floating point!)
//! - [`catalog`] - Catalog products
//! - [`condition`] - Offer eligibility predicates
//! - [`adjustment`] - Price adjustment variants
//! - [`offer`] - Per-product offers
//! - [`delivery`] - Delivery charge bands
//! - [`basket`] - Quantity tracking and total calculation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are scale-4 fixed point (i64),
//!    so offer math like a -16.475 discount never touches a binary float
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use basket_core::{
//!     Basket, CatalogProduct, DeliveryChargeRule, FixedAdjustment, Money,
//!     ProductOffer, QuantityCondition,
//! };
//!
//! let catalog = vec![
//!     CatalogProduct::new("R01", "Red Widget", "32.95".parse().unwrap()),
//!     CatalogProduct::new("G01", "Green Widget", "24.95".parse().unwrap()),
//! ];
//!
//! let delivery_rules = vec![
//!     DeliveryChargeRule::new(None, Some("50".parse().unwrap()), Some("4.95".parse().unwrap())),
//!     DeliveryChargeRule::new(Some("50".parse().unwrap()), None, Some("2.95".parse().unwrap())),
//! ];
//!
//! let mut offers = HashMap::new();
//! offers.insert(
//!     "R01".to_string(),
//!     ProductOffer::new(
//!         "Buy one red widget, get the second at half price",
//!         "Limited time offer",
//!         vec![Box::new(QuantityCondition::new(Some(2), None))],
//!         vec![Box::new(FixedAdjustment::new("-16.475".parse().unwrap()))],
//!     ),
//! );
//!
//! let mut basket = Basket::new(catalog, delivery_rules, offers);
//! basket.add("R01")?;
//! basket.add("R01")?;
//!
//! // 65.90 - 16.475 = 49.425, plus 4.95 delivery
//! assert_eq!(basket.total(), "54.375".parse::<Money>().unwrap());
//! # Ok::<(), basket_core::BasketError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adjustment;
pub mod basket;
pub mod catalog;
pub mod condition;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Basket` instead of
// `use basket_core::basket::Basket`

pub use adjustment::{AdjustmentKind, FixedAdjustment, PriceAdjustment};
pub use basket::{Basket, BasketItem};
pub use catalog::CatalogProduct;
pub use condition::{Condition, QuantityCondition};
pub use delivery::DeliveryChargeRule;
pub use error::{BasketError, BasketResult, ParseMoneyError};
pub use money::Money;
pub use offer::ProductOffer;
