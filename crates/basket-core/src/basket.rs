//! # Basket Module
//!
//! The basket tracks product quantities and computes the priced total.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Basket::total()                                 │
//! │                                                                         │
//! │  for each (sku, quantity), in insertion order:                          │
//! │                                                                         │
//! │    catalog[sku].price × quantity ──► line subtotal                      │
//! │           │                                                             │
//! │           ├── offer for sku exists AND offer.is_eligible(quantity)?     │
//! │           │        │                                                    │
//! │           │        ▼ yes                                                │
//! │           │   offer.total(line subtotal) ──► line total                 │
//! │           │        │                                                    │
//! │           │        ▼ no                                                 │
//! │           └──► line subtotal unchanged ────► line total                 │
//! │                                                                         │
//! │  Σ line totals ──► subtotal                                             │
//! │       │                                                                 │
//! │       ├── subtotal ≤ 0 ──► return exact zero (no delivery charge)       │
//! │       │                                                                 │
//! │       └── subtotal + delivery_cost(subtotal) ──► grand total            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Catalog, offers and delivery rules are fixed at construction and treated
//! as read-only for the basket's lifetime. The item list is the only mutable
//! state and is owned exclusively by one basket instance: one basket per
//! user session, single writer. An embedding application that needs shared
//! mutation wraps the basket in its own `Arc<Mutex<_>>`.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::catalog::CatalogProduct;
use crate::delivery::DeliveryChargeRule;
use crate::error::{BasketError, BasketResult};
use crate::money::Money;
use crate::offer::ProductOffer;

// =============================================================================
// Basket Item
// =============================================================================

/// One line in the basket: a SKU and its quantity.
///
/// The quantity is always positive; a line whose quantity would reach zero is
/// removed from the basket entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    /// SKU of the catalog product on this line.
    pub sku: String,

    /// Quantity in the basket. Invariant: > 0.
    pub quantity: i64,
}

// =============================================================================
// Basket
// =============================================================================

/// Tracks the items in the basket and calculates the total price including
/// offer discounts and delivery costs.
#[derive(Debug)]
pub struct Basket {
    /// Catalog index by SKU. Fixed at construction.
    catalog: HashMap<String, CatalogProduct>,

    /// Delivery charge bands. Fixed at construction.
    delivery_rules: Vec<DeliveryChargeRule>,

    /// SKU → offer mapping. Fixed at construction; at most one offer per SKU.
    offers: HashMap<String, ProductOffer>,

    /// Mutable line items, kept in insertion order so total() iterates
    /// deterministically.
    items: Vec<BasketItem>,
}

impl Basket {
    /// Creates a new basket over a fixed catalog, delivery rule set and
    /// offer mapping.
    ///
    /// The catalog is supplied as a sequence but indexed by SKU internally.
    /// Duplicate SKUs in the sequence are last-wins.
    pub fn new(
        catalog_products: Vec<CatalogProduct>,
        delivery_rules: Vec<DeliveryChargeRule>,
        offers: HashMap<String, ProductOffer>,
    ) -> Self {
        let catalog = catalog_products
            .into_iter()
            .map(|product| (product.sku().to_string(), product))
            .collect();

        Basket {
            catalog,
            delivery_rules,
            offers,
            items: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Adds one unit of a product to the basket.
    ///
    /// ## Errors
    /// [`BasketError::ProductNotFound`] when the SKU is not a catalog member.
    /// The item list is left untouched on error.
    pub fn add(&mut self, sku: &str) -> BasketResult<()> {
        if !self.product_is_in_catalog(sku) {
            return Err(BasketError::ProductNotFound(sku.to_string()));
        }

        match self.items.iter_mut().find(|item| item.sku == sku) {
            Some(item) => item.quantity += 1,
            None => self.items.push(BasketItem {
                sku: sku.to_string(),
                quantity: 1,
            }),
        }

        trace!(sku, "added product to basket");
        Ok(())
    }

    /// Removes one unit of a product from the basket.
    ///
    /// No-op when the product is not in the basket. The line is deleted
    /// entirely when its quantity reaches zero; the item list never holds
    /// non-positive quantities.
    pub fn remove(&mut self, sku: &str) {
        if let Some(index) = self.items.iter().position(|item| item.sku == sku) {
            self.items[index].quantity -= 1;
            if self.items[index].quantity <= 0 {
                self.items.remove(index);
            }
            trace!(sku, "removed product from basket");
        }
    }

    /// Empties the basket of all contents while preserving the catalog,
    /// offers and delivery rules. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The number of unique products in the basket.
    pub fn count_unique_items(&self) -> usize {
        self.items.len()
    }

    /// The number of total products in the basket, counting quantities.
    pub fn count_total_items(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Checks if the basket holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Checks if a product has an offer associated with it. Independent of
    /// whether the product is in the basket or even the catalog.
    pub fn product_has_offer(&self, sku: &str) -> bool {
        self.offers.contains_key(sku)
    }

    /// The offer for a product, or `None` if one doesn't exist.
    pub fn product_offer(&self, sku: &str) -> Option<&ProductOffer> {
        self.offers.get(sku)
    }

    /// Checks if the catalog contains a product with this SKU.
    pub fn product_is_in_catalog(&self, sku: &str) -> bool {
        self.catalog.contains_key(sku)
    }

    /// Checks if a product has been added to the basket.
    pub fn product_is_in_basket(&self, sku: &str) -> bool {
        self.items.iter().any(|item| item.sku == sku)
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// The delivery cost for a basket subtotal: the sum of the charge of
    /// every rule whose band contains the subtotal.
    ///
    /// Rules are not mutually exclusive by construction; when bands overlap,
    /// their charges stack.
    pub fn delivery_cost(&self, total: Money) -> Money {
        self.delivery_rules
            .iter()
            .filter(|rule| rule.is_eligible(total))
            .fold(Money::zero(), |cost, rule| cost + rule.price())
    }

    /// Calculates the grand total of the basket: line totals with eligible
    /// offers applied, plus the delivery cost on the resulting subtotal.
    ///
    /// A subtotal of zero or less short-circuits to exact zero; no delivery
    /// charge is ever added to an empty (or discounted-below-zero) basket.
    pub fn total(&self) -> Money {
        let mut total = Money::zero();

        for item in &self.items {
            // add() guarantees every basket SKU is a catalog member
            let Some(product) = self.catalog.get(&item.sku) else {
                continue;
            };

            let subtotal = product.price() * item.quantity;

            let line_total = match self.product_offer(&item.sku) {
                Some(offer) if offer.is_eligible(item.quantity) => offer.total(subtotal),
                _ => subtotal,
            };

            trace!(sku = %item.sku, quantity = item.quantity, %line_total, "priced line");
            total += line_total;
        }

        if total <= Money::zero() {
            return Money::zero();
        }

        let delivery = self.delivery_cost(total);
        debug!(subtotal = %total, delivery = %delivery, "basket total computed");

        total + delivery
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustment::FixedAdjustment;
    use crate::condition::QuantityCondition;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    /// The widget storefront fixture:
    /// catalog R01=32.95 / G01=24.95 / B01=7.95, a buy-2-get-half-price-
    /// second offer on R01, and three delivery bands.
    fn widget_basket() -> Basket {
        let catalog = vec![
            CatalogProduct::new("R01", "Red Widget", money("32.95")),
            CatalogProduct::new("G01", "Green Widget", money("24.95")),
            CatalogProduct::new("B01", "Blue Widget", money("7.95")),
        ];

        let delivery_rules = vec![
            DeliveryChargeRule::new(None, Some(money("50")), Some(money("4.95"))),
            DeliveryChargeRule::new(Some(money("50")), Some(money("90")), Some(money("2.95"))),
            DeliveryChargeRule::new(Some(money("90")), None, Some(money("0.00"))),
        ];

        let mut offers = HashMap::new();
        offers.insert(
            "R01".to_string(),
            ProductOffer::new(
                "Buy one red widget, get the second at half price",
                "Limited time offer",
                vec![Box::new(QuantityCondition::new(Some(2), None))],
                vec![Box::new(FixedAdjustment::new(money("-16.475")))],
            ),
        );

        Basket::new(catalog, delivery_rules, offers)
    }

    #[test]
    fn test_basket_adds_one_product() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();

        assert_eq!(basket.count_total_items(), 1);
    }

    #[test]
    fn test_basket_rejects_non_existent_products() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();

        let err = basket.add("LOW-QUALITY-PRODUCT").unwrap_err();
        assert!(matches!(err, BasketError::ProductNotFound(sku) if sku == "LOW-QUALITY-PRODUCT"));

        // The failed add left the items untouched
        assert_eq!(basket.count_total_items(), 1);
    }

    #[test]
    fn test_basket_removes_one_product() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();

        basket.remove("R01");

        assert_eq!(basket.count_total_items(), 0);
        assert!(!basket.product_is_in_basket("R01"));
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();

        basket.remove("G01");
        basket.remove("NOT-EVEN-A-SKU");

        assert_eq!(basket.count_total_items(), 1);
    }

    #[test]
    fn test_add_remove_is_symmetric() {
        let mut basket = widget_basket();

        for _ in 0..3 {
            basket.add("R01").unwrap();
        }
        assert_eq!(basket.count_total_items(), 3);

        for _ in 0..3 {
            basket.remove("R01");
        }
        assert_eq!(basket.count_total_items(), 0);
        assert!(!basket.product_is_in_basket("R01"));
    }

    #[test]
    fn test_basket_counts_unique_items() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();
        basket.add("G01").unwrap();

        assert_eq!(basket.count_unique_items(), 2);
    }

    #[test]
    fn test_basket_tracks_quantity_of_products() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();

        assert_eq!(basket.count_total_items(), 3);
        assert_eq!(basket.items(), &[BasketItem { sku: "R01".to_string(), quantity: 3 }]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();
        basket.add("G01").unwrap();

        for _ in 0..3 {
            basket.clear();
            assert_eq!(basket.count_unique_items(), 0);
            assert_eq!(basket.count_total_items(), 0);
            assert!(basket.is_empty());
        }

        // Catalog, offers and rules survive a clear
        assert!(basket.product_is_in_catalog("R01"));
        assert!(basket.product_has_offer("R01"));
    }

    #[test]
    fn test_basket_checks_if_product_has_offer() {
        let basket = widget_basket();

        assert!(basket.product_has_offer("R01"));
        assert!(!basket.product_has_offer("G01"));
    }

    #[test]
    fn test_basket_gets_product_offer() {
        let basket = widget_basket();

        assert!(basket.product_offer("R01").is_some());
        assert!(basket.product_offer("G01").is_none());
    }

    #[test]
    fn test_basket_checks_if_product_is_in_basket() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();

        assert!(basket.product_is_in_basket("R01"));
        assert!(!basket.product_is_in_basket("G01"));
        assert!(!basket.product_is_in_basket("LOW-QUALITY-PRODUCT"));
    }

    #[test]
    fn test_basket_checks_if_product_is_in_catalog() {
        let basket = widget_basket();

        assert!(basket.product_is_in_catalog("R01"));
        assert!(!basket.product_is_in_catalog("LOW-QUALITY-PRODUCT"));
    }

    #[test]
    fn test_duplicate_catalog_skus_are_last_wins() {
        let catalog = vec![
            CatalogProduct::new("R01", "Red Widget", money("32.95")),
            CatalogProduct::new("R01", "Red Widget (reissue)", money("30.00")),
        ];
        let mut basket = Basket::new(catalog, vec![], HashMap::new());

        basket.add("R01").unwrap();
        assert_eq!(basket.total(), money("30.00"));
    }

    #[test]
    fn test_basket_calculates_delivery_costs() {
        let basket = widget_basket();

        assert_eq!(basket.delivery_cost(money("0")), money("4.95"));
        assert_eq!(basket.delivery_cost(money("50")), money("2.95"));
        assert_eq!(basket.delivery_cost(money("90")), money("0.00"));
    }

    #[test]
    fn test_delivery_band_boundaries_are_half_open() {
        let basket = widget_basket();

        // Exactly on a band's max is NOT eligible for that band; exactly on
        // the next band's min IS
        assert_eq!(basket.delivery_cost(money("49.9999")), money("4.95"));
        assert_eq!(basket.delivery_cost(money("50")), money("2.95"));
        assert_eq!(basket.delivery_cost(money("89.9999")), money("2.95"));
        assert_eq!(basket.delivery_cost(money("90")), money("0.00"));
    }

    #[test]
    fn test_overlapping_delivery_bands_stack() {
        let rules = vec![
            DeliveryChargeRule::new(None, None, Some(money("1.00"))),
            DeliveryChargeRule::new(None, Some(money("50")), Some(money("4.95"))),
        ];
        let basket = Basket::new(vec![], rules, HashMap::new());

        assert_eq!(basket.delivery_cost(money("10")), money("5.95"));
        assert_eq!(basket.delivery_cost(money("60")), money("1.00"));
    }

    #[test]
    fn test_empty_basket_totals_exact_zero() {
        let basket = widget_basket();

        assert_eq!(basket.total(), Money::zero());
        assert!(basket.total().is_zero());
    }

    #[test]
    fn test_basket_calculates_totals() {
        // | Products                 | Total  |
        // |--------------------------|--------|
        // | B01, G01                 | 37.85  |
        // | R01, R01                 | 54.375 |
        // | R01, G01                 | 60.85  |
        // | B01, B01, R01, R01, R01  | 98.275 |
        let mut basket = widget_basket();

        basket.add("B01").unwrap();
        basket.add("G01").unwrap();
        // 7.95 + 24.95 = 32.90, delivery 4.95
        assert_eq!(basket.total(), money("37.85"));

        basket.clear();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();
        // 65.90 - 16.475 = 49.425, delivery 4.95
        assert_eq!(basket.total(), money("54.375"));
        assert_eq!(basket.total().rounded_to_cents(), money("54.38"));

        basket.clear();
        basket.add("R01").unwrap();
        basket.add("G01").unwrap();
        // 32.95 + 24.95 = 57.90, delivery 2.95
        assert_eq!(basket.total(), money("60.85"));

        basket.clear();
        basket.add("B01").unwrap();
        basket.add("B01").unwrap();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();
        // R01 line: 98.85 - 16.475 = 82.375; B01 line: 15.90
        // subtotal 98.275, delivery 0 (>= 90)
        assert_eq!(basket.total(), money("98.275"));
        assert_eq!(basket.total().rounded_to_cents(), money("98.28"));
    }

    #[test]
    fn test_offer_not_applied_below_condition_quantity() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();

        // Single red widget: no discount, 32.95 + 4.95 delivery
        assert_eq!(basket.total(), money("37.90"));
    }

    #[test]
    fn test_total_is_deterministic_across_calls() {
        let mut basket = widget_basket();
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();

        let first = basket.total();
        assert_eq!(basket.total(), first);
        assert_eq!(basket.total(), first);
    }

    #[test]
    fn test_discount_below_zero_returns_exact_zero() {
        // An over-generous offer drags the subtotal negative; no delivery
        // cost is added and the total clamps to exact zero
        let catalog = vec![CatalogProduct::new("C01", "Cheap Widget", money("1.00"))];
        let rules = vec![DeliveryChargeRule::new(None, None, Some(money("4.95")))];
        let mut offers = HashMap::new();
        offers.insert(
            "C01".to_string(),
            ProductOffer::new(
                "Overdone promotion",
                "",
                vec![],
                vec![Box::new(FixedAdjustment::new(money("-5.00")))],
            ),
        );

        let mut basket = Basket::new(catalog, rules, offers);
        basket.add("C01").unwrap();

        assert_eq!(basket.total(), Money::zero());
    }
}
