//! # Shopping Cart
//!
//! The aggregate that owns line items, bulk discounts and the sales tax rate.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Every quantity change                               │
//! │                                                                         │
//! │  add_item(p) ─────────────┐                                             │
//! │  remove_multiple_items ───┼──► add_multiple_items(p, count)             │
//! │  remove_all(p) ───────────┘          │                                  │
//! │                                      ▼                                  │
//! │                          validate (NotInCart, InsufficientQuantity)     │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                          write new quantity, drop key if it is 0        │
//! │                                                                         │
//! │  NOTE: validation runs before the single write, so a failed call        │
//! │        leaves the cart exactly as it was.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing
//! ```text
//! gross_price    = Σ quantity × unit_price                 (unrounded)
//! total_discount = Σ rule.price_discounted(quantity)       (unrounded)
//! sales_tax      = round2(gross_price × sales_tax_rate)
//! total_price    = round2(gross_price − total_discount + sales_tax)
//! ```
//! Nothing is cached; every query recomputes from the current line items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::discount::LineLevelDiscount;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, TaxRate};
use crate::validation::validate_removal_count;
use crate::MAX_GROSS_PRICE;

/// A shopping cart.
///
/// ## Invariants
/// - Every stored quantity is strictly positive
/// - At most one discount rule per product
/// - Line items are ordered by product (name, then price)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    line_items: BTreeMap<Product, i64>,
    sales_tax_rate: TaxRate,
    line_level_discounts: BTreeMap<Product, LineLevelDiscount>,
}

impl ShoppingCart {
    /// Creates an empty cart with a zero sales tax rate.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Creates an empty cart with the given sales tax rate.
    pub fn with_sales_tax_rate(rate: TaxRate) -> Self {
        ShoppingCart {
            sales_tax_rate: rate,
            ..ShoppingCart::default()
        }
    }

    /// Starts a builder for a pre-seeded cart.
    pub fn builder() -> CartBuilder {
        CartBuilder::default()
    }

    // -------------------------------------------------------------------------
    // Tax rate
    // -------------------------------------------------------------------------

    pub fn sales_tax_rate(&self) -> TaxRate {
        self.sales_tax_rate
    }

    pub fn set_sales_tax_rate(&mut self, rate: TaxRate) {
        debug!(rate = %rate.as_decimal(), "Setting sales tax rate");
        self.sales_tax_rate = rate;
    }

    // -------------------------------------------------------------------------
    // Quantity mutation
    // -------------------------------------------------------------------------

    /// Adjusts the quantity of `product` by `count`.
    ///
    /// This is the only function that writes line items; every other
    /// mutator calls it. A negative `count` removes units.
    ///
    /// ## Errors
    /// - [`CoreError::NotInCart`] when removing a product the cart does not hold
    /// - [`CoreError::InsufficientQuantity`] when removing more than is held
    /// - [`CoreError::InvalidArgument`] when the new quantity, the cart's
    ///   total units, or its gross price would pass their limits
    ///   (`i64::MAX` units, [`MAX_GROSS_PRICE`])
    pub fn add_multiple_items(&mut self, product: &Product, count: i64) -> CoreResult<()> {
        let current = self.quantity_of(product);

        if count < 0 {
            if current == 0 {
                return Err(CoreError::NotInCart {
                    product: product.to_string(),
                });
            }
            if count + current < 0 {
                return Err(CoreError::InsufficientQuantity {
                    product: product.to_string(),
                    available: current,
                    requested: count.unsigned_abs(),
                });
            }
        }

        let quantity = current
            .checked_add(count)
            .ok_or_else(|| CoreError::InvalidArgument {
                argument: "count".to_string(),
                reason: format!("adding {} to {} overflows", count, current),
            })?;
        self.check_limits(product, current, quantity)?;

        if quantity == 0 {
            self.line_items.remove(product);
        } else {
            self.line_items.insert(product.clone(), quantity);
        }

        debug!(
            product = %product,
            delta = count,
            quantity,
            "Updated line item"
        );
        Ok(())
    }

    /// Rejects a new quantity that would make the cart's unit count or
    /// gross price unrepresentable. Runs before the write.
    fn check_limits(&self, product: &Product, current: i64, quantity: i64) -> CoreResult<()> {
        let limit_exceeded = |what: &str| CoreError::InvalidArgument {
            argument: "count".to_string(),
            reason: format!("{} of {} would exceed the cart limit", what, product),
        };

        // the stored total always fits, so removing `current` cannot overflow
        (self.total_quantity() - current)
            .checked_add(quantity)
            .ok_or_else(|| limit_exceeded("total units"))?;

        let unit_price = product.unit_price();
        let line_price = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| limit_exceeded("line price"))?;
        let gross = (self.gross_price() - unit_price * current)
            .checked_add(line_price)
            .ok_or_else(|| limit_exceeded("gross price"))?;
        if gross > MAX_GROSS_PRICE {
            return Err(limit_exceeded("gross price"));
        }
        Ok(())
    }

    /// Adds one unit of `product`.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        self.add_multiple_items(product, 1)
    }

    /// Removes `count` units of `product`; `count` must be positive.
    pub fn remove_multiple_items(&mut self, product: &Product, count: i64) -> CoreResult<()> {
        validate_removal_count(count)?;
        self.add_multiple_items(product, -count)
    }

    /// Removes every unit of `product`. A no-op if the cart holds none.
    pub fn remove_all(&mut self, product: &Product) -> CoreResult<()> {
        let current = self.quantity_of(product);
        self.add_multiple_items(product, -current)
    }

    /// Removes every line item. Discount rules and the tax rate are kept.
    pub fn clear(&mut self) -> CoreResult<()> {
        debug!(items = self.line_items.len(), "Clearing cart");
        let products: Vec<Product> = self.line_items.keys().cloned().collect();
        for product in &products {
            self.remove_all(product)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Discount rules
    // -------------------------------------------------------------------------

    /// Attaches a rule, returning the rule it replaced for the same product.
    pub fn add_discount(&mut self, discount: LineLevelDiscount) -> Option<LineLevelDiscount> {
        debug!(
            product = %discount.product(),
            buy = discount.buy_this_many(),
            free = discount.get_this_many_free(),
            "Attaching line level discount"
        );
        self.line_level_discounts
            .insert(discount.product().clone(), discount)
    }

    pub fn remove_discount(&mut self, product: &Product) -> Option<LineLevelDiscount> {
        self.line_level_discounts.remove(product)
    }

    pub fn discount_for(&self, product: &Product) -> Option<&LineLevelDiscount> {
        self.line_level_discounts.get(product)
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// True when the cart holds at least one unit of `product`.
    pub fn contains(&self, product: &Product) -> bool {
        self.quantity_of(product) > 0
    }

    /// Units of `product` in the cart, 0 when absent.
    pub fn quantity_of(&self, product: &Product) -> i64 {
        self.line_items.get(product).copied().unwrap_or(0)
    }

    /// Number of distinct line items (not units).
    pub fn count(&self) -> usize {
        self.line_items.len()
    }

    /// Total units across all line items.
    ///
    /// `add_multiple_items` refuses any write that would push this past
    /// `i64::MAX`, so the sum cannot overflow.
    pub fn total_quantity(&self) -> i64 {
        self.line_items.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Line items in product order.
    pub fn line_items(&self) -> impl Iterator<Item = (&Product, i64)> + '_ {
        self.line_items.iter().map(|(product, qty)| (product, *qty))
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Sum of quantity × unit price, before discount or tax. Unrounded.
    pub fn gross_price(&self) -> Money {
        self.line_items
            .iter()
            .map(|(product, qty)| product.unit_price() * *qty)
            .sum()
    }

    /// Value of all free units earned by attached rules. Unrounded.
    pub fn total_discount(&self) -> Money {
        self.line_level_discounts
            .iter()
            .map(|(product, rule)| rule.price_discounted(self.quantity_of(product)))
            .sum()
    }

    pub fn has_any_discounts(&self) -> bool {
        self.total_discount().is_positive()
    }

    /// Tax on the gross price, rounded half-up to the cent.
    pub fn sales_tax(&self) -> Money {
        self.gross_price().calculate_tax(self.sales_tax_rate)
    }

    /// Gross price minus discount plus the already rounded tax, rounded again.
    pub fn total_price(&self) -> Money {
        (self.gross_price() - self.total_discount() + self.sales_tax()).rounded()
    }

    /// Snapshot of every derived figure.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds a cart that starts with line items and discount rules.
///
/// Seeded line items go through [`ShoppingCart::add_multiple_items`], so a
/// zero count seeds nothing and a negative count is rejected.
///
/// ## Example
/// ```rust
/// use basket_core::{LineLevelDiscount, Product, ShoppingCart, TaxRate};
///
/// let soap = Product::new("Dove Soap", "1.00").unwrap();
/// let cart = ShoppingCart::builder()
///     .sales_tax_rate(TaxRate::parse("0.1").unwrap())
///     .line_item(soap.clone(), 3)
///     .discount(LineLevelDiscount::new(soap.clone(), 2, 1).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(cart.quantity_of(&soap), 3);
/// assert!(cart.has_any_discounts());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CartBuilder {
    sales_tax_rate: TaxRate,
    line_items: Vec<(Product, i64)>,
    discounts: Vec<LineLevelDiscount>,
}

impl CartBuilder {
    pub fn sales_tax_rate(mut self, rate: TaxRate) -> Self {
        self.sales_tax_rate = rate;
        self
    }

    pub fn line_item(mut self, product: Product, count: i64) -> Self {
        self.line_items.push((product, count));
        self
    }

    pub fn discount(mut self, discount: LineLevelDiscount) -> Self {
        self.discounts.push(discount);
        self
    }

    pub fn build(self) -> CoreResult<ShoppingCart> {
        let mut cart = ShoppingCart::with_sales_tax_rate(self.sales_tax_rate);
        for (product, count) in &self.line_items {
            cart.add_multiple_items(product, *count)?;
        }
        for discount in self.discounts {
            cart.add_discount(discount);
        }
        Ok(cart)
    }
}

// =============================================================================
// Totals Snapshot
// =============================================================================

/// Cart totals summary for callers that report on a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub gross_price: Money,
    pub total_discount: Money,
    pub sales_tax: Money,
    pub total_price: Money,
}

impl From<&ShoppingCart> for CartTotals {
    fn from(cart: &ShoppingCart) -> Self {
        CartTotals {
            item_count: cart.count(),
            total_quantity: cart.total_quantity(),
            gross_price: cart.gross_price(),
            total_discount: cart.total_discount(),
            sales_tax: cart.sales_tax(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
