//! # Line Level Discounts
//!
//! "Buy N get M free" bulk discounts attached to a single product.
//!
//! ## How Free Units Are Counted
//! ```text
//! Rule: buy 2 get 1 free  →  threshold = 3
//!
//!   n = 8:   [■ ■ □] [■ ■ □] [■ ■]
//!             group    group   remainder (2 ≤ buy, contributes 0)
//!
//!   free = full_groups × get_free + max(0, remainder − buy)
//!        =      2      ×    1     +        0              = 2
//!
//!   ■ paid unit   □ free unit
//! ```
//!
//! A trailing partial group only earns free units once it reaches past the
//! paid part of the group, which can only happen when `get_this_many_free`
//! is greater than one.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_discount_rule;

/// A bulk discount rule for one product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineLevelDiscount {
    product: Product,
    buy_this_many: u32,
    get_this_many_free: u32,
}

impl LineLevelDiscount {
    /// Creates a rule, rejecting `buy_this_many == 0`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{LineLevelDiscount, Product};
    ///
    /// let soap = Product::new("Dove Soap", "1.00").unwrap();
    /// let rule = LineLevelDiscount::new(soap, 2, 1).unwrap();
    /// assert_eq!(rule.threshold(), 3);
    /// assert_eq!(rule.quantity_discounted(3), 1);
    /// ```
    pub fn new(product: Product, buy_this_many: u32, get_this_many_free: u32) -> CoreResult<Self> {
        validate_discount_rule(product.name(), buy_this_many)?;
        Ok(LineLevelDiscount {
            product,
            buy_this_many,
            get_this_many_free,
        })
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn buy_this_many(&self) -> u32 {
        self.buy_this_many
    }

    #[inline]
    pub fn get_this_many_free(&self) -> u32 {
        self.get_this_many_free
    }

    /// Size of the group over which the free-unit ratio repeats.
    #[inline]
    pub fn threshold(&self) -> i64 {
        i64::from(self.buy_this_many) + i64::from(self.get_this_many_free)
    }

    /// Number of free units when `n_purchased` units are in the cart.
    pub fn quantity_discounted(&self, n_purchased: i64) -> i64 {
        if n_purchased <= 0 {
            return 0;
        }
        let threshold = self.threshold();
        let full_groups = n_purchased / threshold;
        let remainder = n_purchased % threshold;
        let partial = (remainder - i64::from(self.buy_this_many)).max(0);
        full_groups * i64::from(self.get_this_many_free) + partial
    }

    /// Value of the free units, unrounded.
    pub fn price_discounted(&self, n_purchased: i64) -> Money {
        self.product.unit_price() * self.quantity_discounted(n_purchased)
    }
}
