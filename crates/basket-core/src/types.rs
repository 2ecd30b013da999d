//! # Domain Types
//!
//! The two leaf value types of the cart model.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────┐        ┌─────────────────────────┐         │
//! │  │        Product          │        │        TaxRate          │         │
//! │  │  ─────────────────────  │        │  ─────────────────────  │         │
//! │  │  name        (String)   │        │  rate (Decimal)         │         │
//! │  │  unit_price  (Money,    │        │  0.125 = 12.5%          │         │
//! │  │               2 digits) │        │                         │         │
//! │  └─────────────────────────┘        └─────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Identity
//! A `Product` has no id: two products are the same product when both the
//! name and the rounded unit price match. That pair is what keys the
//! cart's line items and discount rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::{IntoMoney, Money};
use crate::validation::{validate_price, validate_tax_rate};

// =============================================================================
// Tax Rate
// =============================================================================

/// Sales tax rate as a dimensionless fraction.
///
/// ## Why Not Basis Points?
/// Rates such as 10.499% (0.10499) need more than four fractional digits,
/// so the rate keeps the full decimal the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a tax rate from a fraction, rejecting negative rates.
    pub fn new(rate: Decimal) -> CoreResult<Self> {
        validate_tax_rate(rate)?;
        Ok(TaxRate(rate))
    }

    /// Parses a fraction such as `"0.125"`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::types::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = TaxRate::parse("0.125").unwrap();
    /// assert_eq!(rate.percentage(), Decimal::new(125, 1));
    /// assert!(TaxRate::parse("twelve").is_err());
    /// ```
    pub fn parse(input: &str) -> CoreResult<Self> {
        let rate = Decimal::from_str(input.trim()).map_err(|e| CoreError::InvalidTaxRate {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        TaxRate::new(rate)
    }

    /// Creates a tax rate from basis points (825 = 8.25%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(Decimal::new(i64::from(bps), 4))
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl FromStr for TaxRate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxRate::parse(s)
    }
}

// =============================================================================
// Product
// =============================================================================

/// An immutable product: a name and a unit price rounded to the cent.
///
/// Field order matters for the derived `Ord`: products sort by name, then
/// by price, which fixes the order of receipt rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product {
    name: String,
    unit_price: Money,
}

impl Product {
    /// Creates a product, rounding the price half-up to two digits.
    ///
    /// Fails with [`CoreError::InvalidPrice`] when the price is not a
    /// number or is negative.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use basket_core::types::Product;
    ///
    /// let dove = Product::new("Dove Soap", "39.99").unwrap();
    /// assert_eq!(dove.unit_price(), Money::from_cents(3999));
    ///
    /// let rounded = Product::new("Gum", "1.005").unwrap();
    /// assert_eq!(rounded.unit_price(), Money::from_cents(101));
    /// ```
    pub fn new(name: impl Into<String>, price: impl IntoMoney) -> CoreResult<Self> {
        let unit_price = price.into_money()?.rounded();
        validate_price(unit_price)?;
        Ok(Product {
            name: name.into(),
            unit_price,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

/// Renders as `"<name> <price>"`, the form used in error messages.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.unit_price.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_create_product_ok() {
        let names = ["my item", "a", "looooooooooooooooooooooong striiiiiiiiiiiing"];
        for name in names {
            assert_eq!(
                Product::new(name, "12.34").unwrap().unit_price(),
                Money::from_cents(1234)
            );
            assert_eq!(
                Product::new(name, 5.01).unwrap().unit_price(),
                Money::from_cents(501)
            );
            assert_eq!(
                Product::new(name, 2).unwrap().unit_price(),
                Money::from_cents(200)
            );
            let product = Product::new(name, dec!(4.87)).unwrap();
            assert_eq!(product.name(), name);
            assert_eq!(product.unit_price(), Money::from_cents(487));
        }
    }

    #[test]
    fn test_price_rounds_half_up_at_construction() {
        let product = Product::new("Gum", "0.105").unwrap();
        assert_eq!(product.unit_price(), Money::from_cents(11));
        assert_eq!(product.unit_price().amount().scale(), 2);

        // a float price rounds as it prints, not as its binary expansion
        let product = Product::new("Gum", 1.005f64).unwrap();
        assert_eq!(product.unit_price(), Money::from_cents(101));
    }

    #[test]
    fn test_invalid_price() {
        assert!(matches!(
            Product::new("Soap", "not a price"),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Product::new("Soap", "-1.00"),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Product::new("Soap", f64::NAN),
            Err(CoreError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_product_equality() {
        let dove = Product::new("dove", dec!(39.99)).unwrap();
        let dove_copy = Product::new("dove", "39.990").unwrap();
        assert_eq!(dove, dove_copy);

        assert_ne!(dove, Product::new("dove", dec!(10.00)).unwrap());
        assert_ne!(dove, Product::new("not dove", dec!(39.99)).unwrap());
        assert_ne!(dove, Product::new("not dove", dec!(10.00)).unwrap());
    }

    #[test]
    fn test_equal_products_collapse_to_one_key() {
        let mut set = HashSet::new();
        set.insert(Product::new("dove", "39.99").unwrap());
        set.insert(Product::new("dove", 39.99).unwrap());
        set.insert(Product::new("dove", "39.994").unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_product_display() {
        let dove = Product::new("Dove Soap", "39.99").unwrap();
        assert_eq!(dove.to_string(), "Dove Soap 39.99");
    }

    #[test]
    fn test_tax_rate() {
        let rate = TaxRate::parse("0.125").unwrap();
        assert_eq!(rate.as_decimal(), dec!(0.125));
        assert_eq!(rate.percentage(), dec!(12.5));
        assert_eq!(TaxRate::from_bps(825).as_decimal(), dec!(0.0825));
        assert!(TaxRate::default().is_zero());
        assert_eq!("0.1".parse::<TaxRate>().unwrap(), TaxRate::new(dec!(0.1)).unwrap());
    }

    #[test]
    fn test_tax_rate_rejects_negative_and_garbage() {
        assert!(matches!(
            TaxRate::parse("-0.05"),
            Err(CoreError::InvalidTaxRate { .. })
        ));
        assert!(matches!(
            TaxRate::parse("abc"),
            Err(CoreError::InvalidTaxRate { .. })
        ));
    }
}
