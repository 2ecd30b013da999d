//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    1.00 × 0.105 = 0.10499999999999999  → rounds to 0.10  ❌ WRONG!      │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                    │
//! │    1.00 × 0.105 = 0.10500 exactly      → rounds to 0.11  ✅             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Points
//! Arithmetic between `Money` values runs at full precision. Rounding
//! happens only where a value is finalized:
//! - unit price, when a `Product` is constructed
//! - sales tax, in [`Money::calculate_tax`]
//! - total price, in the cart
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2;             // $21.98
//! let total = price + Money::from_cents(500);
//! assert_eq!(total, Money::from_cents(1599));
//! assert_eq!(doubled.to_string(), "$21.98");
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::TaxRate;
use crate::MONEY_SCALE;

/// Rounds to two fractional digits, ties away from zero (0.105 → 0.11).
///
/// The result always carries exactly two fractional digits, so `1` comes
/// back as `1.00`.
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount backed by an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not f64**: halfway values such as 0.105 stay exact
/// - **Signed**: the gap between gross price and discount is a `Money` too
/// - **No implicit rounding**: operators keep full precision, callers
///   finalize with [`Money::rounded`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount as-is (no rounding).
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(3999);
    /// assert_eq!(price.amount(), Decimal::new(3999, 2));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Parses a decimal string such as `"39.99"`.
    ///
    /// Fails with [`CoreError::InvalidPrice`] when the text is not a number.
    pub fn parse(input: &str) -> CoreResult<Self> {
        Decimal::from_str(input.trim())
            .map(Money)
            .map_err(|e| CoreError::InvalidPrice {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Finalizes the amount to exactly two fractional digits (half-up).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let raw = Money::new(Decimal::new(105, 3)); // 0.105
    /// assert_eq!(raw.rounded(), Money::from_cents(11));
    /// ```
    #[inline]
    pub fn rounded(&self) -> Self {
        Money(round2(self.0))
    }

    /// Calculates tax on this amount, rounded half-up to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use basket_core::types::TaxRate;
    ///
    /// let gross = Money::from_cents(27996); // $279.96
    /// let rate = TaxRate::parse("0.125").unwrap();
    ///
    /// // $279.96 × 12.5% = $34.995 → $35.00
    /// assert_eq!(gross.calculate_tax(rate), Money::from_cents(3500));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(round2(self.0 * rate.as_decimal()))
    }

    /// Multiplies money by a quantity, keeping full precision.
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Like [`Money::multiply_quantity`], but `None` when the result does
    /// not fit in a `Decimal`.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount as `$12.34` / `-$5.50`, always with two fractional
/// digits. Width and alignment flags are honoured so the value can sit in a
/// fixed-width column.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}${}", sign, round2(self.0.abs()));
        f.pad(&text)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Price Conversions
// =============================================================================

/// Anything a caller may hand in as a price.
///
/// Strings are parsed and integers are exact. A float is read as the
/// shortest decimal that prints back to the same float, so `1.005_f64`
/// means 1.005 (and rounds to 1.01), not its binary expansion
/// 1.00499999999999989… NaN and infinities are refused.
pub trait IntoMoney {
    fn into_money(self) -> CoreResult<Money>;
}

impl IntoMoney for Money {
    fn into_money(self) -> CoreResult<Money> {
        Ok(self)
    }
}

impl IntoMoney for Decimal {
    fn into_money(self) -> CoreResult<Money> {
        Ok(Money(self))
    }
}

impl IntoMoney for &str {
    fn into_money(self) -> CoreResult<Money> {
        Money::parse(self)
    }
}

impl IntoMoney for String {
    fn into_money(self) -> CoreResult<Money> {
        Money::parse(&self)
    }
}

impl IntoMoney for i32 {
    fn into_money(self) -> CoreResult<Money> {
        Ok(Money(Decimal::from(self)))
    }
}

impl IntoMoney for i64 {
    fn into_money(self) -> CoreResult<Money> {
        Ok(Money(Decimal::from(self)))
    }
}

impl IntoMoney for u32 {
    fn into_money(self) -> CoreResult<Money> {
        Ok(Money(Decimal::from(self)))
    }
}

impl IntoMoney for f64 {
    fn into_money(self) -> CoreResult<Money> {
        // f64 Display is the shortest round-trip form; "NaN"/"inf" fail to parse
        Money::parse(&self.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
