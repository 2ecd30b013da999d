//! # Validation Module
//!
//! Input checks shared by the constructors and the cart.
//!
//! ## Where Each Check Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product::new ─────────────► validate_price                             │
//! │  TaxRate::new / parse ─────► validate_tax_rate                          │
//! │  LineLevelDiscount::new ───► validate_discount_rule                     │
//! │  remove_multiple_items ────► validate_removal_count                     │
//! │                                                                         │
//! │  Every check runs BEFORE any state is written, so a rejected call      │
//! │  never leaves a half-applied mutation behind.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Validates a unit price.
///
/// ## Rules
/// - Must be zero or positive
///
/// ## Example
/// ```rust
/// use basket_core::money::Money;
/// use basket_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(0)).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice {
            input: price.amount().to_string(),
            reason: "price must not be negative".to_string(),
        });
    }
    Ok(())
}

/// Validates a sales tax rate expressed as a fraction (0.125 = 12.5%).
///
/// ## Rules
/// - Must be zero or positive
/// - Must not exceed 1 (100%)
pub fn validate_tax_rate(rate: Decimal) -> CoreResult<()> {
    if rate < Decimal::ZERO {
        return Err(CoreError::InvalidTaxRate {
            input: rate.to_string(),
            reason: "rate must not be negative".to_string(),
        });
    }
    if rate > Decimal::ONE {
        return Err(CoreError::InvalidTaxRate {
            input: rate.to_string(),
            reason: "rate is a fraction and must not exceed 1".to_string(),
        });
    }
    Ok(())
}

/// Validates the count passed to a removal.
///
/// ## Rules
/// - Must be strictly positive; negative adjustments go through
///   `add_multiple_items` instead
pub fn validate_removal_count(count: i64) -> CoreResult<()> {
    if count <= 0 {
        return Err(CoreError::InvalidArgument {
            argument: "count".to_string(),
            reason: format!(
                "cannot remove {} items; use add_multiple_items for adjustments",
                count
            ),
        });
    }
    Ok(())
}

/// Validates a "buy N get M free" rule.
///
/// ## Rules
/// - `buy_this_many` must be at least 1
/// - `get_this_many_free` may be 0 (a rule that never discounts)
pub fn validate_discount_rule(product: &str, buy_this_many: u32) -> CoreResult<()> {
    if buy_this_many == 0 {
        return Err(CoreError::InvalidDiscount {
            product: product.to_string(),
            reason: "buy_this_many must be at least 1".to_string(),
        });
    }
    Ok(())
}
