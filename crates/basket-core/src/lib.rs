//! # basket-core: Pure Pricing Logic for Basket
//!
//! This crate holds the whole shopping cart model: products, bulk
//! discounts, quantity bookkeeping and the rounding policy that turns them
//! into a gross price, a discount, a sales tax and a total.
//!
//! ## Component Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          basket-core                                    │
//! │                                                                         │
//! │   ┌───────────┐   ┌────────────────────┐   ┌──────────────────────┐    │
//! │   │   money   │   │       types        │   │       discount       │    │
//! │   │   Money   │◄──│  Product, TaxRate  │◄──│  LineLevelDiscount   │    │
//! │   │  round2   │   └─────────┬──────────┘   └──────────┬───────────┘    │
//! │   └───────────┘             │                         │                │
//! │                             ▼                         ▼                │
//! │                   ┌──────────────────────────────────────────┐         │
//! │                   │                 cart                     │         │
//! │                   │  ShoppingCart: line items + discounts    │         │
//! │                   │  receipt: fixed-width textual dump       │         │
//! │                   └──────────────────────────────────────────┘         │
//! │                                                                         │
//! │   NO I/O • NO PERSISTENCE • NO FLOATING POINT MONEY                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Every monetary value is an exact decimal. Values are rounded to two
//! fractional digits (half away from zero) only at three points: unit price
//! construction, sales tax, and total price. The gross price and discount
//! amounts stay at full precision until they are folded into the total.
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Product, ShoppingCart, TaxRate};
//! use rust_decimal::Decimal;
//!
//! let dove = Product::new("Dove Soap", "39.99").unwrap();
//! let axe = Product::new("Axe Deo", "99.99").unwrap();
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_multiple_items(&dove, 2).unwrap();
//! cart.add_multiple_items(&axe, 2).unwrap();
//! cart.set_sales_tax_rate(TaxRate::parse("0.125").unwrap());
//!
//! assert_eq!(cart.sales_tax().amount(), Decimal::new(3500, 2));
//! assert_eq!(cart.total_price().amount(), Decimal::new(31496, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartBuilder, CartTotals, ShoppingCart};
pub use discount::LineLevelDiscount;
pub use error::{CoreError, CoreResult};
pub use money::{round2, IntoMoney, Money};
pub use types::{Product, TaxRate};

use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of fractional digits every finalized monetary value carries.
pub const MONEY_SCALE: u32 = 2;

/// Largest gross price a cart may reach: 10^24.
///
/// ## Business Reason
/// Far beyond any real checkout, yet small enough that the tax, the
/// total and their two-digit rounding all stay inside `Decimal` range.
/// `add_multiple_items` refuses any change that would pass it.
pub const MAX_GROSS_PRICE: Money =
    Money::new(Decimal::from_parts(2_701_131_776, 466_537_709, 54_210, false, 0));
