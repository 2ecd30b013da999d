//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CoreError                                       │
//! │                                                                         │
//! │  Construction                     Cart mutation                        │
//! │  ├── InvalidPrice                 ├── NotInCart                        │
//! │  ├── InvalidTaxRate               ├── InsufficientQuantity             │
//! │  └── InvalidDiscount              └── InvalidArgument                  │
//! │                                                                         │
//! │  All variants are caller-input violations: never transient, never      │
//! │  retried. A failed mutation leaves the cart untouched.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, counts)
//! 3. Errors are enum variants, never String, so callers can `match`

use thiserror::Error;

/// Pricing and cart errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A supplied price is not a non-negative decimal number.
    #[error("Invalid price '{input}': {reason}")]
    InvalidPrice { input: String, reason: String },

    /// A supplied sales tax rate is not a decimal fraction between 0 and 1.
    #[error("Invalid sales tax rate '{input}': {reason}")]
    InvalidTaxRate { input: String, reason: String },

    /// A bulk discount rule cannot be built from the given counts.
    #[error("Invalid discount for {product}: {reason}")]
    InvalidDiscount { product: String, reason: String },

    /// Removal was requested for a product with no units in the cart.
    #[error("Product {product} is not in the cart")]
    NotInCart { product: String },

    /// Removal was requested for more units than the cart holds.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart holds 1 × Soap
    ///      │
    ///      ▼
    /// remove_multiple_items(Soap, 10)
    ///      │
    ///      ▼
    /// InsufficientQuantity { product: "Soap", available: 1, requested: 10 }
    ///      │
    ///      ▼
    /// Cart still holds 1 × Soap
    /// ```
    #[error("Only {available} of {product} in the cart; cannot remove {requested}")]
    InsufficientQuantity {
        product: String,
        available: i64,
        requested: u64,
    },

    /// A count argument is outside the range the operation accepts.
    #[error("Invalid {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
