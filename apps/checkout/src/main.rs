//! # Basket Checkout
//!
//! Runs one checkout over basket-core and prints the result.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `BASKET_*` environment variables
//! 3. Build the cart, attach discounts, adjust quantities
//! 4. Print the receipt and/or the totals snapshot
//!
//! ## Usage
//! ```bash
//! BASKET_SALES_TAX_RATE=0.105 RUST_LOG=debug cargo run -p basket-checkout
//! ```

mod config;

use basket_core::{LineLevelDiscount, Product, ShoppingCart};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CheckoutConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = CheckoutConfig::load()?;
    info!(
        sales_tax_rate = %config.sales_tax_rate.as_decimal(),
        print_receipt = config.print_receipt,
        "Configuration loaded"
    );

    let cart = run_checkout(&config)?;
    let totals = cart.totals();
    info!(
        items = totals.item_count,
        quantity = totals.total_quantity,
        total = %totals.total_price,
        "Checkout complete"
    );

    if config.print_receipt {
        print!("{}", cart);
    }
    if config.print_totals_json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    }

    Ok(())
}

/// Builds the demo cart: soap on a buy-2-get-1 offer plus deodorant.
fn run_checkout(config: &CheckoutConfig) -> basket_core::CoreResult<ShoppingCart> {
    let dove = Product::new("Dove Soap", "39.99")?;
    let axe = Product::new("Axe Deo", "99.99")?;

    let mut cart = ShoppingCart::builder()
        .sales_tax_rate(config.sales_tax_rate)
        .discount(LineLevelDiscount::new(dove.clone(), 2, 1)?)
        .build()?;

    cart.add_multiple_items(&dove, 5)?;
    cart.add_multiple_items(&axe, 2)?;
    cart.remove_multiple_items(&dove, 2)?;

    Ok(cart)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart mutation
/// - Default: INFO, with debug for the basket crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
