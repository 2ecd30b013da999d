//! # Receipt Rendering
//!
//! A fixed-width textual dump of a cart for logs and terminals.
//!
//! ## Layout
//! ```text
//! ============================================================
//! Count     Name                                    Price
//! 2         Axe Deo                                 $99.99
//! 2         Dove Soap                               $39.99
//! ============================================================
//! Subtotal:   $279.96
//! Sales Tax:  $35.00
//! Total:      $314.96
//! ```
//! The `Discount:` line appears only when a rule earns free units. The
//! output is for display only and is never parsed back.

use std::fmt;

use crate::cart::ShoppingCart;

pub const COUNT_WIDTH: usize = 10;
pub const NAME_WIDTH: usize = 40;
pub const PRICE_WIDTH: usize = 10;

const SEPARATOR_WIDTH: usize = COUNT_WIDTH + NAME_WIDTH + PRICE_WIDTH;

/// Formats one left-justified receipt row.
///
/// ## Example
/// ```rust
/// use basket_core::receipt::receipt_row;
///
/// let row = receipt_row(&2, &"Soap", &"$1.00");
/// assert_eq!(row.len(), 60);
/// assert!(row.starts_with("2         Soap"));
/// ```
pub fn receipt_row(
    count: &dyn fmt::Display,
    name: &dyn fmt::Display,
    price: &dyn fmt::Display,
) -> String {
    format!(
        "{:<cw$}{:<nw$}{:<pw$}",
        count.to_string(),
        name.to_string(),
        price.to_string(),
        cw = COUNT_WIDTH,
        nw = NAME_WIDTH,
        pw = PRICE_WIDTH,
    )
}

impl fmt::Display for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "=".repeat(SEPARATOR_WIDTH);

        writeln!(f, "{}", separator)?;
        writeln!(f, "{}", receipt_row(&"Count", &"Name", &"Price"))?;
        for (product, quantity) in self.line_items() {
            writeln!(
                f,
                "{}",
                receipt_row(&quantity, &product.name(), &product.unit_price())
            )?;
        }
        writeln!(f, "{}", separator)?;

        writeln!(f, "Subtotal:\t{}", self.gross_price())?;
        if self.has_any_discounts() {
            writeln!(f, "Discount:\t-{}", self.total_discount())?;
        }
        writeln!(f, "Sales Tax:\t{}", self.sales_tax())?;
        writeln!(f, "Total:\t\t{}", self.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineLevelDiscount, Product, TaxRate};

    #[test]
    fn test_receipt_lists_items() {
        let mut cart = ShoppingCart::new();
        let dove = Product::new("Dove Soap", "39.99").unwrap();
        cart.add_item(&dove).unwrap();

        let receipt = cart.to_string();
        assert!(receipt.contains(dove.name()));
        assert!(receipt.contains("39.99"));
        assert!(receipt.contains("Total:\t\t$39.99"));
        assert!(!receipt.contains("Discount:"));
    }

    #[test]
    fn test_receipt_layout() {
        let mut cart = ShoppingCart::with_sales_tax_rate(TaxRate::parse("0.125").unwrap());
        let dove = Product::new("Dove Soap", "39.99").unwrap();
        let axe = Product::new("Axe Deo", "99.99").unwrap();
        cart.add_multiple_items(&dove, 2).unwrap();
        cart.add_multiple_items(&axe, 2).unwrap();

        let receipt = cart.to_string();
        let lines: Vec<&str> = receipt.lines().collect();
        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], format!("{:<10}{:<40}{:<10}", "Count", "Name", "Price"));
        assert_eq!(lines[2], format!("{:<10}{:<40}{:<10}", "2", "Axe Deo", "$99.99"));
        assert_eq!(lines[3], format!("{:<10}{:<40}{:<10}", "2", "Dove Soap", "$39.99"));
        assert_eq!(lines[4], "=".repeat(60));
        assert_eq!(lines[5], "Subtotal:\t$279.96");
        assert_eq!(lines[6], "Sales Tax:\t$35.00");
        assert_eq!(lines[7], "Total:\t\t$314.96");
    }

    #[test]
    fn test_receipt_shows_discount_line() {
        let mut cart = ShoppingCart::new();
        let soap = Product::new("Soap", "1.00").unwrap();
        cart.add_discount(LineLevelDiscount::new(soap.clone(), 2, 1).unwrap());
        cart.add_multiple_items(&soap, 3).unwrap();

        let receipt = cart.to_string();
        assert!(receipt.contains("Discount:\t-$1.00"));
        assert!(receipt.contains("Total:\t\t$2.00"));
    }

    #[test]
    fn test_receipt_row_pads_columns() {
        let row = receipt_row(&1, &"Gum", &"$0.99");
        assert_eq!(&row[..10], "1         ");
        assert_eq!(&row[10..13], "Gum");
        assert_eq!(row.trim_end().len(), 55);
    }
}
