//! Cart rendering.

use std::io::{self, Write};

use storefront::cart::Cart;
use storefront_app::notifications::Notification;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Write `cart` as a table, one row per line plus a totals row.
pub(crate) fn write_cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Cart is empty");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Product", "Price", "Amount", "Subtotal"]);

    for product in cart {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.price.to_string(),
            product.amount.to_string(),
            product.subtotal().to_string(),
        ]);
    }

    builder.push_record([
        String::new(),
        "Total".to_string(),
        String::new(),
        cart.total_items().to_string(),
        cart.subtotal().to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")
}

/// Write a failure notification the way a user should see it.
pub(crate) fn write_notification(
    out: &mut impl Write,
    notification: &Notification,
) -> io::Result<()> {
    writeln!(out, "error: {}", notification.message)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront::products::{ProductDetails, ProductId};
    use storefront_app::notifications::NotificationKind;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_cart_renders_placeholder() -> TestResult {
        let mut out = Vec::new();

        write_cart(&mut out, &Cart::new())?;

        assert_eq!(String::from_utf8(out)?, "Cart is empty\n");

        Ok(())
    }

    #[test]
    fn cart_renders_lines_and_totals() -> TestResult {
        let cart = Cart::try_from(vec![
            ProductDetails {
                id: ProductId::new(1),
                title: "Trail runner".to_string(),
                price: Decimal::new(1999, 1),
                image: String::new(),
            }
            .into_product(2),
        ])?;

        let mut out = Vec::new();

        write_cart(&mut out, &cart)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Trail runner"), "missing title in {rendered}");
        assert!(rendered.contains("399.8"), "missing subtotal in {rendered}");
        assert!(rendered.contains("Total"), "missing totals row in {rendered}");

        Ok(())
    }

    #[test]
    fn notification_renders_fixed_message() -> TestResult {
        let mut out = Vec::new();

        write_notification(&mut out, &NotificationKind::RemoveProductFailed.into())?;

        assert_eq!(String::from_utf8(out)?, "error: Failed to remove product\n");

        Ok(())
    }
}
