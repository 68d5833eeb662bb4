//! Table rendering for command output.

use std::io::{self, Write};

use lavanya::{
    cart::Cart,
    catalog::Product,
    orders::OrderRecord,
    pricing::{Totals, format_taka},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

pub(crate) fn cart_table(cart: &Cart, totals: Totals) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Item", "Category", "Price", "Qty", "Line Total"]);

    for item in cart.items() {
        builder.push_record([
            item.id.to_string(),
            item.name.clone(),
            item.category.clone(),
            format_taka(item.price),
            item.quantity().to_string(),
            format_taka(item.line_total()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..6), Alignment::right());

    format!(
        "{table}\nSubtotal: {}\nDelivery: {}\nTotal:    {}",
        format_taka(totals.subtotal),
        format_taka(totals.delivery_charge),
        format_taka(totals.total),
    )
}

pub(crate) fn products_table(products: &[Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Category", "Price"]);

    for product in products {
        builder.push_record([
            product.id.clone(),
            product.name.clone(),
            product.category.clone(),
            format_taka(product.price),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());

    table.to_string()
}

pub(crate) fn orders_table(orders: &[OrderRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Order", "Placed", "Customer", "Payment", "Total", "Status"]);

    for order in orders {
        builder.push_record([
            order.order_id.to_string(),
            order.created_at.strftime("%Y-%m-%d %H:%M").to_string(),
            order.customer.name.clone(),
            order.customer.payment_method.label().to_string(),
            format_taka(order.total),
            order.status.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(4..5), Alignment::right());

    table.to_string()
}

/// Write command output to stdout.
pub(crate) fn emit(text: impl AsRef<str>) -> Result<(), String> {
    writeln!(io::stdout().lock(), "{}", text.as_ref())
        .map_err(|error| format!("failed to write output: {error}"))
}

#[cfg(test)]
mod tests {
    use lavanya::items::{ItemId, NewCartItem};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn cart_table_lists_lines_and_totals() {
        let mut cart = Cart::new();
        cart.add_item(NewCartItem {
            id: ItemId::from(1),
            name: "Matte Lipstick".to_string(),
            price: Decimal::from(450),
            category: "Makeup".to_string(),
            image: String::new(),
        });

        let rendered = cart_table(&cart, Totals::for_cart(&cart, Decimal::from(60)));

        assert!(rendered.contains("Matte Lipstick"), "missing item row");
        assert!(rendered.contains("Total:"), "missing totals");
        assert!(rendered.contains("510"), "missing grand total");
    }

    #[test]
    fn products_table_lists_every_product() {
        let products = [Product {
            id: "p-1".to_string(),
            name: "Rose Toner".to_string(),
            price: Decimal::from(1250),
            category: "Skin".to_string(),
            image: String::new(),
            description: String::new(),
            created_at: None,
        }];

        let rendered = products_table(&products);

        assert!(rendered.contains("Rose Toner"), "missing product row");
        assert!(rendered.contains("Skin"), "missing category");
    }
}
