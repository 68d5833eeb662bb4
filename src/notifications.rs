//! Order notification parameters

use serde::{Deserialize, Serialize};

use crate::{items::CartItem, orders::OrderRecord, pricing::format_taka};

/// Date format used in notification summaries.
pub const ORDER_DATE_FORMAT: &str = "%d %b %Y, %H:%M UTC";

/// Flat parameter set handed to the notification template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNotification {
    /// `ORD-<millis>` order identifier
    pub order_id: String,

    /// Billing name
    pub customer_name: String,

    /// Billing phone number
    pub customer_phone: String,

    /// Delivery address
    pub customer_address: String,

    /// Grand total, formatted in Taka
    pub total_price: String,

    /// Payment method label
    pub payment_method: String,

    /// `bKash` transaction id, empty for cash on delivery
    pub transaction_id: String,

    /// Product list text, see [`product_list`]
    pub products: String,

    /// Order time, formatted with [`ORDER_DATE_FORMAT`]
    pub order_date: String,
}

impl From<&OrderRecord> for OrderNotification {
    fn from(order: &OrderRecord) -> Self {
        Self {
            order_id: order.order_id.to_string(),
            customer_name: order.customer.name.clone(),
            customer_phone: order.customer.phone.clone(),
            customer_address: order.customer.address.clone(),
            total_price: format_taka(order.total),
            payment_method: order.customer.payment_method.label().to_string(),
            transaction_id: order.customer.transaction_id.clone().unwrap_or_default(),
            products: product_list(&order.items),
            order_date: order.created_at.strftime(ORDER_DATE_FORMAT).to_string(),
        }
    }
}

/// One line per cart item: `name x quantity (line total)`.
pub fn product_list(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{} x {} ({})",
                item.name,
                item.quantity(),
                format_taka(item.line_total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
