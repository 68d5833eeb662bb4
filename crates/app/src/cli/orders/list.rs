use lavanya_app::context::AppContext;

use crate::cli::render::{emit, orders_table};

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let orders = context
        .orders
        .list_orders()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        return emit("No orders yet.");
    }

    emit(orders_table(&orders))
}
