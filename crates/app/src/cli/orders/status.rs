use clap::Args;
use lavanya::orders::{OrderId, OrderStatus};
use lavanya_app::context::AppContext;

use crate::cli::render::emit;

#[derive(Debug, Args)]
pub(crate) struct UpdateStatusArgs {
    /// Order id, e.g. ORD-1700000000000
    order_id: String,

    /// New status (pending, processing, shipped, delivered, cancelled)
    status: OrderStatus,
}

pub(crate) async fn run(args: UpdateStatusArgs, context: &AppContext) -> Result<(), String> {
    let order = context
        .orders
        .update_status(&OrderId::from(args.order_id.as_str()), args.status)
        .await
        .map_err(|error| format!("failed to update order: {error}"))?;

    emit(format!("order_id: {}", order.order_id))?;
    emit(format!("status: {}", order.status))
}
