use lavanya::access::RouteClass;
use lavanya_app::context::AppContext;

use crate::cli::render::{emit, orders_table};

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let identity = context
        .access
        .require(RouteClass::Authenticated)
        .map_err(|error| error.to_string())?
        .ok_or_else(|| "please sign in to continue".to_string())?;

    emit(format!("user_id: {}", identity.uid))?;
    emit(format!(
        "name: {}",
        identity.display_name.as_deref().unwrap_or("-")
    ))?;
    emit(format!("email: {}", identity.email.as_deref().unwrap_or("-")))?;

    let orders = context
        .orders
        .list_orders_for(&identity.uid)
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        return emit("No orders yet.");
    }

    emit(orders_table(&orders))
}
