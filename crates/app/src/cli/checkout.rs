use clap::Args;
use lavanya::{
    billing::{BillingDetails, PaymentMethod},
    pricing::format_taka,
};
use lavanya_app::context::AppContext;

use crate::cli::render::emit;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Full name for delivery
    #[arg(long)]
    name: String,

    /// Contact phone number
    #[arg(long)]
    phone: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Payment method (cod, bkash)
    #[arg(long, default_value = "cod")]
    payment_method: PaymentMethod,

    /// `bKash` transaction id, required for `bKash` payments
    #[arg(long)]
    transaction_id: Option<String>,
}

pub(crate) async fn run(args: CheckoutArgs, context: &AppContext) -> Result<(), String> {
    let mut cart = context.load_cart();

    let billing = BillingDetails {
        name: args.name,
        phone: args.phone,
        address: args.address,
        payment_method: args.payment_method,
        transaction_id: args.transaction_id,
    };

    let outcome = context
        .checkout
        .submit(&mut cart, billing)
        .await
        .map_err(|error| error.user_message())?;

    emit(outcome.message())?;
    emit(format!("order_id: {}", outcome.order.order_id))?;
    emit(format!("total: {}", format_taka(outcome.order.total)))
}
