use clap::{Args, Subcommand};
use lavanya::items::ItemId;
use lavanya_app::context::AppContext;

use crate::cli::render::{cart_table, emit};

mod add;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show cart lines and totals
    Show,

    /// Add one unit of a product
    Add(add::AddToCartArgs),

    /// Remove a line from the cart
    Remove {
        /// Product id of the line
        id: String,
    },

    /// Change a line's quantity by a signed amount (never below one)
    Quantity {
        /// Product id of the line
        id: String,

        /// Amount to add, e.g. 1 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },

    /// Remove every line
    Clear,
}

pub(crate) async fn run(command: CartCommand, context: &AppContext) -> Result<(), String> {
    let mut cart = context.load_cart();

    match command.command {
        CartSubcommand::Show => {
            if cart.cart().is_empty() {
                return emit("Your cart is empty.");
            }

            let totals = cart.totals(context.checkout.settings().delivery_charge);

            emit(cart_table(cart.cart(), totals))
        }
        CartSubcommand::Add(args) => add::run(args, context, &mut cart).await,
        CartSubcommand::Remove { id } => {
            let removed = cart
                .remove_item(&ItemId::from(id.as_str()))
                .map_err(|error| format!("failed to update cart: {error}"))?;

            if removed {
                emit(format!("Removed {id} from cart."))
            } else {
                emit(format!("{id} is not in the cart."))
            }
        }
        CartSubcommand::Quantity { id, delta } => {
            let quantity = cart
                .update_quantity(&ItemId::from(id.as_str()), delta)
                .map_err(|error| format!("failed to update cart: {error}"))?;

            match quantity {
                Some(quantity) => emit(format!("{id} quantity is now {quantity}.")),
                None => emit(format!("{id} is not in the cart.")),
            }
        }
        CartSubcommand::Clear => {
            cart.clear()
                .map_err(|error| format!("failed to update cart: {error}"))?;

            emit("Cart cleared.")
        }
    }
}
