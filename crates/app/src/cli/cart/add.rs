use clap::Args;
use lavanya::items::NewCartItem;
use lavanya_app::{context::AppContext, domain::carts::CartService};

use crate::cli::render::emit;

#[derive(Debug, Args)]
pub(crate) struct AddToCartArgs {
    /// Product id from `products list`
    id: String,
}

pub(crate) async fn run(
    args: AddToCartArgs,
    context: &AppContext,
    cart: &mut CartService,
) -> Result<(), String> {
    let product = context
        .products
        .get_product(&args.id)
        .await
        .map_err(|error| format!("failed to load product {}: {error}", args.id))?;

    let added = cart
        .add_item(NewCartItem::from(&product))
        .map_err(|error| format!("failed to update cart: {error}"))?;

    emit(added.message())
}
