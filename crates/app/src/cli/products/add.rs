use clap::Args;
use lavanya::{access::RouteClass, catalog::NewProduct};
use lavanya_app::context::AppContext;
use rust_decimal::Decimal;

use crate::cli::render::emit;

#[derive(Debug, Args)]
pub(crate) struct AddProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Unit price in Taka
    #[arg(long)]
    price: Decimal,

    /// Category label
    #[arg(long)]
    category: String,

    /// Long description
    #[arg(long, default_value = "")]
    description: String,

    /// Image URL
    #[arg(long, default_value = "")]
    image: String,
}

pub(crate) async fn run(args: AddProductArgs, context: &AppContext) -> Result<(), String> {
    context
        .access
        .require(RouteClass::Admin)
        .map_err(|error| error.to_string())?;

    let product = context
        .products
        .add_product(NewProduct {
            name: args.name,
            price: args.price,
            category: args.category,
            description: args.description,
            image: args.image,
        })
        .await
        .map_err(|error| format!("failed to add product: {error}"))?;

    emit(format!("product_id: {}", product.id))?;
    emit(format!("name: {}", product.name))
}
