use clap::Args;
use lavanya_app::context::AppContext;

use crate::cli::render::{emit, products_table};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Only show this category; `All` shows everything
    #[arg(long)]
    category: Option<String>,
}

pub(crate) async fn run(args: ListProductsArgs, context: &AppContext) -> Result<(), String> {
    let products = match args.category.as_deref() {
        Some(category) => context.products.list_by_category(category).await,
        None => context.products.list_products().await,
    }
    .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        return emit("No products found.");
    }

    emit(products_table(&products))
}
