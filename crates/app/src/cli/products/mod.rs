use clap::{Args, Subcommand};
use lavanya_app::context::AppContext;

use crate::cli::render::emit;

mod add;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, optionally by category
    List(list::ListProductsArgs),

    /// Add a product (admin)
    Add(add::AddProductArgs),
}

pub(crate) async fn run(command: ProductsCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(args, context).await,
        ProductsSubcommand::Add(args) => add::run(args, context).await,
    }
}

pub(crate) async fn categories(context: &AppContext) -> Result<(), String> {
    let categories = context
        .products
        .list_categories()
        .await
        .map_err(|error| format!("failed to load categories: {error}"))?;

    emit(categories.names.join("\n"))
}
