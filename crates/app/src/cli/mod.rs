use clap::{Parser, Subcommand};
use lavanya_app::{config::StorefrontConfig, context::AppContext};

mod cart;
mod checkout;
mod orders;
mod products;
mod profile;
mod render;

#[derive(Debug, Parser)]
#[command(name = "lavanya", about = "Lavanya storefront", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: StorefrontConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect or change the cart
    Cart(cart::CartCommand),

    /// Place an order for everything in the cart
    Checkout(checkout::CheckoutArgs),

    /// Browse or add products
    Products(products::ProductsCommand),

    /// List product categories
    Categories,

    /// Manage orders (admin)
    Orders(orders::OrdersCommand),

    /// Show the signed-in user and their orders
    Profile,
}

impl Cli {
    pub(crate) async fn run(self, context: &AppContext) -> Result<(), String> {
        match self.command {
            Commands::Cart(command) => cart::run(command, context).await,
            Commands::Checkout(args) => checkout::run(args, context).await,
            Commands::Products(command) => products::run(command, context).await,
            Commands::Categories => products::categories(context).await,
            Commands::Orders(command) => orders::run(command, context).await,
            Commands::Profile => profile::run(context).await,
        }
    }
}
