use clap::{Args, Subcommand};
use lavanya::access::RouteClass;
use lavanya_app::context::AppContext;

mod list;
mod status;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List every order, newest first
    List,

    /// Move an order to a new status
    Status(status::UpdateStatusArgs),
}

pub(crate) async fn run(command: OrdersCommand, context: &AppContext) -> Result<(), String> {
    context
        .access
        .require(RouteClass::Admin)
        .map_err(|error| error.to_string())?;

    match command.command {
        OrdersSubcommand::List => list::run(context).await,
        OrdersSubcommand::Status(args) => status::run(args, context).await,
    }
}
