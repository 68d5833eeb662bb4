//! Lavanya storefront CLI

use std::process;

use clap::Parser;
use lavanya_app::{context::AppContext, observability};

mod cli;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = observability::init_logging(&cli.config.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    let context = AppContext::from_config(&cli.config);

    if let Err(error) = cli.run(&context).await {
        eprintln!("{error}");
        process::exit(1);
    }
}
