//! `hermes` - order entry for the Binance futures testnet
//!
//! ```text
//! hermes market-order BTCUSDT BUY 0.01
//! hermes limit-order BTCUSDT SELL 0.01 70000
//! hermes stop-limit-order ETHUSDT SELL 1.5 2000 1990
//! hermes price BTCUSDT
//! hermes balance
//! ```
//!
//! Credentials come from `API_KEY` / `SECRET_KEY`, read from the environment
//! or a `.env` file in the working directory.

mod args;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use hermes_gateway::{BinanceFuturesClient, ClientConfig};
use hermes_order_manager::OrderManager;
use std::process::ExitCode;

use args::Cli;
use commands::Action;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_file) {
        eprintln!("Warning: {:#}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::report_failure(&e, &mut std::io::stdout()).ok();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let action = Action::from_command(cli.command).context("Validation Error")?;

    let mut config = ClientConfig::from_env().context("Failed to initialize Binance client")?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = BinanceFuturesClient::new(config).context("Failed to initialize Binance client")?;

    let manager = OrderManager::new(client);
    commands::execute(action, &manager, &mut std::io::stdout()).await
}
