//! Subcommand execution
//!
//! Inputs are validated into an [`Action`] before any client exists, so a
//! malformed order never touches the network.

use anyhow::Context;
use hermes_core::{OrderRequest, OrderResult, Symbol, ValidationResult, validate_symbol};
use hermes_order_manager::{OrderManager, SETTLEMENT_ASSET};
use hermes_ports::ExchangeTransport;
use log::{error, warn};
use std::io::{self, Write};

use crate::args::Commands;

/// A validated subcommand, ready to run against a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit {
        title: &'static str,
        request: OrderRequest,
    },
    Price(Symbol),
    Balance,
}

impl Action {
    pub fn from_command(command: Commands) -> ValidationResult<Self> {
        let action = match command {
            Commands::MarketOrder {
                symbol,
                side,
                quantity,
            } => Action::Submit {
                title: "MARKET Order",
                request: OrderRequest::market(symbol, side, quantity)?,
            },
            Commands::LimitOrder {
                symbol,
                side,
                quantity,
                price,
            } => Action::Submit {
                title: "LIMIT Order",
                request: OrderRequest::limit(symbol, side, quantity, price)?,
            },
            Commands::StopLimitOrder {
                symbol,
                side,
                quantity,
                stop_price,
                price,
            } => Action::Submit {
                title: "STOP-LIMIT Order",
                request: OrderRequest::stop_limit(symbol, side, quantity, stop_price, price)?,
            },
            Commands::Price { symbol } => Action::Price(validate_symbol(symbol)?),
            Commands::Balance => Action::Balance,
        };
        Ok(action)
    }
}

pub async fn execute<T, W>(
    action: Action,
    manager: &OrderManager<T>,
    out: &mut W,
) -> anyhow::Result<()>
where
    T: ExchangeTransport,
    W: Write,
{
    match action {
        Action::Submit { title, request } => {
            match manager.stop_trigger_advisory(&request).await {
                Ok(Some(warning)) => writeln!(out, "Warning: {}", warning)?,
                Ok(None) => {}
                Err(e) => warn!("Trigger check skipped: {}", e),
            }

            writeln!(out, "Placing {}: {}", title, request)?;
            let result = manager.submit(request).await.context("API Error")?;
            write!(out, "{}", render_success(title, &result))?;
        }
        Action::Price(symbol) => {
            let price = manager.current_price(&symbol).await.context("API Error")?;
            match price {
                Some(price) => writeln!(out, "{}: {}", symbol, price)?,
                None => anyhow::bail!("No price available for {}", symbol),
            }
        }
        Action::Balance => {
            let balance = manager.usdt_balance().await.context("API Error")?;
            match balance {
                Some(balance) => writeln!(out, "{} Balance: {}", SETTLEMENT_ASSET, balance)?,
                None => writeln!(
                    out,
                    "{} balance not found or account is empty",
                    SETTLEMENT_ASSET
                )?,
            }
        }
    }
    Ok(())
}

/// Log a failed command and show it to the user on `out`
///
/// The log line reaches stderr and the log file, so `out` is the only other
/// place the message is written.
pub fn report_failure<W: Write>(err: &anyhow::Error, out: &mut W) -> io::Result<()> {
    error!("{:#}", err);
    writeln!(out, "{:#}", err)
}

pub fn render_success(title: &str, result: &OrderResult) -> String {
    let average = result
        .average_price
        .map_or_else(|| "N/A".to_string(), |p| p.to_string());
    format!(
        "{} Successful\n  Status:        {}\n  Order ID:      {}\n  Average Price: {}\n",
        title, result.status, result.order_id, average
    )
}
