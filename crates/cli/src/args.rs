use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Order entry for the Binance USD-M futures testnet.
#[derive(Parser, Debug)]
#[command(name = "hermes")]
#[command(about = "Place orders on the Binance futures testnet", long_about = None)]
pub struct Cli {
    /// Exchange REST endpoint (overrides BINANCE_FUTURES_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// File the log is appended to.
    #[arg(long, global = true, env = "HERMES_LOG_FILE", default_value = "trading_bot.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Place a MARKET order.
    MarketOrder {
        #[arg(help = "Trading pair symbol (e.g., BTCUSDT)")]
        symbol: String,
        #[arg(help = "Order side (BUY or SELL)")]
        side: String,
        #[arg(help = "Quantity to trade", allow_hyphen_values = true)]
        quantity: String,
    },
    /// Place a LIMIT order (good till canceled).
    LimitOrder {
        #[arg(help = "Trading pair symbol (e.g., BTCUSDT)")]
        symbol: String,
        #[arg(help = "Order side (BUY or SELL)")]
        side: String,
        #[arg(help = "Quantity to trade", allow_hyphen_values = true)]
        quantity: String,
        #[arg(help = "Limit price", allow_hyphen_values = true)]
        price: String,
    },
    /// Place a STOP-LIMIT order (good till canceled).
    StopLimitOrder {
        #[arg(help = "Trading pair symbol (e.g., BTCUSDT)")]
        symbol: String,
        #[arg(help = "Order side (BUY or SELL)")]
        side: String,
        #[arg(help = "Quantity to trade", allow_hyphen_values = true)]
        quantity: String,
        #[arg(help = "Stop price that triggers the limit order", allow_hyphen_values = true)]
        stop_price: String,
        #[arg(help = "Limit price", allow_hyphen_values = true)]
        price: String,
    },
    /// Show the latest price for a symbol.
    Price {
        #[arg(help = "Trading pair symbol (e.g., BTCUSDT)")]
        symbol: String,
    },
    /// Show the USDT balance of the futures account.
    Balance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stop_limit() {
        let cli = Cli::try_parse_from([
            "hermes",
            "stop-limit-order",
            "ETHUSDT",
            "SELL",
            "1.5",
            "2000",
            "1990",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::StopLimitOrder {
                symbol: "ETHUSDT".into(),
                side: "SELL".into(),
                quantity: "1.5".into(),
                stop_price: "2000".into(),
                price: "1990".into(),
            }
        );
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["hermes", "market-order", "BTCUSDT", "BUY", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::MarketOrder { quantity, .. } if quantity == "-1"));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "hermes",
            "balance",
            "--base-url",
            "http://127.0.0.1:9000",
            "--log-file",
            "/tmp/hermes.log",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/hermes.log"));
        assert_eq!(cli.command, Commands::Balance);
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["hermes", "limit-order", "BTCUSDT", "BUY", "1"]).is_err());
    }
}
