mod gamecoin;
mod token;
mod watch;

use super::parsers::*;
use alloy::primitives::U256;
use clap::Subcommand;

// https://docs.rs/clap/latest/clap/_derive/index.html#arg-attributes
#[derive(Subcommand)]
pub enum Commands {
    /// See the token balances of the wallet and their USD total.
    Balance {
        #[arg(long, help = "Print the token list as JSON.")]
        json: bool,
    },
    /// Keep the token list up to date until interrupted.
    Watch {
        #[arg(
            long,
            help = "Seconds between balance refreshes.",
            default_value_t = 12
        )]
        interval: u64,
    },
    /// Send a token from the list.
    Send {
        #[arg(help = "Symbol of the token to send, e.g. ETH or USDT.")]
        symbol: String,
        #[arg(help = "Recipient address, the 0x prefix is optional.")]
        recipient: String,
        #[arg(help = "Amount in whole tokens, or 'max' for the entire balance.")]
        amount: String,
    },
    /// GameCoin deposits and spending.
    GameCoin {
        #[command(subcommand)]
        action: GameCoinCommands,
    },
}

#[derive(Subcommand)]
pub enum GameCoinCommands {
    /// See the GameCoin balance of the wallet.
    Balance,
    /// Deposit USDT to mint GameCoin.
    Deposit {
        #[arg(help = "Amount in the smallest unit, 1000000 = 1.0 GameCoin.", value_parser = parse_raw_amount)]
        amount: U256,
    },
    /// Spend GameCoin.
    Use {
        #[arg(help = "Amount in the smallest unit, 1000000 = 1.0 GameCoin.", value_parser = parse_raw_amount)]
        amount: U256,
    },
}
