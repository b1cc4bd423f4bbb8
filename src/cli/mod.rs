mod commands;
use commands::{Commands, GameCoinCommands};

mod parsers;
use parsers::*;

use crate::{tokens::PriceTable, tokens::ETH_PRICE_USD, WalletConfig, WalletNode};
use alloy::{primitives::B256, transports::http::reqwest::Url};
use clap::Parser;
use eyre::{Context, Result};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC URL of the Ethereum node, the chain is taken from it.
    #[arg(short, long, env = "RPC_URL", value_parser = parse_url)]
    rpc_url: Url,

    /// Ethereum wallet's secret (private) key.
    #[arg(short, long, env = "SECRET_KEY", value_parser = parse_secret_key)]
    secret_key: B256,

    /// USD price of ETH used for the wallet total.
    #[arg(long, env = "ETH_PRICE_USD", default_value_t = ETH_PRICE_USD, value_parser = parse_price)]
    eth_price: f64,

    /// Seconds to wait for a transaction receipt.
    #[arg(long, env = "TX_TIMEOUT_SECS", default_value_t = WalletConfig::DEFAULT_TX_TIMEOUT_SECS)]
    tx_timeout: u64,
}

/// Main CLI entry point.
pub async fn cli() -> Result<()> {
    // default commands such as version and help exit at this point,
    // so we can do the node setup after this line
    let cli = Cli::parse();

    // create node
    let config = WalletConfig::new(&cli.secret_key, cli.rpc_url)
        .wrap_err("could not create wallet configuration")?
        .with_prices(PriceTable::new(cli.eth_price))
        .with_tx_timeout(Duration::from_secs(cli.tx_timeout));
    let node = WalletNode::new(config)
        .await
        .wrap_err("could not create wallet node")?;
    log::info!("{}", node);
    log::debug!("{}", node.addresses);

    match cli.command {
        Commands::Balance { json } => node.display_balance(json).await?,
        Commands::Watch { interval } => {
            let token = CancellationToken::new();

            // create a signal handler
            let termination_token = token.clone();
            let termination_handle = tokio::spawn(async move {
                if let Err(e) = wait_for_termination(termination_token).await {
                    log::error!("Error in termination handler: {}", e);
                }
            });

            node.watch_balances(Duration::from_secs(interval.max(1)), token)
                .await?;

            // wait for handle
            if let Err(e) = termination_handle.await {
                log::error!("Error in termination handler: {}", e);
            }
        }
        Commands::Send {
            symbol,
            recipient,
            amount,
        } => node.send(&symbol, &recipient, &amount).await?,
        Commands::GameCoin { action } => match action {
            GameCoinCommands::Balance => node.display_game_coin_balance().await?,
            GameCoinCommands::Deposit { amount } => node.deposit_game_coin(amount).await?,
            GameCoinCommands::Use { amount } => node.spend_game_coin(amount).await?,
        },
    };

    Ok(())
}

/// Waits for various termination signals, and cancels the given token when the signal is received.
async fn wait_for_termination(cancellation: CancellationToken) -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => log::warn!("Received SIGTERM"),
            _ = sigint.recv() => log::warn!("Received SIGINT"),
            _ = cancellation.cancelled() => {
                // no need to wait if cancelled anyways
                return Ok(());
            }
        };

        cancellation.cancel();
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        log::warn!("Received Ctrl-C");
        cancellation.cancel();
    }

    log::info!("Terminating the application...");

    Ok(())
}
