use crate::tokens::PriceTable;
use alloy::{
    hex::FromHex,
    network::{Ethereum, EthereumWallet, NetworkWallet},
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};

use color_eyre::Section;
use eyre::{Context, Result};
use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct WalletConfig {
    pub wallet: EthereumWallet,
    pub address: Address,
    pub rpc_url: Url,
    /// Prices used for the USD total.
    pub prices: PriceTable,
    /// Transaction timeout, `None` waits forever.
    pub tx_timeout: Option<Duration>,
}

impl WalletConfig {
    /// Default transaction timeout.
    pub const DEFAULT_TX_TIMEOUT_SECS: u64 = 60;

    pub fn new(secret_key: &B256, rpc_url: Url) -> Result<Self> {
        let signer =
            PrivateKeySigner::from_bytes(secret_key).wrap_err("could not parse private key")?;
        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        Ok(Self {
            wallet,
            address,
            rpc_url,
            prices: PriceTable::default(),
            tx_timeout: Some(Duration::from_secs(Self::DEFAULT_TX_TIMEOUT_SECS)),
        })
    }

    /// Creates the config from the environment variables.
    ///
    /// Required environment variables:
    /// - `SECRET_KEY`
    /// - `RPC_URL`
    ///
    /// Optional: `ETH_PRICE_USD`.
    pub fn new_from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // .env is optional

        // parse private key
        let private_key_hex = env::var("SECRET_KEY")
            .wrap_err("SECRET_KEY is not set")
            .suggestion("SECRET_KEY must be within .env.")?;
        let secret_key = B256::from_hex(private_key_hex)
            .wrap_err("could not hex-decode secret key")
            .suggestion("SECRET_KEY must be within .env and be hexadecimals.")?;

        // parse rpc url
        let rpc_url_env = env::var("RPC_URL").wrap_err("RPC_URL is not set")?;
        let rpc_url = Url::parse(&rpc_url_env).wrap_err("could not parse RPC URL")?;

        let mut config = Self::new(&secret_key, rpc_url)?;
        if let Ok(price) = env::var("ETH_PRICE_USD") {
            let price = price
                .parse::<f64>()
                .wrap_err("could not parse ETH_PRICE_USD")?;
            config = config.with_prices(PriceTable::new(price));
        }

        Ok(config)
    }

    /// Creates a new local configuration.
    pub fn new_local() -> Self {
        // first account of Anvil/Hardhat
        let secret_key =
            B256::from_hex("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
                .unwrap();

        // default url is Anvil/Hardhat
        let rpc_url = Url::parse("http://localhost:8545").unwrap();

        Self::new(&secret_key, rpc_url).unwrap()
    }

    /// Change the RPC URL.
    pub fn with_rpc_url(mut self, rpc_url: Url) -> Self {
        self.rpc_url = rpc_url;
        self
    }

    /// Change the price table.
    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Change the transaction timeout.
    pub fn with_tx_timeout(mut self, tx_timeout: Duration) -> Self {
        self.tx_timeout = Some(tx_timeout);
        self
    }

    /// Change the wallet, the address is taken from its default signer.
    pub fn with_wallet(mut self, wallet: EthereumWallet) -> Self {
        self.address = NetworkWallet::<Ethereum>::default_signer_address(&wallet);
        self.wallet = wallet;
        self
    }

    /// Change the signer with a new one.
    pub fn with_signer(mut self, signer: PrivateKeySigner) -> Self {
        self.address = signer.address();
        self.wallet.register_default_signer(signer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_local_config() {
        let config = WalletConfig::new_local();
        assert_eq!(
            config.address,
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(config.prices, PriceTable::default());
        assert_eq!(
            config.tx_timeout,
            Some(Duration::from_secs(WalletConfig::DEFAULT_TX_TIMEOUT_SECS))
        );
    }

    #[test]
    fn test_with_signer() {
        let signer = PrivateKeySigner::random();
        let expected = signer.address();
        let config = WalletConfig::new_local().with_signer(signer);
        assert_eq!(config.address, expected);
        assert_eq!(
            NetworkWallet::<Ethereum>::default_signer_address(&config.wallet),
            expected
        );
    }
}
