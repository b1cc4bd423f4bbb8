mod gamecoin;
mod token;

#[cfg(feature = "anvil")]
mod anvil;

use crate::{configurations::WalletConfig, contracts::*};
use alloy::providers::fillers::{
    ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::WalletProvider;
use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{Identity, Provider, ProviderBuilder, RootProvider},
    transports::http::{Client, Http},
};
use alloy_chains::Chain;
use eyre::{Context, Result};

// TODO: use a better type for these
type WalletNodeTransport = Http<Client>;
type WalletNodeProvider = FillProvider<
    JoinFill<
        JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<WalletNodeTransport>,
    WalletNodeTransport,
    Ethereum,
>;

/// Connection to a chain with a local signer.
pub struct WalletNode {
    pub config: WalletConfig,
    /// Chain reported by the RPC at connection time.
    pub chain: Chain,
    /// Contract addresses for the wallet, respects the connected chain.
    pub addresses: ContractAddresses,
    /// Underlying provider type.
    pub provider: WalletNodeProvider,
}

impl WalletNode {
    /// Creates a new wallet node connected to the chain at the configured RPC URL.
    ///
    /// The contract addresses are chosen based on the chain id returned from the provider.
    pub async fn new(config: WalletConfig) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(config.wallet.clone())
            .on_http(config.rpc_url.clone());

        let chain_id_u64 = provider
            .get_chain_id()
            .await
            .wrap_err("could not get chain id")?;
        let chain = Chain::from_id(chain_id_u64);

        Ok(Self {
            config,
            chain,
            addresses: ContractAddresses::for_chain(&chain).clone(),
            provider,
        })
    }

    /// Creates a new node with the given wallet.
    ///
    /// - Provider is cloned and its wallet is mutated.
    /// - Config is cloned and its wallet & address are updated.
    pub fn connect(&self, wallet: EthereumWallet) -> Self {
        let mut provider = self.provider.clone();
        *provider.wallet_mut() = wallet.clone();

        Self {
            provider,
            config: self.config.clone().with_wallet(wallet),
            chain: self.chain,
            addresses: self.addresses.clone(),
        }
    }

    /// Returns the chain the RPC is currently on.
    pub async fn get_chain(&self) -> Result<Chain> {
        let chain_id_u64 = self
            .provider
            .get_chain_id()
            .await
            .wrap_err("could not get chain id")?;

        Ok(Chain::from_id(chain_id_u64))
    }

    /// Returns the native token balance of a given address on the connected chain.
    pub async fn get_native_balance(&self, address: Address) -> Result<TokenBalance> {
        self.native_balance_on(address, &self.chain).await
    }

    /// Returns the native token balance, tagged with the native symbol of `chain`.
    pub(crate) async fn native_balance_on(
        &self,
        address: Address,
        chain: &Chain,
    ) -> Result<TokenBalance> {
        let balance = self
            .provider
            .get_balance(address)
            .await
            .wrap_err("could not get native balance")?;

        Ok(TokenBalance::new(
            balance,
            AssetKind::Native.default_decimals(),
            native_symbol(chain).to_string(),
            None,
        ))
    }

    /// Returns the address of the configured wallet.
    #[inline(always)]
    pub fn address(&self) -> Address {
        self.config.address
    }
}

impl core::fmt::Display for WalletNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GameCoin Wallet v{}\nAddress: {}\nRPC URL: {}\nChain: {}",
            env!("CARGO_PKG_VERSION"),
            self.address(),
            self.config.rpc_url,
            self.chain,
        )
    }
}

/// Shortens an address to its first and last characters, e.g. `0xf39F...2266`.
pub fn short_address(address: &Address) -> String {
    let checksummed = address.to_checksum(None);
    format!(
        "{}...{}",
        &checksummed[..6],
        &checksummed[checksummed.len() - 4..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_short_address() {
        let address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(short_address(&address), "0xf39F...2266");
    }
}
