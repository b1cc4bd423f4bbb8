use alloy::primitives::{address, Address};
use alloy_chains::{
    Chain, NamedChain,
    NamedChain::{Mainnet, Sepolia},
};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// The designated test network.
pub const TEST_NETWORK: NamedChain = Sepolia;

/// Contract addresses.
#[derive(Debug, Clone)]
pub struct ContractAddresses {
    /// Tether USD.
    pub usdt: Address,
    /// USD Coin, `None` where it is not listed.
    pub usdc: Option<Address>,
    /// GameCoin deposit contract, only deployed on the test network.
    pub game_coin: Option<Address>,
}

/// Symbol of the chain's native currency, `ETH` where the chain does not define one.
pub fn native_symbol(chain: &Chain) -> &'static str {
    chain
        .named()
        .and_then(|named| named.native_currency_symbol())
        .unwrap_or(NATIVE_FALLBACK_SYMBOL)
}

const NATIVE_FALLBACK_SYMBOL: &str = "ETH";

impl ContractAddresses {
    /// Returns the addresses for the given chain.
    ///
    /// Chains without an entry use the Ethereum mainnet addresses.
    pub fn for_chain(chain: &Chain) -> &'static ContractAddresses {
        ADDRESSES.get(chain).unwrap_or_else(|| {
            log::debug!("No contract addresses for {}, using mainnet defaults.", chain);
            &ADDRESSES[&Chain::from_named(Mainnet)]
        })
    }
}

impl std::fmt::Display for ContractAddresses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let or_none = |a: Option<Address>| a.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Contract Addresses:\n  USDT: {}\n  USDC: {}\n  GameCoin: {}",
            self.usdt,
            or_none(self.usdc),
            or_none(self.game_coin)
        )
    }
}

lazy_static! {
    /// Contract addresses per chain-id.
    pub static ref ADDRESSES: HashMap<Chain, ContractAddresses> = {
        let mut contracts = HashMap::new();

        // ethereum
        contracts.insert(
            Mainnet.into(),
            ContractAddresses {
                usdt: address!("dAC17F958D2ee523a2206206994597C13D831ec7"),
                usdc: Some(address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
                game_coin: None,
            },
        );

        // sepolia
        contracts.insert(
            Sepolia.into(),
            ContractAddresses {
                usdt: address!("AA26ff5dd04368916806d3cBf985fF41e023BF48"),
                usdc: None,
                game_coin: Some(address!("359394D70Ca0565C9F5e85D9182ae62D4bcfE745")),
            },
        );

        contracts
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_chains::NamedChain::Arbitrum;

    #[test]
    fn test_unknown_chain_falls_back_to_mainnet() {
        let arbitrum = ContractAddresses::for_chain(&Arbitrum.into());
        let mainnet = ContractAddresses::for_chain(&Mainnet.into());
        assert_eq!(arbitrum.usdt, mainnet.usdt);
        assert_eq!(arbitrum.usdc, mainnet.usdc);
    }

    #[test]
    fn test_native_symbol() {
        assert_eq!(native_symbol(&Mainnet.into()), "ETH");
        assert_eq!(native_symbol(&NamedChain::Mantle.into()), "MNT");
        assert_eq!(native_symbol(&Chain::from_id(999_999)), "ETH");
    }

    #[test]
    fn test_test_network_addresses() {
        let sepolia = ContractAddresses::for_chain(&TEST_NETWORK.into());
        assert_eq!(
            sepolia.usdt,
            address!("AA26ff5dd04368916806d3cBf985fF41e023BF48")
        );
        assert!(sepolia.usdc.is_none());
        assert!(sepolia.game_coin.is_some());
    }
}
