use crate::contracts::{AssetKind, ContractAddresses, TEST_NETWORK};
use alloy::primitives::Address;
use alloy_chains::Chain;

/// An asset to query, with its contract address on the selected chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    pub kind: AssetKind,
    /// `None` for the native asset.
    pub address: Option<Address>,
}

impl TokenSpec {
    pub fn native() -> Self {
        Self {
            kind: AssetKind::Native,
            address: None,
        }
    }

    pub fn contract(kind: AssetKind, address: Address) -> Self {
        Self {
            kind,
            address: Some(address),
        }
    }
}

/// Returns `true` if the chain is the designated test network.
#[inline]
pub fn is_test_network(chain: &Chain) -> bool {
    chain.named() == Some(TEST_NETWORK)
}

/// Returns the ordered set of assets to query on the given chain.
///
/// The native asset always comes first, followed by USDT at the chain's own address.
/// USDC is listed everywhere except on the test network.
pub fn token_set(chain: &Chain) -> Vec<TokenSpec> {
    let addresses = ContractAddresses::for_chain(chain);

    let mut set = vec![
        TokenSpec::native(),
        TokenSpec::contract(AssetKind::Usdt, addresses.usdt),
    ];
    if !is_test_network(chain) {
        if let Some(usdc) = addresses.usdc {
            set.push(TokenSpec::contract(AssetKind::Usdc, usdc));
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy_chains::NamedChain;

    #[test]
    fn test_test_network_has_no_usdc() {
        let set = token_set(&TEST_NETWORK.into());
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|spec| spec.kind != AssetKind::Usdc));
    }

    #[test]
    fn test_other_networks_have_usdc() {
        for chain in [
            NamedChain::Mainnet,
            NamedChain::Arbitrum,
            NamedChain::Scroll,
            NamedChain::Mantle,
        ] {
            let set = token_set(&chain.into());
            assert!(set.iter().any(|spec| spec.kind == AssetKind::Usdc));
        }
        // unnamed chain ids too
        let set = token_set(&Chain::from_id(999_999));
        assert_eq!(set[2].kind, AssetKind::Usdc);
    }

    #[test]
    fn test_native_is_first() {
        for chain in [TEST_NETWORK, NamedChain::Mainnet] {
            let set = token_set(&chain.into());
            assert_eq!(set[0], TokenSpec::native());
            assert!(set[1..].iter().all(|spec| spec.address.is_some()));
        }
    }

    #[test]
    fn test_usdt_address_is_network_aware() {
        let mainnet = token_set(&NamedChain::Mainnet.into());
        let sepolia = token_set(&TEST_NETWORK.into());
        assert_eq!(
            mainnet[1].address,
            Some(address!("dAC17F958D2ee523a2206206994597C13D831ec7"))
        );
        assert_eq!(
            sepolia[1].address,
            Some(address!("AA26ff5dd04368916806d3cBf985fF41e023BF48"))
        );
    }
}
