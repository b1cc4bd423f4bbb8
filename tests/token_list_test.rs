//! Drives the token list with an in-memory balance source.

use alloy::primitives::{address, Address, U256};
use alloy_chains::{Chain, NamedChain};
use async_trait::async_trait;
use eyre::{eyre, Result};
use gamecoin_wallet::tokens::{
    fetch_balances, BalanceSource, FetchRequest, ListEvent, ListState, PriceTable, TokenSpec,
};
use gamecoin_wallet::{AssetKind, TokenBalance, TokenList, TEST_NETWORK};
use std::cell::Cell;
use std::collections::HashSet;

const ALICE: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Every owner holds 1.5 ETH, 150.5 USDT and 20 USDC, unless the asset is marked failing.
#[derive(Default)]
struct MockSource {
    failing: HashSet<AssetKind>,
    reads: Cell<usize>,
}

impl MockSource {
    fn failing(kinds: &[AssetKind]) -> Self {
        Self {
            failing: kinds.iter().copied().collect(),
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl BalanceSource for MockSource {
    async fn balance_of(
        &self,
        _owner: Address,
        _chain: &Chain,
        token: &TokenSpec,
    ) -> Result<TokenBalance> {
        self.reads.set(self.reads.get() + 1);
        if self.failing.contains(&token.kind) {
            return Err(eyre!("rpc timed out"));
        }

        let (amount, decimals) = match token.kind {
            AssetKind::Native => (U256::from(1_500_000_000_000_000_000u128), 18),
            AssetKind::Usdt => (U256::from(150_500_000u64), 6),
            AssetKind::Usdc => (U256::from(20_000_000u64), 6),
        };
        Ok(TokenBalance::new(
            amount,
            decimals,
            token.kind.to_string(),
            token.address,
        ))
    }
}

fn connect(chain: Chain) -> ListEvent {
    ListEvent::Connected {
        address: ALICE,
        chain,
    }
}

#[tokio::test]
async fn test_mainnet_list_and_total() {
    let source = MockSource::default();
    let mut list = TokenList::new(PriceTable::new(3500.0));
    list.apply(&source, connect(NamedChain::Mainnet.into())).await;

    assert_eq!(list.state(), ListState::Loaded);
    assert_eq!(source.reads.get(), 3);

    let symbols: Vec<_> = list.tokens().iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, ["ETH", "USDT", "USDC"]);
    assert_eq!(list.tokens()[0].formatted_balance, "1.5");
    // 1.5 * 3500 + 150.5 + 20
    assert_eq!(list.total(), "5420.50");
}

#[tokio::test]
async fn test_test_network_list_and_total() {
    let source = MockSource::default();
    let mut list = TokenList::new(PriceTable::new(3500.0));
    list.apply(&source, connect(TEST_NETWORK.into())).await;

    assert_eq!(source.reads.get(), 2);
    let symbols: Vec<_> = list.tokens().iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, ["SepoliaETH", "USDT"]);
    assert_eq!(list.total(), "5400.50");
}

#[tokio::test]
async fn test_failed_reads_are_dropped() {
    let source = MockSource::failing(&[AssetKind::Native]);
    let mut list = TokenList::default();
    list.apply(&source, connect(NamedChain::Mainnet.into())).await;

    assert_eq!(list.state(), ListState::Loaded);
    let symbols: Vec<_> = list.tokens().iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, ["USDT", "USDC"]);
    assert_eq!(list.total(), "170.50");
}

#[tokio::test]
async fn test_all_reads_failing_gives_empty_list() {
    let source = MockSource::failing(&[AssetKind::Native, AssetKind::Usdt, AssetKind::Usdc]);
    let mut list = TokenList::default();
    list.apply(&source, connect(NamedChain::Mainnet.into())).await;

    assert_eq!(list.state(), ListState::Loaded);
    assert!(list.tokens().is_empty());
    assert_eq!(list.total(), "0.00");
}

#[tokio::test]
async fn test_fetch_is_order_independent() {
    let source = MockSource::default();
    let request = FetchRequest {
        generation: 1,
        address: ALICE,
        chain: NamedChain::Mainnet.into(),
    };
    let first = fetch_balances(&source, &request).await;
    let second = fetch_balances(&source, &request).await;
    assert_eq!(first, second);

    let mut list = TokenList::default();
    let request = list
        .handle(connect(NamedChain::Mainnet.into()))
        .expect("should request a fetch");
    list.handle(ListEvent::Fetched {
        generation: request.generation,
        balances: first,
    });
    let tokens = list.tokens().to_vec();

    // same snapshot again
    list.push(ListEvent::BalancesChanged);
    list.run(&source).await;
    assert_eq!(list.tokens(), tokens.as_slice());
}

#[tokio::test]
async fn test_chain_change_replaces_list() {
    let source = MockSource::default();
    let mut list = TokenList::default();
    list.apply(&source, connect(NamedChain::Mainnet.into())).await;
    assert_eq!(list.tokens().len(), 3);

    list.apply(&source, ListEvent::ChainChanged(TEST_NETWORK.into()))
        .await;
    assert_eq!(list.tokens().len(), 2);
    assert!(list.tokens().iter().all(|t| t.symbol != "USDC"));

    list.apply(&source, ListEvent::Disconnected).await;
    assert_eq!(list.state(), ListState::Disconnected);
    assert!(list.tokens().is_empty());
    assert_eq!(list.total(), "0.00");
}

#[tokio::test]
async fn test_selection_after_reload() {
    let source = MockSource::default();
    let mut list = TokenList::default();
    list.apply(&source, connect(NamedChain::Mainnet.into())).await;

    let index = list.position("usdt").expect("should list USDT");
    let mut selected = Vec::new();
    list.activate(index, |token| selected.push(token.clone()));
    assert_eq!(selected.len(), 1);
    assert_eq!(&selected[0], &list.tokens()[index]);
    assert_eq!(selected[0].formatted_balance, "150.5");

    // a pending recomputation blocks selection
    list.handle(ListEvent::BalancesChanged);
    assert!(!list.activate(index, |token| selected.push(token.clone())));
    assert_eq!(selected.len(), 1);
}
