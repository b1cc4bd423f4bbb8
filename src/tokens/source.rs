use super::{token_set, FetchRequest, RawBalances, TokenError, TokenSpec};
use crate::contracts::TokenBalance;
use alloy::primitives::Address;
use alloy_chains::Chain;
use async_trait::async_trait;
use eyre::Result;
use futures_util::future::join_all;

/// Reads raw balances of an owner, e.g. from an RPC node.
///
/// Note that the `async_trait` has `?Send` specified, balance reads are driven from a single task.
#[async_trait(?Send)]
pub trait BalanceSource {
    /// Returns the balance of `owner` for the given asset on `chain`.
    async fn balance_of(
        &self,
        owner: Address,
        chain: &Chain,
        token: &TokenSpec,
    ) -> Result<TokenBalance>;
}

/// Reads every asset selected for the request's chain, concurrently.
///
/// Failed reads are logged and left out of the returned balances.
pub async fn fetch_balances<S: BalanceSource + ?Sized>(
    source: &S,
    request: &FetchRequest,
) -> RawBalances {
    let specs = token_set(&request.chain);
    let reads = specs.iter().map(|spec| async move {
        (spec.kind, source.balance_of(request.address, &request.chain, spec).await)
    });

    join_all(reads)
        .await
        .into_iter()
        .filter_map(|(kind, result)| match result {
            Ok(balance) => Some((kind, balance)),
            Err(e) => {
                log::warn!(
                    "{}",
                    TokenError::SourceUnavailable {
                        kind,
                        reason: format!("{:#}", e),
                    }
                );
                None
            }
        })
        .collect()
}
