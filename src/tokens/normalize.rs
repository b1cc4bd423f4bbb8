use super::{format_balance, is_test_network, token_set, Token, TokenError, TokenSpec};
use crate::contracts::{AssetKind, TokenBalance};
use alloy::primitives::Address;
use alloy_chains::Chain;
use std::collections::HashMap;

/// Symbol of the native asset on the test network.
pub const TEST_NETWORK_NATIVE_SYMBOL: &str = "SepoliaETH";

/// Raw balances of one snapshot, keyed by asset.
///
/// An asset missing from the map is treated as unavailable.
pub type RawBalances = HashMap<AssetKind, TokenBalance>;

/// Converts a raw balance into a display-ready [`Token`].
pub fn normalize(spec: &TokenSpec, raw: &TokenBalance, chain: &Chain) -> Result<Token, TokenError> {
    let is_test = is_test_network(chain);
    let formatted_balance = format_balance(raw.amount, raw.decimals)?;

    let symbol = match spec.kind {
        AssetKind::Native if is_test => TEST_NETWORK_NATIVE_SYMBOL.to_string(),
        kind if raw.symbol.is_empty() => kind.default_symbol().to_string(),
        _ => raw.symbol.clone(),
    };

    // a native coin other than ether goes by its ticker
    let name = match spec.kind {
        AssetKind::Native if !is_test && symbol != AssetKind::Native.default_symbol() => {
            symbol.clone()
        }
        kind => kind.name(is_test).to_string(),
    };

    Ok(Token {
        symbol,
        name,
        balance: raw.amount.to_string(),
        formatted_balance,
        decimals: raw.decimals,
        address: spec.address,
        icon_path: spec.kind.icon_path().to_string(),
    })
}

/// Builds the ordered token list for a snapshot.
///
/// Only the assets selected for `chain` are considered, in their selection order.
/// Unavailable or unrenderable balances are left out. A disconnected wallet (`None`) has no
/// tokens.
pub fn compute_token_list(
    address: Option<Address>,
    chain: &Chain,
    raw_balances: &RawBalances,
) -> Vec<Token> {
    if address.is_none() {
        return Vec::new();
    }

    token_set(chain)
        .iter()
        .filter_map(|spec| {
            let Some(raw) = raw_balances.get(&spec.kind) else {
                log::debug!(
                    "{}",
                    TokenError::SourceUnavailable {
                        kind: spec.kind,
                        reason: "no balance in snapshot".to_string(),
                    }
                );
                return None;
            };

            if raw.address != spec.address {
                log::debug!(
                    "{}",
                    TokenError::SourceUnavailable {
                        kind: spec.kind,
                        reason: "balance was read from another contract".to_string(),
                    }
                );
                return None;
            }

            normalize(spec, raw, chain)
                .inspect_err(|e| log::warn!("Dropping {} from the list: {}", spec.kind, e))
                .ok()
        })
        .collect()
}
