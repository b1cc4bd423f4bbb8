use crate::tokens::format_balance;
use alloy::primitives::{Address, U256};
use std::fmt::Display;

/// A token balance contains amount, decimals, token symbol and the token address if its non-native token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    /// Amount of tokens as bigint, in the smallest unit.
    pub amount: U256,
    /// Number of fractional digits of the token.
    pub decimals: u8,
    /// Token symbol, for display purposes.
    pub symbol: String,
    /// Token contract address, `None` if its ETH (native token).
    pub address: Option<Address>,
}

impl TokenBalance {
    /// Create a new token result.
    pub fn new(amount: U256, decimals: u8, symbol: String, address: Option<Address>) -> Self {
        Self {
            amount,
            decimals,
            symbol,
            address,
        }
    }
}

impl Display for TokenBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_balance(self.amount, self.decimals).unwrap_or_else(|_| self.amount.to_string()),
            self.symbol,
            self.address.map(|s| s.to_string()).unwrap_or_default() // empty-string if `None`
        )
    }
}
