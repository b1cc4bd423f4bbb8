use alloy::primitives::Address;
use serde::Serialize;
use std::fmt::Display;

/// A display-ready token entry, recreated on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub name: String,
    /// Raw amount in the smallest unit, as a decimal string.
    pub balance: String,
    /// `balance` scaled by `decimals`, for display.
    pub formatted_balance: String,
    pub decimals: u8,
    /// Contract address, `None` for the native asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub icon_path: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {:>28}  {}",
            self.symbol, self.formatted_balance, self.name
        )
    }
}
