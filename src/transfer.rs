use crate::tokens::Token;
use alloy::primitives::{utils::parse_units, Address, U256};
use std::str::FromStr;
use thiserror::Error;

/// Input errors of the send flow, shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("recipient address is required")]
    MissingRecipient,
    #[error("amount is required")]
    MissingAmount,
    #[error("invalid recipient address {0:?}")]
    InvalidRecipient(String),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error("no {0} balance in the token list")]
    UnknownToken(String),
}

/// A validated transfer of a token from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub to: Address,
    /// Amount in the smallest unit.
    pub amount: U256,
    /// Contract of the token, `None` for the native asset.
    pub token: Option<Address>,
    pub symbol: String,
}

impl Transfer {
    /// Validates user input against the selected token.
    ///
    /// The recipient may omit the `0x` prefix. The amount is in whole tokens and is scaled by the
    /// token's decimals, `max` sends the entire balance.
    pub fn prepare(token: &Token, recipient: &str, amount: &str) -> Result<Self, SendError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(SendError::MissingRecipient);
        }
        let amount = amount.trim();
        if amount.is_empty() {
            return Err(SendError::MissingAmount);
        }

        let prefixed = if recipient.starts_with("0x") {
            recipient.to_string()
        } else {
            format!("0x{}", recipient)
        };
        let to = Address::from_str(&prefixed)
            .map_err(|_| SendError::InvalidRecipient(recipient.to_string()))?;

        let amount = if amount.eq_ignore_ascii_case("max") {
            U256::from_str(&token.balance)
                .map_err(|_| SendError::InvalidAmount(token.balance.clone()))?
        } else {
            parse_amount(amount, token.decimals)?
        };

        Ok(Self {
            to,
            amount,
            token: token.address,
            symbol: token.symbol.clone(),
        })
    }
}

fn parse_amount(amount: &str, decimals: u8) -> Result<U256, SendError> {
    let invalid = || SendError::InvalidAmount(amount.to_string());
    if amount.starts_with('-') {
        return Err(invalid());
    }

    let value: U256 = parse_units(amount, decimals).map_err(|_| invalid())?.into();
    if value.is_zero() {
        return Err(invalid());
    }

    Ok(value)
}
