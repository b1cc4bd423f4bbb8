use super::WalletNode;
use crate::contracts::*;
use crate::tokens::{BalanceSource, TokenSpec};
use crate::transfer::Transfer;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy_chains::Chain;
use async_trait::async_trait;
use eyre::{Context, Result};

impl WalletNode {
    /// Returns the balance of `owner` at the given ERC20 contract.
    pub async fn get_token_balance(&self, token: Address, owner: Address) -> Result<TokenBalance> {
        let contract = ERC20::new(token, &self.provider);
        let token_balance = contract.balanceOf(owner).call().await?._0;
        let token_decimals = contract.decimals().call().await?._0;
        let token_symbol = contract.symbol().call().await?._0;

        Ok(TokenBalance::new(
            token_balance,
            token_decimals,
            token_symbol,
            Some(token),
        ))
    }

    /// Returns the amount `spender` may move out of `owner`'s balance.
    pub async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let contract = ERC20::new(token, &self.provider);
        let allowance = contract.allowance(owner, spender).call().await?._0;

        Ok(allowance)
    }

    pub async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = ERC20::new(token, &self.provider);

        let req = contract.approve(spender, amount);
        let tx = req
            .send()
            .await
            .map_err(contract_error_report)
            .wrap_err("could not approve tokens")?;

        log::info!("Hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        Ok(receipt)
    }

    /// Sends native tokens to the given address.
    pub async fn transfer_native(&self, to: Address, amount: U256) -> Result<TransactionReceipt> {
        let req = TransactionRequest::default()
            .with_to(to)
            .with_value(amount);
        let tx = self
            .provider
            .send_transaction(req)
            .await
            .wrap_err("could not send transaction")?;

        log::info!("Hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        Ok(receipt)
    }

    /// Transfer tokens to the given address, calls `transfer` of the ERC20 contract.
    pub async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = ERC20::new(token, &self.provider);

        let req = contract.transfer(to, amount);
        let tx = req
            .send()
            .await
            .map_err(contract_error_report)
            .wrap_err("could not transfer tokens")?;

        log::info!("Hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        Ok(receipt)
    }

    /// Submits a prepared transfer, native or ERC20 depending on the token.
    pub async fn submit_transfer(&self, transfer: &Transfer) -> Result<TransactionReceipt> {
        log::info!(
            "Sending {} (smallest unit) {} to {}",
            transfer.amount,
            transfer.symbol,
            transfer.to
        );

        match transfer.token {
            Some(token) => self.transfer_token(token, transfer.to, transfer.amount).await,
            None => self.transfer_native(transfer.to, transfer.amount).await,
        }
    }
}

#[async_trait(?Send)]
impl BalanceSource for WalletNode {
    async fn balance_of(
        &self,
        owner: Address,
        chain: &Chain,
        token: &TokenSpec,
    ) -> Result<TokenBalance> {
        match token.address {
            Some(address) => self
                .get_token_balance(address, owner)
                .await
                .wrap_err_with(|| format!("could not read {} balance", token.kind)),
            None => self.native_balance_on(owner, chain).await,
        }
    }
}
