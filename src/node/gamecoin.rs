use super::WalletNode;
use crate::contracts::*;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionReceipt;
use eyre::{eyre, Context, Result};

impl WalletNode {
    /// Returns the GameCoin contract address, if it is deployed on the connected chain.
    pub fn game_coin_address(&self) -> Result<Address> {
        self.addresses
            .game_coin
            .ok_or_else(|| eyre!("GameCoin is not deployed on chain {}", self.chain))
    }

    /// Returns the GameCoin balance of `owner`, in the smallest unit.
    pub async fn game_coin_balance(&self, owner: Address) -> Result<U256> {
        let game_coin = GameCoin::new(self.game_coin_address()?, &self.provider);
        let balance = game_coin.gameCoinBalance(owner).call().await?._0;

        Ok(balance)
    }

    /// Deposits USDT and mints GameCoin for the same amount.
    ///
    /// - Checks the USDT allowance of the GameCoin contract, and approves the necessary amount.
    pub async fn deposit_and_approve_usdt(&self, amount: U256) -> Result<TransactionReceipt> {
        let game_coin_address = self.game_coin_address()?;

        let allowance = self
            .allowance(self.addresses.usdt, self.address(), game_coin_address)
            .await?;
        if allowance < amount {
            log::info!("Approving {} USDT (smallest unit) for GameCoin.", amount);
            self.approve(self.addresses.usdt, game_coin_address, amount)
                .await?;
        }

        let game_coin = GameCoin::new(game_coin_address, &self.provider);
        let req = game_coin.depositAndApproveUSDT(amount);
        let tx = req
            .send()
            .await
            .map_err(contract_error_report)
            .wrap_err("could not deposit USDT")?;

        log::info!("Hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        Ok(receipt)
    }

    /// Spends GameCoin.
    pub async fn use_game_coin(&self, amount: U256) -> Result<TransactionReceipt> {
        let game_coin = GameCoin::new(self.game_coin_address()?, &self.provider);

        let req = game_coin.useGameCoin(amount);
        let tx = req
            .send()
            .await
            .map_err(contract_error_report)
            .wrap_err("could not use GameCoin")?;

        log::info!("Hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        Ok(receipt)
    }
}
