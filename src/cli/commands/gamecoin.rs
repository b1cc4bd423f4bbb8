use crate::tokens::format_game_coin_balance;
use crate::WalletNode;
use alloy::primitives::U256;
use alloy::rpc::types::TransactionReceipt;
use eyre::Result;

impl WalletNode {
    /// Display the GameCoin balance.
    pub(in crate::cli) async fn display_game_coin_balance(&self) -> Result<()> {
        let balance = self.game_coin_balance(self.address()).await?;
        log::info!("GameCoin Balance: {}", format_game_coin_balance(balance));

        Ok(())
    }

    /// Deposit USDT for GameCoin, reporting failures inline.
    pub(in crate::cli) async fn deposit_game_coin(&self, amount: U256) -> Result<()> {
        let result = self.deposit_and_approve_usdt(amount).await;
        report(result, "Deposited USDT and minted GameCoin.", "USDT deposit failed");

        Ok(())
    }

    /// Spend GameCoin, reporting failures inline.
    pub(in crate::cli) async fn spend_game_coin(&self, amount: U256) -> Result<()> {
        let result = self.use_game_coin(amount).await;
        report(result, "Used GameCoin.", "Using GameCoin failed");

        Ok(())
    }
}

fn report(result: Result<TransactionReceipt>, success: &str, failure: &str) {
    match result {
        Ok(receipt) if receipt.status() => {
            log::info!("{} Transaction: {}", success, receipt.transaction_hash)
        }
        Ok(receipt) => log::error!("{}: transaction {} reverted", failure, receipt.transaction_hash),
        Err(e) => log::error!("{}: {:#}", failure, e),
    }
}
