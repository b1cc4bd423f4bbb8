use crate::node::short_address;
use crate::tokens::{ListEvent, TokenList};
use crate::transfer::{SendError, Transfer};
use crate::WalletNode;
use eyre::Result;
use serde_json::json;

impl WalletNode {
    /// Loads the token list of the wallet on the connected chain.
    pub(in crate::cli) async fn load_token_list(&self) -> TokenList {
        let mut list = TokenList::new(self.config.prices);
        list.apply(
            self,
            ListEvent::Connected {
                address: self.address(),
                chain: self.chain,
            },
        )
        .await;

        list
    }

    /// Display token balances and their USD total.
    pub(in crate::cli) async fn display_balance(&self, as_json: bool) -> Result<()> {
        let list = self.load_token_list().await;

        if as_json {
            let output = json!({
                "address": self.address(),
                "chainId": self.chain.id(),
                "tokens": list.tokens(),
                "totalUsd": list.total(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            log_token_list(&list, self);
        }

        Ok(())
    }

    /// Sends a token from the list, reporting failures inline.
    pub(in crate::cli) async fn send(
        &self,
        symbol: &str,
        recipient: &str,
        amount: &str,
    ) -> Result<()> {
        let list = self.load_token_list().await;

        let mut prepared = None;
        let selected = list.position(symbol).is_some_and(|index| {
            list.activate(index, |token| {
                prepared = Some(Transfer::prepare(token, recipient, amount));
            })
        });
        if !selected {
            log::error!("{}", SendError::UnknownToken(symbol.to_string()));
            return Ok(());
        }

        let transfer = match prepared {
            Some(Ok(transfer)) => transfer,
            Some(Err(e)) => {
                log::error!("{}", e);
                return Ok(());
            }
            None => return Ok(()),
        };

        match self.submit_transfer(&transfer).await {
            Ok(receipt) if receipt.status() => {
                log::info!("Sent! Transaction: {}", receipt.transaction_hash)
            }
            Ok(receipt) => log::error!("Transaction reverted: {}", receipt.transaction_hash),
            Err(e) => log::error!("Send failed: {:#}", e),
        }

        Ok(())
    }
}

/// Logs the list with its header and total.
pub(in crate::cli) fn log_token_list(list: &TokenList, node: &WalletNode) {
    let chain = list.connection().map(|(_, chain)| chain).unwrap_or(node.chain);
    log::info!(
        "Your balances ({} on {}):",
        short_address(&node.address()),
        chain
    );

    if list.tokens().is_empty() {
        log::warn!("No tokens found.");
    }
    for token in list.tokens() {
        log::info!("{}", token);
    }
    log::info!("Wallet Balance: ${}", list.total());
}
