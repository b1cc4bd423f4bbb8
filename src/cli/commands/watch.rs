use super::token::log_token_list;
use crate::tokens::{ListEvent, ListState, Token, TokenList};
use crate::WalletNode;
use eyre::Result;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

impl WalletNode {
    /// Refreshes the token list every `interval` until cancelled.
    ///
    /// A chain change on the RPC side is picked up on the next refresh. The list is logged
    /// whenever its contents change.
    pub(in crate::cli) async fn watch_balances(
        &self,
        interval: Duration,
        cancellation: CancellationToken,
    ) -> Result<()> {
        let mut list = TokenList::new(self.config.prices);
        let mut chain = self.chain;
        list.push(ListEvent::Connected {
            address: self.address(),
            chain,
        });

        let mut last_shown: Option<(Vec<Token>, String)> = None;
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = cancellation.cancelled() => {
                    list.handle(ListEvent::Disconnected);
                    break;
                }
                _ = ticker.tick() => {
                    match self.get_chain().await {
                        Ok(current) if current != chain => {
                            log::info!("Chain changed from {} to {}.", chain, current);
                            chain = current;
                            list.push(ListEvent::ChainChanged(current));
                        }
                        Ok(_) => list.push(ListEvent::BalancesChanged),
                        Err(e) => {
                            log::warn!("Could not refresh balances: {:#}", e);
                            continue;
                        }
                    }

                    list.run(self).await;
                    if list.state() != ListState::Loaded {
                        continue;
                    }

                    let current = (list.tokens().to_vec(), list.total().to_string());
                    if last_shown.as_ref() != Some(&current) {
                        log_token_list(&list, self);
                        last_shown = Some(current);
                    }
                }
            }
        }

        log::info!("Stopped watching balances.");
        Ok(())
    }
}
