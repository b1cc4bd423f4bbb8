mod cli;
pub use cli::cli;

mod configurations;
pub use configurations::WalletConfig;

mod contracts;
pub use contracts::{
    AssetKind, ContractAddresses, GameCoin, TokenBalance, ERC20, GAME_COIN_DECIMALS, TEST_NETWORK,
};

mod node;
pub use node::{short_address, WalletNode};

pub mod tokens;
pub use tokens::{compute_token_list, compute_usd_total, format_balance, Token, TokenList};

mod transfer;
pub use transfer::{SendError, Transfer};
