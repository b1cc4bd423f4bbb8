use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface GameCoin {
        function gameCoinBalance(address owner) external view returns (uint256);
        function depositAndApproveUSDT(uint256 amount) external;
        function useGameCoin(uint256 amount) external;
    }
}

/// GameCoin uses the same precision as USDT.
pub const GAME_COIN_DECIMALS: u8 = 6;

/// Kind of asset within the wallet token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// The chain's base currency.
    Native,
    /// Tether USD.
    Usdt,
    /// USD Coin.
    Usdc,
}

impl AssetKind {
    /// Symbol used when the balance source does not report one.
    pub fn default_symbol(&self) -> &'static str {
        match self {
            AssetKind::Native => "ETH",
            AssetKind::Usdt => "USDT",
            AssetKind::Usdc => "USDC",
        }
    }

    /// Human-readable name, qualified on the test network.
    pub fn name(&self, is_test_network: bool) -> &'static str {
        match (self, is_test_network) {
            (AssetKind::Native, false) => "Ethereum",
            (AssetKind::Native, true) => "Sepolia ETH",
            (AssetKind::Usdt, false) => "Tether USD",
            (AssetKind::Usdt, true) => "Sepolia USDT",
            (AssetKind::Usdc, _) => "USD Coin",
        }
    }

    pub fn icon_path(&self) -> &'static str {
        match self {
            AssetKind::Native => "/images/tokens/eth.png",
            AssetKind::Usdt => "/images/tokens/usdt.png",
            AssetKind::Usdc => "/images/tokens/usdc.png",
        }
    }

    /// Decimals of the asset, used when the balance source does not report them.
    pub fn default_decimals(&self) -> u8 {
        match self {
            AssetKind::Native => 18,
            AssetKind::Usdt | AssetKind::Usdc => 6,
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_symbol())
    }
}
