use super::{Token, TokenError, TEST_NETWORK_NATIVE_SYMBOL};

/// Default USD price of the native asset.
pub const ETH_PRICE_USD: f64 = 3500.0;

/// Symbols assumed to be worth exactly one USD.
pub const USD_STABLECOINS: [&str; 2] = ["USDT", "USDC"];

/// Symbols of the native asset, on mainnet and on the test network.
pub const NATIVE_SYMBOLS: [&str; 2] = ["ETH", TEST_NETWORK_NATIVE_SYMBOL];

/// Fixed USD prices used for the wallet total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTable {
    pub eth_price_usd: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            eth_price_usd: ETH_PRICE_USD,
        }
    }
}

impl PriceTable {
    pub fn new(eth_price_usd: f64) -> Self {
        Self { eth_price_usd }
    }

    /// Returns the USD price of one unit of the given symbol, if known.
    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        if NATIVE_SYMBOLS.contains(&symbol) {
            Some(self.eth_price_usd)
        } else if USD_STABLECOINS.contains(&symbol) {
            Some(1.0)
        } else {
            None
        }
    }
}

/// Sums the USD value of the given tokens, with exactly two fractional digits.
///
/// Tokens without a price are skipped. Contributions are added in ascending order so that
/// the result does not depend on the order of `tokens`, and rounding happens only once at the
/// end. An empty list is worth `"0.00"`.
pub fn compute_usd_total(tokens: &[Token], prices: &PriceTable) -> String {
    let mut contributions: Vec<f64> = tokens
        .iter()
        .filter_map(|token| {
            let Some(price) = prices.price_of(&token.symbol) else {
                log::debug!("{}", TokenError::UnrecognizedAsset(token.symbol.clone()));
                return None;
            };

            match token.formatted_balance.parse::<f64>() {
                Ok(amount) => Some(amount * price),
                Err(e) => {
                    log::warn!(
                        "Could not parse {} balance {:?}: {}",
                        token.symbol,
                        token.formatted_balance,
                        e
                    );
                    None
                }
            }
        })
        .collect();
    contributions.sort_by(f64::total_cmp);

    let total = contributions.iter().fold(0.0, |acc, c| acc + c);
    format!("{:.2}", round_cents(total))
}

/// Rounds to whole cents, halves away from zero.
///
/// Formatting alone would round exact binary ties to even.
fn round_cents(total: f64) -> f64 {
    let rounded = (total * 100.0).round() / 100.0;
    // avoid printing "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
