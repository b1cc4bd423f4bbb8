use alloy::{hex::FromHex, primitives::B256, primitives::U256, transports::http::reqwest::Url};
use eyre::{eyre, Result};
use std::str::FromStr;

/// `value_parser` to parse a `str` to `Url`.
pub fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(Into::into)
}

/// `value_parser` to parse a hexadecimal `str` to 256-bit type `B256`.
pub fn parse_secret_key(value: &str) -> Result<B256> {
    B256::from_hex(value).map_err(Into::into)
}

/// `value_parser` to parse an amount in the smallest unit, decimal or `0x`-prefixed hex.
pub fn parse_raw_amount(value: &str) -> Result<U256> {
    U256::from_str(value).map_err(|e| eyre!("invalid amount {}: {}", value, e))
}

/// `value_parser` to parse a non-negative USD price.
pub fn parse_price(value: &str) -> Result<f64> {
    let price = value.parse::<f64>()?;
    if !price.is_finite() || price < 0.0 {
        return Err(eyre!("price must be a non-negative number, got {}", value));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let url_str = "https://example.com";
        let result = parse_url(url_str);
        assert!(result.is_ok());
        let url = result.unwrap();
        assert_eq!(url, Url::parse(url_str).unwrap());
    }

    #[test]
    fn test_parse_secret_key() {
        let hex_str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        let result = parse_secret_key(hex_str);
        assert!(result.is_ok());

        let secret_key = result.unwrap();
        assert_eq!(secret_key, B256::from_hex(hex_str).unwrap());
    }

    #[test]
    fn test_parse_raw_amount() {
        assert_eq!(parse_raw_amount("1000000").unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_raw_amount("0xf4240").unwrap(), U256::from(1_000_000u64));
        assert!(parse_raw_amount("1.5").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("3500").unwrap(), 3500.0);
        assert!(parse_price("-1").is_err());
        assert!(parse_price("NaN").is_err());
    }
}
