use super::TokenError;
use alloy::primitives::U256;

/// Significant digits kept when rendering a balance.
pub const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// Integer parts with at least this many digits would be printed with an exponent.
const EXPONENT_MIN_INTEGER_DIGITS: usize = 21;

/// Non-zero values below `10^-6` would be printed with an exponent.
const EXPONENT_MAX_FRACTION_ZEROS: usize = 6;

/// Renders `value / 10^decimals` as a plain decimal string.
///
/// The division is done on `U256`, so no precision is lost before rendering.
/// Values that would use exponential notation as a float are printed exactly in fixed-point
/// with at least one fractional digit, everything else is rounded to
/// [`MAX_SIGNIFICANT_DIGITS`] significant digits. Trailing zeros are stripped in both cases.
///
/// ```
/// use alloy::primitives::U256;
/// use gamecoin_wallet::format_balance;
///
/// assert_eq!(format_balance(U256::from(1_500_000u64), 6).unwrap(), "1.5");
/// assert_eq!(format_balance(U256::ZERO, 18).unwrap(), "0");
/// ```
pub fn format_balance(value: U256, decimals: u8) -> Result<String, TokenError> {
    if value.is_zero() {
        return Ok("0".to_string());
    }

    let decimals = decimals as usize;
    let scale = pow10(decimals).ok_or(TokenError::UnsupportedDecimals(decimals as u8))?;

    if would_use_exponent(value, scale) {
        log::debug!("{}", TokenError::FormatOverflow(value.to_string()));
        let mut fixed = trim_fraction(to_fixed_point(value, scale, decimals));
        if !fixed.contains('.') {
            fixed.push_str(".0");
        }
        return Ok(fixed);
    }

    let rounded = round_significant(value, MAX_SIGNIFICANT_DIGITS);
    Ok(trim_fraction(to_fixed_point(rounded, scale, decimals)))
}

/// `10^exp`, or `None` if it does not fit in 256 bits.
fn pow10(exp: usize) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

fn would_use_exponent(value: U256, scale: U256) -> bool {
    let too_large = pow10(EXPONENT_MIN_INTEGER_DIGITS).is_some_and(|limit| value / scale >= limit);
    let too_small = pow10(EXPONENT_MAX_FRACTION_ZEROS)
        .and_then(|factor| value.checked_mul(factor))
        .is_some_and(|shifted| shifted < scale);

    too_large || too_small
}

/// Rounds half-up so that at most `digits` leading digits are non-zero.
fn round_significant(value: U256, digits: usize) -> U256 {
    let len = value.to_string().len();
    if len <= digits {
        return value;
    }
    let Some(divisor) = pow10(len - digits) else {
        return value;
    };

    let (quotient, remainder) = (value / divisor, value % divisor);
    let quotient = if remainder >= divisor / U256::from(2u8) {
        quotient + U256::from(1u8)
    } else {
        quotient
    };

    // rounding up at the very top of the range can overflow, truncate instead
    quotient
        .checked_mul(divisor)
        .unwrap_or_else(|| (value / divisor) * divisor)
}

fn to_fixed_point(value: U256, scale: U256, decimals: usize) -> String {
    let integer = value / scale;
    if decimals == 0 {
        return integer.to_string();
    }

    let fraction = (value % scale).to_string();
    format!("{integer}.{fraction:0>decimals$}")
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

/// Formats a GameCoin balance with two truncated fractional digits, `"0.00"` if zero.
pub fn format_game_coin_balance(balance: U256) -> String {
    if balance.is_zero() {
        return "0.00".to_string();
    }

    let decimals = crate::contracts::GAME_COIN_DECIMALS as usize;
    let divisor = U256::from(10u64.pow(decimals as u32));
    let integer = balance / divisor;
    let fraction = (balance % divisor).to_string();
    let fraction = format!("{fraction:0>decimals$}");

    format!("{}.{}", integer, &fraction[..2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::utils::parse_units;

    fn fmt(value: u128, decimals: u8) -> String {
        format_balance(U256::from(value), decimals).unwrap()
    }

    #[test]
    fn test_zero_is_zero_for_any_decimals() {
        for decimals in [0u8, 6, 9, 18, 77, 255] {
            assert_eq!(format_balance(U256::ZERO, decimals).unwrap(), "0");
        }
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(fmt(2_000_000_000_000_000_000, 18), "2");
        assert_eq!(fmt(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(fmt(150_500_000, 6), "150.5");
        assert_eq!(fmt(42, 0), "42");
    }

    #[test]
    fn test_significant_digits() {
        // 1.234567890123456789 ETH
        assert_eq!(fmt(1_234_567_890_123_456_789, 18), "1.23456789012346");
        // rounding carries into the integer part
        assert_eq!(fmt(9_999_999_999_999_999_999, 18), "10");
    }

    #[test]
    fn test_exponent_range_is_fixed_point() {
        // 1 wei
        assert_eq!(fmt(1, 18), "0.000000000000000001");
        // 10^22 ETH
        let large = U256::from(10u8).pow(U256::from(40u8));
        assert_eq!(
            format_balance(large, 18).unwrap(),
            "10000000000000000000000.0"
        );
        // right at the lower boundary there is no exponent
        assert_eq!(fmt(1_000_000_000_000, 18), "0.000001");
    }

    #[test]
    fn test_unsupported_decimals() {
        assert_eq!(
            format_balance(U256::from(1u8), 78),
            Err(TokenError::UnsupportedDecimals(78))
        );
    }

    #[test]
    fn test_parses_back_within_precision() {
        let cases: [(u128, u8); 5] = [
            (123_456_789, 6),
            (1_000_000_000_000_000_001, 18),
            (987_654_321_987_654_321_987, 18),
            (5, 9),
            (u64::MAX as u128, 8),
        ];
        for (value, decimals) in cases {
            let value = U256::from(value);
            let formatted = format_balance(value, decimals).unwrap();
            let parsed: U256 = parse_units(&formatted, decimals).unwrap().into();

            let diff = if parsed > value {
                parsed - value
            } else {
                value - parsed
            };
            // relative error within the significant-digit bound
            assert!(
                diff * U256::from(10u64.pow(MAX_SIGNIFICANT_DIGITS as u32 - 1)) <= value,
                "{value} with {decimals} decimals rendered as {formatted}"
            );
        }
    }

    #[test]
    fn test_game_coin_balance() {
        assert_eq!(format_game_coin_balance(U256::ZERO), "0.00");
        assert_eq!(format_game_coin_balance(U256::from(1_000_000u64)), "1.00");
        assert_eq!(format_game_coin_balance(U256::from(1_239_999u64)), "1.23");
        assert_eq!(format_game_coin_balance(U256::from(50_000u64)), "0.05");
    }
}
