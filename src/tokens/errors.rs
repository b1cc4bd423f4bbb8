use crate::contracts::AssetKind;
use thiserror::Error;

/// Failures within the balance pipeline.
///
/// None of these reach the user; the affected asset is dropped from the list or the sum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("balance of {kind} is unavailable: {reason}")]
    SourceUnavailable { kind: AssetKind, reason: String },
    #[error("balance {0} would use exponential notation, rendering fixed-point")]
    FormatOverflow(String),
    #[error("no USD price for {0}, excluded from total")]
    UnrecognizedAsset(String),
    #[error("{0} decimals can not be represented")]
    UnsupportedDecimals(u8),
}
