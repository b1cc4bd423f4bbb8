//! Token balance pipeline: which assets to read on a chain, how raw balances are rendered,
//! what the wallet is worth in USD, and the list state derived from all of it.

mod errors;
pub use errors::*;

mod format;
pub use format::*;

mod list;
pub use list::*;

mod normalize;
pub use normalize::*;

mod selector;
pub use selector::*;

mod source;
pub use source::*;

mod token;
pub use token::*;

mod valuation;
pub use valuation::*;
