//! Parsing of user-entered airdrop input.
//!
//! Everything in this crate is pure: no I/O and no hidden state, so results
//! can be recomputed on every edit of the underlying text.
//!
//! - [`amount`]: the display total and the exact on-chain amounts
//! - [`address`]: token and recipient addresses

pub mod address;
pub mod amount;

pub use address::{is_valid_address, parse_recipients, parse_token_address};
pub use amount::{compute_total, compute_total_units, parse_amounts, split_entries};

use thiserror::Error;

/// A field of the airdrop input that cannot be used on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid token address {0:?}: expected 0x followed by 40 hex digits")]
    InvalidTokenAddress(String),

    #[error("invalid recipient at entry {}: {value:?}", .index + 1)]
    InvalidRecipient { index: usize, value: String },

    #[error("invalid amount at entry {}: {value:?} is not a whole number of base units", .index + 1)]
    InvalidAmount { index: usize, value: String },
}
