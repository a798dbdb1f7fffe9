//! Address fields.

use crate::InputError;
use alloy_primitives::Address;

/// Length of a `0x`-prefixed hex address.
pub const ADDRESS_LENGTH: usize = 42;

/// Syntactic check: `0x` prefix and exactly 42 characters.
pub fn is_valid_address(raw: &str) -> bool {
    raw.starts_with("0x") && raw.len() == ADDRESS_LENGTH
}

fn parse_address(raw: &str) -> Option<Address> {
    if !is_valid_address(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Parse the token address field.
pub fn parse_token_address(raw: &str) -> Result<Address, InputError> {
    parse_address(raw).ok_or_else(|| InputError::InvalidTokenAddress(raw.to_string()))
}

/// Convert recipient entries into addresses, reporting the first bad entry.
pub fn parse_recipients<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Address>, InputError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.as_ref();
            parse_address(entry).ok_or_else(|| InputError::InvalidRecipient {
                index,
                value: entry.to_string(),
            })
        })
        .collect()
}
