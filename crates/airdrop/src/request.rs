use alloy_primitives::U256;
use input::{compute_total_units, split_entries};

/// One airdrop submission, captured from the form text.
///
/// Recipients and amounts are kept as the split text entries; they are only
/// converted to on-chain types when the airdrop transaction is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    token_address: String,
    recipients: Vec<String>,
    amounts: Vec<String>,
    total: U256,
}

impl TransferRequest {
    pub fn new(token_address: impl Into<String>, recipients: &str, amounts: &str) -> Self {
        Self {
            token_address: token_address.into(),
            recipients: split_entries(recipients)
                .into_iter()
                .map(String::from)
                .collect(),
            amounts: split_entries(amounts).into_iter().map(String::from).collect(),
            total: compute_total_units(amounts),
        }
    }

    pub fn token_address(&self) -> &str {
        &self.token_address
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn amounts(&self) -> &[String] {
        &self.amounts
    }

    /// Sum of all amounts in base units, zero if any amount is malformed.
    pub const fn total(&self) -> U256 {
        self.total
    }

    /// Whether every recipient has exactly one amount.
    pub fn is_aligned(&self) -> bool {
        self.recipients.len() == self.amounts.len()
    }

    pub fn description(&self) -> String {
        format!(
            "Airdrop {} units of {} to {} recipients",
            self.total,
            self.token_address,
            self.recipients.len()
        )
    }
}
