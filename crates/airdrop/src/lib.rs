//! Approve-then-airdrop transaction flow.
//!
//! A submission resolves the TSender contract of the active chain, makes sure
//! it may spend the airdrop total, and then hands the whole batch to
//! `airdropERC20` in a single transaction.

pub mod orchestrator;
pub mod request;
pub mod sender;

pub use orchestrator::{AirdropOutcome, TransferOrchestrator, DEFAULT_CONFIRMATION_TIMEOUT};
pub use request::TransferRequest;
pub use sender::ProviderSender;

use alloy_primitives::{Address, TxHash, U256};
use input::InputError;
use std::{fmt, future::Future, time::Duration};
use thiserror::Error;

/// Write access to the chain.
pub trait TransactionSender: Send + Sync {
    /// Broadcast `approve(spender, amount)` on `token`.
    ///
    /// Returns once the transaction is accepted by the node, not when mined.
    fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = eyre::Result<TxHash>> + Send;

    /// Broadcast `airdropERC20(token, recipients, amounts, total)` on `tsender`.
    fn airdrop(
        &self,
        tsender: Address,
        token: Address,
        recipients: Vec<Address>,
        amounts: Vec<U256>,
        total: U256,
    ) -> impl Future<Output = eyre::Result<TxHash>> + Send;

    /// Wait until the transaction is mined.
    fn wait_for_receipt(&self, tx_hash: TxHash)
        -> impl Future<Output = eyre::Result<Receipt>> + Send;
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: u64,
    /// False if execution reverted
    pub success: bool,
}

/// Step of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Resolving,
    CheckingAllowance,
    Approving,
    Transferring,
    Confirming,
    Done,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolving => "resolving",
            Self::CheckingAllowance => "checking allowance",
            Self::Approving => "approving",
            Self::Transferring => "transferring",
            Self::Confirming => "confirming",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Broad class of an [`AirdropError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing is configured for the active chain
    Configuration,
    /// User input cannot be used
    Validation,
    /// The chain or the wallet rejected or failed a call
    Transaction,
    /// Another submission is still running
    Busy,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Transaction => "transaction",
            Self::Busy => "busy",
        }
    }
}

#[derive(Error, Debug)]
pub enum AirdropError {
    #[error("No TSender contract configured for chain {chain_id}")]
    MissingDeployment { chain_id: u64 },

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("{phase} failed: {source}")]
    Transaction {
        phase: Phase,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Transaction {tx_hash} reverted while {phase}")]
    Reverted { phase: Phase, tx_hash: TxHash },

    #[error("Transaction {tx_hash} not confirmed within {timeout:?} while {phase}")]
    ConfirmationTimeout {
        phase: Phase,
        tx_hash: TxHash,
        timeout: Duration,
    },

    #[error("Another airdrop is already in progress")]
    Busy,
}

impl AirdropError {
    pub(crate) fn transaction(phase: Phase, error: eyre::Report) -> Self {
        Self::Transaction {
            phase,
            source: error.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDeployment { .. } => ErrorKind::Configuration,
            Self::InvalidInput(_) => ErrorKind::Validation,
            Self::Transaction { .. }
            | Self::Reverted { .. }
            | Self::ConfirmationTimeout { .. } => ErrorKind::Transaction,
            Self::Busy => ErrorKind::Busy,
        }
    }
}
