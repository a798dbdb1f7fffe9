//! Submission state machine.
//!
//! A submission walks through [`Phase::Resolving`], [`Phase::CheckingAllowance`],
//! the optional [`Phase::Approving`], [`Phase::Transferring`] and
//! [`Phase::Confirming`]. Any error ends it in [`Phase::Failed`]; nothing is
//! retried and an approval that was already mined is left in place.

use crate::{AirdropError, Phase, Receipt, TransactionSender, TransferRequest};
use alloy_primitives::{Address, TxHash};
use config::NetworkConfig;
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};
use token::TokenReader;
use tracing::{debug, error, info};

/// How long a single receipt wait may take before the submission fails.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Transactions executed by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropOutcome {
    /// Approval receipt, if the allowance had to be raised
    pub approval: Option<Receipt>,
    /// Airdrop receipt
    pub airdrop: Receipt,
}

/// Drives approve-then-airdrop submissions for one account on one chain.
///
/// At most one submission runs at a time; a concurrent [`submit`] call is
/// rejected with [`AirdropError::Busy`] instead of being queued. Dropping the
/// `submit` future stops waiting and frees the orchestrator, but transactions
/// already broadcast stay in the mempool.
///
/// [`submit`]: TransferOrchestrator::submit
pub struct TransferOrchestrator<R, S> {
    reader: R,
    sender: S,
    network: NetworkConfig,
    chain_id: u64,
    owner: Address,
    confirmation_timeout: Duration,
    busy: AtomicBool,
}

impl<R, S> TransferOrchestrator<R, S>
where
    R: TokenReader,
    S: TransactionSender,
{
    /// Create an orchestrator for `owner`, the account that signs through `sender`.
    pub const fn new(
        reader: R,
        sender: S,
        network: NetworkConfig,
        chain_id: u64,
        owner: Address,
    ) -> Self {
        Self {
            reader,
            sender,
            network,
            chain_id,
            owner,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            busy: AtomicBool::new(false),
        }
    }

    /// Override the per-transaction confirmation timeout.
    pub fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run a submission to completion.
    pub async fn submit(&self, request: &TransferRequest) -> Result<AirdropOutcome, AirdropError> {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            return Err(AirdropError::Busy);
        };

        let started = Instant::now();
        let result = self.run(request).await;

        match &result {
            Ok(outcome) => info!(
                phase = %Phase::Done,
                tx_hash = %outcome.airdrop.tx_hash,
                approved = outcome.approval.is_some(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Airdrop completed"
            ),
            Err(e) => error!(
                phase = %Phase::Failed,
                kind = e.kind().as_str(),
                error = %e,
                "Airdrop failed"
            ),
        }

        result
    }

    async fn run(&self, request: &TransferRequest) -> Result<AirdropOutcome, AirdropError> {
        info!(phase = %Phase::Resolving, chain_id = self.chain_id, "{}", request.description());
        let spender = self
            .network
            .tsender(self.chain_id)
            .ok_or(AirdropError::MissingDeployment {
                chain_id: self.chain_id,
            })?;

        let token = input::parse_token_address(request.token_address())?;
        info!(
            phase = %Phase::CheckingAllowance,
            %token,
            %spender,
            owner = %self.owner,
            "Checking allowance"
        );
        let allowance = self
            .reader
            .allowance(token, self.owner, spender)
            .await
            .map_err(|e| AirdropError::transaction(Phase::CheckingAllowance, e))?;

        let total = request.total();
        let approval = if allowance < total {
            info!(phase = %Phase::Approving, %allowance, %total, "Approving TSender");
            let tx_hash = self
                .sender
                .approve(token, spender, total)
                .await
                .map_err(|e| AirdropError::transaction(Phase::Approving, e))?;
            Some(self.confirm(Phase::Approving, tx_hash).await?)
        } else {
            debug!(%allowance, %total, "Allowance sufficient, skipping approval");
            None
        };

        info!(
            phase = %Phase::Transferring,
            recipients = request.recipients().len(),
            %total,
            "Submitting airdrop"
        );
        let recipients = input::parse_recipients(request.recipients())?;
        let amounts = input::parse_amounts(request.amounts())?;
        let tx_hash = self
            .sender
            .airdrop(spender, token, recipients, amounts, total)
            .await
            .map_err(|e| AirdropError::transaction(Phase::Transferring, e))?;

        info!(phase = %Phase::Confirming, %tx_hash, "Waiting for airdrop confirmation");
        let airdrop = self.confirm(Phase::Confirming, tx_hash).await?;

        Ok(AirdropOutcome { approval, airdrop })
    }

    /// Wait for `tx_hash` to be mined with a successful status.
    async fn confirm(&self, phase: Phase, tx_hash: TxHash) -> Result<Receipt, AirdropError> {
        let receipt = tokio::time::timeout(
            self.confirmation_timeout,
            self.sender.wait_for_receipt(tx_hash),
        )
        .await
        .map_err(|_| AirdropError::ConfirmationTimeout {
            phase,
            tx_hash,
            timeout: self.confirmation_timeout,
        })?
        .map_err(|e| AirdropError::transaction(phase, e))?;

        if !receipt.success {
            return Err(AirdropError::Reverted { phase, tx_hash });
        }

        debug!(
            %tx_hash,
            block_number = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "Transaction confirmed"
        );
        Ok(receipt)
    }
}

/// Holds the busy flag for the lifetime of a submission.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
