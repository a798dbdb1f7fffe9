use crate::{Receipt, TransactionSender};
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::{PendingTransactionBuilder, Provider};
use binding::{token::IERC20, tsender::ITSender};
use eyre::Result;
use tracing::debug;

/// Transaction sender backed by a wallet provider.
///
/// The provider must be able to sign for the account that owns the tokens.
#[derive(Clone)]
pub struct ProviderSender<P> {
    provider: P,
}

impl<P> ProviderSender<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> TransactionSender for ProviderSender<P>
where
    P: Provider + Clone,
{
    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let contract = IERC20::new(token, &self.provider);
        let pending_tx = contract.approve(spender, amount).send().await?;

        let tx_hash = *pending_tx.tx_hash();
        debug!(%tx_hash, %token, %spender, %amount, "Approval broadcast");
        Ok(tx_hash)
    }

    async fn airdrop(
        &self,
        tsender: Address,
        token: Address,
        recipients: Vec<Address>,
        amounts: Vec<U256>,
        total: U256,
    ) -> Result<TxHash> {
        let contract = ITSender::new(tsender, &self.provider);
        let pending_tx = contract
            .airdropERC20(token, recipients, amounts, total)
            .send()
            .await?;

        let tx_hash = *pending_tx.tx_hash();
        debug!(%tx_hash, %tsender, %token, %total, "Airdrop broadcast");
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await?;

        Ok(Receipt {
            tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            success: receipt.status(),
        })
    }
}
