use crate::TokenReader;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::token::IERC20;
use eyre::Result;
use tracing::debug;

/// Token reader backed by an RPC provider.
#[derive(Clone)]
pub struct ProviderTokenReader<P> {
    provider: P,
}

impl<P> ProviderTokenReader<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> TokenReader for ProviderTokenReader<P>
where
    P: Provider + Clone,
{
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        debug!(
            "Querying allowance: token={}, owner={}, spender={}",
            token, owner, spender
        );

        let contract = IERC20::new(token, &self.provider);
        let amount = contract.allowance(owner, spender).call().await?;
        Ok(amount)
    }

    async fn name(&self, token: Address) -> Result<String> {
        let contract = IERC20::new(token, &self.provider);
        Ok(contract.name().call().await?)
    }

    async fn symbol(&self, token: Address) -> Result<String> {
        let contract = IERC20::new(token, &self.provider);
        Ok(contract.symbol().call().await?)
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, &self.provider);
        Ok(contract.decimals().call().await?)
    }
}
