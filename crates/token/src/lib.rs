//! ERC20 token reads.
//!
//! This crate provides the read-only side of the token contract: the
//! allowance check used before an airdrop, and the name/symbol/decimals shown
//! next to the token address field.

pub mod reader;

use alloy_primitives::{
    utils::{format_units, UnitsError},
    Address, U256,
};
use std::future::Future;
use tracing::{debug, warn};

pub use reader::ProviderTokenReader;

/// Display metadata of an ERC20 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// Token contract address
    pub address: Address,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Number of decimals of one whole token
    pub decimals: u8,
}

impl TokenInfo {
    /// Render a base-unit amount in whole tokens.
    pub fn format_amount(&self, amount: U256) -> Result<String, UnitsError> {
        format_units(amount, self.decimals)
    }
}

/// Read access to ERC20 token contracts.
pub trait TokenReader: Send + Sync {
    /// Amount `spender` may currently transfer on behalf of `owner`.
    fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = eyre::Result<U256>> + Send;

    /// Token name.
    fn name(&self, token: Address) -> impl Future<Output = eyre::Result<String>> + Send;

    /// Token symbol.
    fn symbol(&self, token: Address) -> impl Future<Output = eyre::Result<String>> + Send;

    /// Token decimals.
    fn decimals(&self, token: Address) -> impl Future<Output = eyre::Result<u8>> + Send;
}

/// Read name, symbol and decimals of a token concurrently.
pub async fn fetch_token_info<R>(reader: &R, token: Address) -> eyre::Result<TokenInfo>
where
    R: TokenReader,
{
    let (name, symbol, decimals) = tokio::try_join!(
        reader.name(token),
        reader.symbol(token),
        reader.decimals(token)
    )?;

    Ok(TokenInfo {
        address: token,
        name,
        symbol,
        decimals,
    })
}

/// Token info panel state.
///
/// Holds the metadata of the last token address it was refreshed with.
/// Failures only clear the panel; they are never propagated.
#[derive(Debug, Clone, Default)]
pub struct TokenInfoLookup {
    current: Option<TokenInfo>,
}

impl TokenInfoLookup {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Info currently on display.
    pub const fn current(&self) -> Option<&TokenInfo> {
        self.current.as_ref()
    }

    /// Look up the token behind `raw` and replace the displayed info.
    pub async fn refresh<R>(&mut self, reader: &R, raw: &str) -> Option<&TokenInfo>
    where
        R: TokenReader,
    {
        self.current = match input::parse_token_address(raw) {
            Ok(token) => match fetch_token_info(reader, token).await {
                Ok(info) => {
                    debug!(token = %token, name = %info.name, symbol = %info.symbol, "Fetched token info");
                    Some(info)
                }
                Err(e) => {
                    warn!(token = %token, error = %e, "Failed to fetch token info");
                    None
                }
            },
            Err(e) => {
                debug!(error = %e, "Skipping token info lookup");
                None
            }
        };

        self.current.as_ref()
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::TokenReader;
    use alloy_primitives::{Address, U256};

    /// Reader returning fixed metadata, or failing every call.
    #[derive(Clone)]
    pub struct StaticReader {
        pub fail: bool,
    }

    impl TokenReader for StaticReader {
        async fn allowance(&self, _: Address, _: Address, _: Address) -> eyre::Result<U256> {
            if self.fail {
                eyre::bail!("execution reverted");
            }
            Ok(U256::from(1000))
        }

        async fn name(&self, _: Address) -> eyre::Result<String> {
            if self.fail {
                eyre::bail!("execution reverted");
            }
            Ok("Mock Token".to_string())
        }

        async fn symbol(&self, _: Address) -> eyre::Result<String> {
            Ok("MOCK".to_string())
        }

        async fn decimals(&self, _: Address) -> eyre::Result<u8> {
            Ok(18)
        }
    }
}
