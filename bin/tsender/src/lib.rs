pub mod config;
pub mod metrics;

use crate::{config::Config, metrics::Metrics};
use airdrop::{AirdropOutcome, ProviderSender, TransferOrchestrator, TransferRequest};
use ::config::NetworkConfig;
use alloy_primitives::utils::UnitsError;
use form::{FormState, KeyValueStore, StoreError};
use std::time::Instant;
use token::{ProviderTokenReader, TokenInfo, TokenInfoLookup};
use tracing::info;

/// Field values given on the command line.
///
/// Only fields that are present and differ from the cached value are written
/// back to the form store.
#[derive(Debug, Clone, Default)]
pub struct FormUpdate {
    pub token_address: Option<String>,
    pub recipients: Option<String>,
    pub amounts: Option<String>,
}

/// Apply command line values to the cached form, saving each changed field.
pub fn apply_form_update<S>(form: &mut FormState<S>, update: FormUpdate) -> Result<(), StoreError>
where
    S: KeyValueStore,
{
    if let Some(token_address) = update.token_address {
        if token_address != form.token_address() {
            form.set_token_address(token_address)?;
        }
    }
    if let Some(recipients) = update.recipients {
        if recipients != form.recipients() {
            form.set_recipients(recipients)?;
        }
    }
    if let Some(amounts) = update.amounts {
        if amounts != form.amounts() {
            form.set_amounts(amounts)?;
        }
    }
    Ok(())
}

/// Look up name, symbol and decimals of the token in the form.
///
/// Returns `None` when the address is not valid or the token cannot be read.
pub async fn token_info(config: &Config, token_address: &str) -> eyre::Result<Option<TokenInfo>> {
    let provider = client::create_provider(&config.rpc_url).await?;
    let reader = ProviderTokenReader::new(provider);

    let mut lookup = TokenInfoLookup::new();
    Ok(lookup.refresh(&reader, token_address).await.cloned())
}

/// Exact total of `amounts` rendered in whole tokens.
///
/// Malformed lists total zero, as in [`input::compute_total_units`].
pub fn total_in_tokens(info: &TokenInfo, amounts: &str) -> Result<String, UnitsError> {
    info.format_amount(input::compute_total_units(amounts))
}

/// Approve if needed, then airdrop `request` from the account behind `private_key`.
pub async fn send_airdrop(
    config: &Config,
    private_key: &str,
    request: &TransferRequest,
    metrics: &Metrics,
) -> eyre::Result<AirdropOutcome> {
    let provider = client::create_wallet_provider(&config.rpc_url, private_key)?;
    let owner = client::signer_address(private_key)?;
    let chain_id = client::chain_id(&provider).await?;

    info!(
        chain_id,
        chain = NetworkConfig::chain_name(chain_id).unwrap_or("custom"),
        %owner,
        "Connected"
    );

    let orchestrator = TransferOrchestrator::new(
        ProviderTokenReader::new(provider.clone()),
        ProviderSender::new(provider),
        config.network_config(),
        chain_id,
        owner,
    )
    .with_confirmation_timeout(config.confirmation_timeout());

    metrics.record_submission();
    let started = Instant::now();
    let result = orchestrator.submit(request).await;

    match &result {
        Ok(outcome) => metrics.record_success(outcome.approval.is_some(), started.elapsed()),
        Err(e) => metrics.record_failure(e.kind(), started.elapsed()),
    }

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use form::MemoryStore;

    fn token(decimals: u8) -> TokenInfo {
        TokenInfo {
            address: Address::repeat_byte(1),
            name: "Mock Token".to_string(),
            symbol: "MOCK".to_string(),
            decimals,
        }
    }

    #[test]
    fn test_total_in_tokens() {
        let total = total_in_tokens(&token(6), "1000000\n500000").unwrap();
        assert!(total.starts_with("1.5"));

        let total = total_in_tokens(&token(6), "1000000,abc").unwrap();
        assert!(total.starts_with("0.0"));
    }

    #[test]
    fn test_apply_form_update_saves_changes() {
        let mut form = FormState::load(MemoryStore::new()).unwrap();
        apply_form_update(
            &mut form,
            FormUpdate {
                amounts: Some("100,200".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(form.amounts(), "100,200");
        assert_eq!(form.recipients(), "");
        assert_eq!(form.total(), 300.0);

        let store = form.into_store();
        assert_eq!(
            store.get(form::AMOUNTS_KEY).unwrap().as_deref(),
            Some("100,200")
        );
        assert_eq!(store.get(form::RECIPIENTS_KEY).unwrap(), None);
    }
}
