//! Persisted airdrop form fields.
//!
//! The three text fields of the airdrop form (token address, recipients and
//! amounts) are cached in a key-value store so that they survive restarts.
//! Every change overwrites the stored value of its key; loading happens once,
//! when the form is created.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Store key of the token address field.
pub const TOKEN_ADDRESS_KEY: &str = "tokenAddress";
/// Store key of the recipients field.
pub const RECIPIENTS_KEY: &str = "recipients";
/// Store key of the amounts field.
pub const AMOUNTS_KEY: &str = "amounts";

/// Current form fields, backed by a store.
#[derive(Debug)]
pub struct FormState<S> {
    store: S,
    token_address: String,
    recipients: String,
    amounts: String,
}

impl<S> FormState<S>
where
    S: KeyValueStore,
{
    /// Load the cached fields. Keys that were never saved load as empty text.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let token_address = store.get(TOKEN_ADDRESS_KEY)?.unwrap_or_default();
        let recipients = store.get(RECIPIENTS_KEY)?.unwrap_or_default();
        let amounts = store.get(AMOUNTS_KEY)?.unwrap_or_default();

        Ok(Self {
            store,
            token_address,
            recipients,
            amounts,
        })
    }

    pub fn token_address(&self) -> &str {
        &self.token_address
    }

    pub fn recipients(&self) -> &str {
        &self.recipients
    }

    pub fn amounts(&self) -> &str {
        &self.amounts
    }

    /// Display total of the current amounts text.
    pub fn total(&self) -> f64 {
        input::compute_total(&self.amounts)
    }

    pub fn set_token_address(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        self.token_address = value.into();
        self.store.set(TOKEN_ADDRESS_KEY, &self.token_address)
    }

    pub fn set_recipients(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        self.recipients = value.into();
        self.store.set(RECIPIENTS_KEY, &self.recipients)
    }

    pub fn set_amounts(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        self.amounts = value.into();
        self.store.set(AMOUNTS_KEY, &self.amounts)
    }

    /// Empty every field and drop them from the store.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.token_address.clear();
        self.recipients.clear();
        self.amounts.clear();

        for key in [TOKEN_ADDRESS_KEY, RECIPIENTS_KEY, AMOUNTS_KEY] {
            self.store.remove(key)?;
        }
        Ok(())
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
