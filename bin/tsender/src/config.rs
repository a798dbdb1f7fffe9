use alloy_primitives::Address;
use ::config::{NetworkConfig, NetworkConfigBuilder};
use serde::{Deserialize, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::info;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint url
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// File caching the form fields between runs
    #[serde(default = "default_form_path")]
    pub form_path: PathBuf,

    /// Upper bound for each receipt wait, in seconds
    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,

    /// TSender deployments added to or overriding the built-in ones
    #[serde(default)]
    pub deployments: Vec<DeploymentOverride>,
}

/// A `[[deployments]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentOverride {
    pub chain_id: u64,
    pub tsender: Address,
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_string()
}

fn default_form_path() -> PathBuf {
    PathBuf::from(".tsender/form.json")
}

const fn default_confirmation_timeout_secs() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            form_path: default_form_path(),
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
            deployments: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;

        Ok(config)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => Ok(config),
            Err(e)
                if e.downcast_ref::<io::Error>()
                    .is_some_and(|err| err.kind() == io::ErrorKind::NotFound) =>
            {
                info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Built-in deployments with the configured overrides applied.
    pub fn network_config(&self) -> NetworkConfig {
        self.deployments
            .iter()
            .fold(NetworkConfigBuilder::builtin(), |builder, deployment| {
                builder.tsender(deployment.chain_id, deployment.tsender)
            })
            .build()
    }

    pub const fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }
}
