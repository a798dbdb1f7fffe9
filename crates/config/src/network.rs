//! Network configuration for the batch-transfer contract.
//!
//! Maps a chain id to the address of the TSender contract deployed on it. A
//! chain that is absent from the map cannot be used for airdrops.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A known TSender deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Chain ID
    pub chain_id: u64,
    /// Human-readable chain name
    pub name: &'static str,
    /// TSender contract address
    pub tsender: Address,
}

/// TSender deployments shipped with the binary.
pub const DEPLOYMENTS: &[Deployment] = &[
    Deployment {
        chain_id: 1,
        name: "ethereum",
        tsender: address!("0x3aD9F29AB266E4828450B33df7a9B9D7355Cd821"),
    },
    Deployment {
        chain_id: 324,
        name: "zksync",
        tsender: address!("0x7e645Ea4386deb2E9e510D805461aA12db83fb5E"),
    },
    Deployment {
        chain_id: 11155111,
        name: "sepolia",
        tsender: address!("0xa27c5C77DA713f410F9b15d4B0c52CAe597a973a"),
    },
    // First contract deployed by the default anvil account.
    Deployment {
        chain_id: 31337,
        name: "anvil",
        tsender: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
    },
];

/// Chain id to TSender address map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    tsender: BTreeMap<u64, Address>,
}

impl NetworkConfig {
    /// Configuration with every built-in deployment.
    pub fn builtin() -> Self {
        Self {
            tsender: DEPLOYMENTS
                .iter()
                .map(|deployment| (deployment.chain_id, deployment.tsender))
                .collect(),
        }
    }

    /// Configuration without any deployment.
    pub const fn empty() -> Self {
        Self {
            tsender: BTreeMap::new(),
        }
    }

    /// Resolve the TSender address for a chain.
    pub fn tsender(&self, chain_id: u64) -> Option<Address> {
        self.tsender.get(&chain_id).copied()
    }

    /// Name of a built-in chain, if it is one.
    pub fn chain_name(chain_id: u64) -> Option<&'static str> {
        DEPLOYMENTS
            .iter()
            .find(|deployment| deployment.chain_id == chain_id)
            .map(|deployment| deployment.name)
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with the built-in deployments.
    pub fn builtin() -> Self {
        Self {
            config: NetworkConfig::builtin(),
        }
    }

    /// Start with no deployments.
    pub const fn empty() -> Self {
        Self {
            config: NetworkConfig::empty(),
        }
    }

    /// Add or override the TSender address of a chain.
    pub fn tsender(mut self, chain_id: u64, address: Address) -> Self {
        self.config.tsender.insert(chain_id, address);
        self
    }

    /// Remove a chain from the map.
    pub fn without(mut self, chain_id: u64) -> Self {
        self.config.tsender.remove(&chain_id);
        self
    }

    /// Build the network configuration.
    pub fn build(self) -> NetworkConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config() {
        let config = NetworkConfig::builtin();
        assert_eq!(
            config.tsender(1),
            Some(address!("0x3aD9F29AB266E4828450B33df7a9B9D7355Cd821"))
        );
        assert_eq!(
            config.tsender(31337),
            Some(address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"))
        );
        for deployment in DEPLOYMENTS {
            assert_eq!(config.tsender(deployment.chain_id), Some(deployment.tsender));
        }
    }

    #[test]
    fn test_unknown_chain() {
        let config = NetworkConfig::builtin();
        assert_eq!(config.tsender(424242), None);
        assert_eq!(NetworkConfig::chain_name(424242), None);
        assert_eq!(NetworkConfig::chain_name(11155111), Some("sepolia"));
    }

    #[test]
    fn test_custom_config_builder() {
        let custom = address!("1111111111111111111111111111111111111111");

        let config = NetworkConfigBuilder::builtin()
            .tsender(1, custom)
            .tsender(8453, custom)
            .without(324)
            .build();

        assert_eq!(config.tsender(1), Some(custom));
        assert_eq!(config.tsender(8453), Some(custom));
        assert_eq!(config.tsender(324), None);
    }

    #[test]
    fn test_empty_config() {
        let config = NetworkConfigBuilder::empty().build();
        assert_eq!(config, NetworkConfig::empty());
        assert_eq!(config.tsender(1), None);
    }
}
