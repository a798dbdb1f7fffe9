//! Configuration types for the airdrop tooling.
//!
//! This crate provides:
//! - Compiled-in TSender deployments per chain
//! - A network map resolving the active chain to its TSender address
//! - A builder for overriding or extending that map

pub mod network;

pub use network::{Deployment, NetworkConfig, NetworkConfigBuilder, DEPLOYMENTS};
