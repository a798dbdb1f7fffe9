//! Contract bindings for all external contracts.
//!
//! This crate consolidates the Solidity interfaces the airdrop flow talks to:
//! - ERC20 tokens (allowance, approval, metadata)
//! - TSender batch-transfer contract
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod token;
pub mod tsender;
