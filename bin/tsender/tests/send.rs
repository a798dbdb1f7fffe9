//! Integration tests for the airdrop flow against a local node.
//!
//! The ignored tests need anvil with TSender deployed at its default address
//! and an ERC20 held by the signing account:
//! ```bash
//! TOKEN_ADDRESS=0x... cargo test --package tsender --test send -- --ignored
//! ```

use airdrop::{AirdropError, ErrorKind, TransferRequest};
use setup::{load_private_key, load_token_address, local_config, ANVIL_PRIVATE_KEY};
use tsender::metrics::Metrics;

const RECIPIENTS: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8\n\
                          0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";

#[tokio::test]
async fn test_send_with_invalid_rpc_url() {
    let mut config = local_config("invalid-url");
    config.rpc_url = "not a url".to_string();

    let request = TransferRequest::new(
        "0x0101010101010101010101010101010101010101",
        RECIPIENTS,
        "100,200",
    );
    let result = tsender::send_airdrop(&config, ANVIL_PRIVATE_KEY, &request, &Metrics::new()).await;

    let err = result.expect_err("invalid url must fail");
    assert!(err.to_string().contains("Invalid RPC URL"));
}

#[tokio::test]
async fn test_token_info_invalid_address() {
    let config = local_config("info-invalid");

    // Rejected before any RPC call, so no node is needed.
    let info = tsender::token_info(&config, "0x1234")
        .await
        .expect("lookup never fails on bad input");
    assert!(info.is_none());
}

#[tokio::test]
#[ignore = "requires a local anvil node with a deployed ERC20"]
async fn test_token_info() {
    let config = local_config("info");
    let token = load_token_address();

    let info = tsender::token_info(&config, &token)
        .await
        .expect("node reachable")
        .expect("token info");

    println!("✓ {} ({}), {} decimals", info.name, info.symbol, info.decimals);
    assert!(!info.symbol.is_empty());
}

#[tokio::test]
#[ignore = "requires a local anvil node with TSender and a funded ERC20 deployed"]
async fn test_send_airdrop() {
    let config = local_config("send");
    let private_key = load_private_key();
    let token = load_token_address();

    let request = TransferRequest::new(token, RECIPIENTS, "100\n200");
    println!("Executing: {}", request.description());

    let outcome = tsender::send_airdrop(&config, &private_key, &request, &Metrics::new())
        .await
        .expect("airdrop succeeds");

    println!("✓ Airdrop executed successfully!");
    if let Some(approval) = &outcome.approval {
        println!("  Approval Hash: {:?}", approval.tx_hash);
    }
    println!("  Airdrop Hash: {:?}", outcome.airdrop.tx_hash);
    println!("  Block Number: {:?}", outcome.airdrop.block_number);

    assert!(outcome.airdrop.success);
    assert!(outcome.airdrop.block_number.is_some());
}

#[tokio::test]
#[ignore = "requires a local anvil node"]
async fn test_send_with_invalid_token() {
    let config = local_config("invalid-token");
    let request = TransferRequest::new("0xnot-a-token", RECIPIENTS, "100\n200");

    let err = tsender::send_airdrop(&config, &load_private_key(), &request, &Metrics::new())
        .await
        .expect_err("invalid token must fail");

    let err = err
        .downcast_ref::<AirdropError>()
        .expect("orchestrator error");
    assert_eq!(err.kind(), ErrorKind::Validation);
}
