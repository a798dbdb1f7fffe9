//! TSender batch-transfer contract bindings.
//!
//! TSender pulls `totalAmount` from the caller with `transferFrom` and fans it
//! out to the recipients, so the caller must have approved at least
//! `totalAmount` beforehand.

use alloy_sol_types::sol;

sol! {
    /// TSender - gas optimized ERC20 airdrop contract
    #[sol(rpc)]
    interface ITSender {
        /// Send `amounts[i]` of `tokenAddress` to `recipients[i]`.
        ///
        /// Reverts if the arrays differ in length or if the amounts do not add
        /// up to `totalAmount`.
        function airdropERC20(
            address tokenAddress,
            address[] calldata recipients,
            uint256[] calldata amounts,
            uint256 totalAmount
        ) external;

    }
}
