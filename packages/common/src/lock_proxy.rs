//! Lock proxy interface.
//!
//! The lock proxy is the contract that records a cross-chain transfer and
//! emits the message relayed to the destination chain. By the time `Lock`
//! is called, the caller has granted the proxy an allowance of `amount` on
//! `from_asset`; the proxy draws it with a CW20 `TransferFrom`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Execute messages understood by a lock proxy
#[cw_serde]
pub enum LockProxyExecuteMsg {
    /// Lock `amount` of `from_asset` held by `from_address` and forward it
    /// to `to_address` on `to_chain_id`
    Lock {
        /// CW20 contract of the asset being bridged
        from_asset: String,
        /// Account the locked funds are attributed to
        from_address: String,
        /// Destination chain identifier
        to_chain_id: u64,
        /// Recipient on the destination chain (raw bytes, chain-specific)
        to_address: Binary,
        /// Amount to lock
        amount: Uint128,
    },
}
