//! Message types for the poly wrapper contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address; when omitted the built-in default owner applies
    pub owner: Option<String>,
    /// Fee collector address (can also be set later by the owner)
    pub fee_collector: Option<String>,
    /// Lock proxy contract address (can also be set later by the owner)
    pub lock_proxy: Option<String>,
    /// This chain's own identifier; locks towards it are rejected
    pub chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Access Control & Configuration (owner only)
    // ========================================================================
    /// Hand ownership to `new_owner`
    TransferOwnership { new_owner: String },

    /// Set the account allowed to extract accumulated fees
    SetFeeCollector { fee_collector: String },

    /// Set the lock proxy contract that receives forwarded transfers
    SetLockProxy { lock_proxy: String },

    /// Stop `Lock` and `SpeedUp`
    Pause {},

    /// Resume `Lock` and `SpeedUp`
    Unpause {},

    /// Send native coins held by this contract to `recipient`
    RecoverNative {
        denom: String,
        amount: Uint128,
        recipient: String,
    },

    // ========================================================================
    // Fees (fee collector only)
    // ========================================================================
    /// Send this contract's whole balance of `asset` to the fee collector
    ExtractFee { asset: String },

    // ========================================================================
    // Cross-Chain Transfers (caller must be `from_address`)
    // ========================================================================
    /// Pull `amount` of `from_asset` from the caller, keep `fee`, and lock
    /// the rest through the lock proxy
    ///
    /// The caller must have granted this contract an allowance of `amount`.
    Lock {
        /// CW20 contract of the asset being bridged
        from_asset: String,
        /// Depositor; must be the message sender
        from_address: String,
        /// Destination chain identifier
        to_chain_id: u64,
        /// Recipient on the destination chain (raw bytes)
        to_address: Binary,
        /// Gross amount pulled from the depositor
        amount: Uint128,
        /// Part of `amount` kept as fee; must be below `amount`
        fee: Uint128,
        /// Caller-chosen correlation id, echoed in the lock event
        id: Uint128,
    },

    /// Pay an additional fee for an already submitted cross-chain transfer
    SpeedUp {
        /// CW20 contract the fee is paid in
        from_asset: String,
        /// Payer; must be the message sender
        from_address: String,
        /// Hash of the transfer being sped up
        tx_hash: Binary,
        /// Fee amount pulled from the payer
        fee: Uint128,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current owner
    #[returns(OwnerResponse)]
    Owner {},

    /// Fee collector, if set
    #[returns(FeeCollectorResponse)]
    FeeCollector {},

    /// Lock proxy, if set
    #[returns(LockProxyResponse)]
    LockProxy {},

    /// Whether the wrapper is paused
    #[returns(PausedResponse)]
    Paused {},

    /// This chain's identifier
    #[returns(ChainIdResponse)]
    ChainId {},

    /// All of the above
    #[returns(ConfigResponse)]
    Config {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct FeeCollectorResponse {
    pub fee_collector: Option<Addr>,
}

#[cw_serde]
pub struct LockProxyResponse {
    pub lock_proxy: Option<Addr>,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct ChainIdResponse {
    pub chain_id: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub fee_collector: Option<Addr>,
    pub lock_proxy: Option<Addr>,
    pub paused: bool,
    pub chain_id: u64,
}
