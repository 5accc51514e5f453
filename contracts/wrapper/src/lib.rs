//! Poly Wrapper Contract - Fee-Charging Entry to the Cross-Chain Lock Proxy
//!
//! This contract sits in front of a lock proxy on TerraClassic. Users lock
//! CW20 tokens through it; it keeps a fee and forwards the rest to the
//! lock proxy, which emits the cross-chain transfer.
//!
//! # Lock Flow
//! 1. User grants this contract a CW20 allowance and calls `Lock`
//! 2. The contract pulls the gross amount from the user
//! 3. It grants the lock proxy an allowance for the net amount and calls
//!    the proxy's `Lock`, attributing the transfer to itself
//! 4. The fee stays in the contract until the fee collector extracts it
//!
//! # Speed-Up
//! `SpeedUp` pulls an extra fee for a transfer already in flight; relayers
//! match it to the transfer by `tx_hash`.
//!
//! # Security
//! - Owner-only configuration and pause switch
//! - Callers can only lock or pay fees from their own account
//! - Any failing external call aborts the whole transaction
//! - Native coins are refused on value-moving calls; the owner can recover
//!   any that still arrive with `RecoverNative`

pub mod address_codec;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
mod query;
pub mod state;
pub mod transfer;

pub use crate::error::ContractError;
pub use crate::events::WrapperEvent;
