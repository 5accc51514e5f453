//! State definitions for the poly wrapper contract
//!
//! The wrapper keeps no per-user ledger. Its whole persistent state is a
//! handful of scalar slots; balances live in the CW20 contracts.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:poly-wrapper";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Owner reported (and authorized) while no owner has been stored
pub const DEFAULT_OWNER: &str = "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v";

// ============================================================================
// Storage
// ============================================================================

pub const OWNER: Item<Addr> = Item::new("owner");

pub const FEE_COLLECTOR: Item<Addr> = Item::new("fee_collector");

pub const LOCK_PROXY: Item<Addr> = Item::new("lock_proxy");

/// Present (always `true`) while paused, absent otherwise
pub const PAUSED: Item<bool> = Item::new("paused");

/// This chain's own identifier, fixed at instantiation
pub const CHAIN_ID: Item<u64> = Item::new("chain_id");

// ============================================================================
// Accessors
// ============================================================================

/// Stored owner, or [`DEFAULT_OWNER`] if none was ever stored.
pub fn load_owner(storage: &dyn Storage) -> StdResult<Addr> {
    Ok(OWNER
        .may_load(storage)?
        .unwrap_or_else(|| Addr::unchecked(DEFAULT_OWNER)))
}

pub fn is_paused(storage: &dyn Storage) -> StdResult<bool> {
    Ok(PAUSED.may_load(storage)?.is_some())
}
