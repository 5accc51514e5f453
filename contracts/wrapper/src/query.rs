//! Query handlers for the poly wrapper contract.
//!
//! Every query reads straight from storage; nothing is cached.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ChainIdResponse, ConfigResponse, FeeCollectorResponse, LockProxyResponse, OwnerResponse,
    PausedResponse,
};
use crate::state::{is_paused, load_owner, CHAIN_ID, FEE_COLLECTOR, LOCK_PROXY};

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: load_owner(deps.storage)?,
    })
}

pub fn query_fee_collector(deps: Deps) -> StdResult<FeeCollectorResponse> {
    Ok(FeeCollectorResponse {
        fee_collector: FEE_COLLECTOR.may_load(deps.storage)?,
    })
}

pub fn query_lock_proxy(deps: Deps) -> StdResult<LockProxyResponse> {
    Ok(LockProxyResponse {
        lock_proxy: LOCK_PROXY.may_load(deps.storage)?,
    })
}

pub fn query_paused(deps: Deps) -> StdResult<PausedResponse> {
    Ok(PausedResponse {
        paused: is_paused(deps.storage)?,
    })
}

pub fn query_chain_id(deps: Deps) -> StdResult<ChainIdResponse> {
    Ok(ChainIdResponse {
        chain_id: CHAIN_ID.load(deps.storage)?,
    })
}

/// Query the whole configuration record at once.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        owner: load_owner(deps.storage)?,
        fee_collector: FEE_COLLECTOR.may_load(deps.storage)?,
        lock_proxy: LOCK_PROXY.may_load(deps.storage)?,
        paused: is_paused(deps.storage)?,
        chain_id: CHAIN_ID.load(deps.storage)?,
    })
}
