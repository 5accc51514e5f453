//! Configuration management handlers.
//!
//! This module handles:
//! - Fee collector address
//! - Lock proxy address

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use super::admin::ensure_owner;
use crate::address_codec::validate_address20;
use crate::error::ContractError;
use crate::state::{FEE_COLLECTOR, LOCK_PROXY};

/// Set the fee collector address.
pub fn execute_set_fee_collector(
    deps: DepsMut,
    info: MessageInfo,
    fee_collector: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    let fee_collector = validate_address20(deps.api, &fee_collector)?;

    FEE_COLLECTOR.save(deps.storage, &fee_collector)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_collector")
        .add_attribute("fee_collector", fee_collector))
}

/// Set the lock proxy contract address.
pub fn execute_set_lock_proxy(
    deps: DepsMut,
    info: MessageInfo,
    lock_proxy: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    let lock_proxy = validate_address20(deps.api, &lock_proxy)?;

    LOCK_PROXY.save(deps.storage, &lock_proxy)?;

    Ok(Response::new()
        .add_attribute("method", "set_lock_proxy")
        .add_attribute("lock_proxy", lock_proxy))
}
