//! Fee extraction handler.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::FEE_COLLECTOR;
use crate::transfer::{balance_of, transfer};

use super::outgoing::ensure_no_funds;

/// Send this contract's whole balance of `asset` to the fee collector.
///
/// Only the fee collector may call this. A zero balance succeeds without
/// sending anything.
pub fn execute_extract_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
) -> Result<Response, ContractError> {
    let fee_collector = FEE_COLLECTOR
        .may_load(deps.storage)?
        .ok_or_else(|| ContractError::unauthorized("fee collector"))?;
    if info.sender != fee_collector {
        return Err(ContractError::unauthorized("fee collector"));
    }
    ensure_no_funds(&info)?;

    let asset = deps.api.addr_validate(&asset)?;
    let balance = balance_of(&deps.querier, &asset, &env.contract.address)?;

    let mut response = Response::new()
        .add_attribute("method", "extract_fee")
        .add_attribute("asset", asset.as_str())
        .add_attribute("amount", balance);

    if !balance.is_zero() {
        response = response.add_submessage(transfer(&asset, &fee_collector, balance)?);
    }

    Ok(response.add_attribute("fee_collector", fee_collector))
}
