//! Calls out to the CW20 asset contracts and the lock proxy.
//!
//! Every external call is a `SubMsg` with reply-on-error, so a failing
//! asset or lock proxy comes back through [`crate::contract::reply`] and is
//! reported as [`ContractError::TransferFailed`]. Nothing here retries; a
//! failure aborts the whole transaction and the host discards every state
//! change made by it.

use common::LockProxyExecuteMsg;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, QuerierWrapper, StdResult, Storage, SubMsg, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::LOCK_PROXY;

// ============================================================================
// Reply IDs
// ============================================================================

pub const REPLY_PULL: u64 = 1;
pub const REPLY_ALLOWANCE: u64 = 2;
pub const REPLY_LOCK: u64 = 3;
pub const REPLY_FEE_TRANSFER: u64 = 4;

/// Human-readable name of the external call behind a reply id
pub fn reply_context(id: u64) -> &'static str {
    match id {
        REPLY_PULL => "_pull fail",
        REPLY_ALLOWANCE => "lock proxy allowance fail",
        REPLY_LOCK => "lock fail",
        REPLY_FEE_TRANSFER => "fee transfer fail",
        _ => "unknown call fail",
    }
}

// ============================================================================
// Pull / Push
// ============================================================================

/// Move `amount` of `asset` from `from` into this contract.
///
/// Draws on the allowance `from` granted to this contract.
pub fn pull(asset: &Addr, from: &Addr, this: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: this.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    Ok(SubMsg::reply_on_error(msg, REPLY_PULL))
}

/// Forward `amount` of `asset`, already held here, through the configured
/// lock proxy to `to_address` on `to_chain_id`.
pub fn push(
    storage: &dyn Storage,
    asset: &Addr,
    from: &Addr,
    to_chain_id: u64,
    to_address: Binary,
    amount: Uint128,
) -> Result<Vec<SubMsg>, ContractError> {
    let lock_proxy = LOCK_PROXY
        .may_load(storage)?
        .ok_or_else(|| ContractError::TransferFailed {
            reason: "lock proxy not configured".to_string(),
        })?;

    Ok(push_to(
        &lock_proxy,
        asset,
        from,
        to_chain_id,
        to_address,
        amount,
    )?)
}

/// Allowance for the proxy first, then the proxy's `Lock`, which draws it.
fn push_to(
    lock_proxy: &Addr,
    asset: &Addr,
    from: &Addr,
    to_chain_id: u64,
    to_address: Binary,
    amount: Uint128,
) -> StdResult<Vec<SubMsg>> {
    let allowance = WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
            spender: lock_proxy.to_string(),
            amount,
            expires: None,
        })?,
        funds: vec![],
    };

    let lock = WasmMsg::Execute {
        contract_addr: lock_proxy.to_string(),
        msg: to_json_binary(&LockProxyExecuteMsg::Lock {
            from_asset: asset.to_string(),
            from_address: from.to_string(),
            to_chain_id,
            to_address,
            amount,
        })?,
        funds: vec![],
    };

    Ok(vec![
        SubMsg::reply_on_error(allowance, REPLY_ALLOWANCE),
        SubMsg::reply_on_error(lock, REPLY_LOCK),
    ])
}

// ============================================================================
// Balance / Transfer
// ============================================================================

pub fn balance_of(
    querier: &QuerierWrapper,
    asset: &Addr,
    holder: &Addr,
) -> Result<Uint128, ContractError> {
    let response: BalanceResponse = querier
        .query_wasm_smart(
            asset,
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("balanceOf {}: {}", asset, e),
        })?;
    Ok(response.balance)
}

/// Send `amount` of `asset` held by this contract to `recipient`.
pub fn transfer(asset: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    Ok(SubMsg::reply_on_error(msg, REPLY_FEE_TRANSFER))
}
