//! Poly Wrapper Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `transfer` - Outgoing CW20 / lock proxy calls, answered here in `reply`

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;

use crate::address_codec::validate_address20;
use crate::error::ContractError;
use crate::execute::{
    execute_extract_fee, execute_lock, execute_pause, execute_recover_native,
    execute_set_fee_collector, execute_set_lock_proxy, execute_speed_up, execute_transfer_ownership, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_chain_id, query_config, query_fee_collector, query_lock_proxy, query_owner,
    query_paused,
};
use crate::state::{
    load_owner, CHAIN_ID, CONTRACT_NAME, CONTRACT_VERSION, FEE_COLLECTOR, LOCK_PROXY, OWNER,
};
use crate::transfer::reply_context;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id: 0 });
    }
    CHAIN_ID.save(deps.storage, &msg.chain_id)?;

    if let Some(owner) = msg.owner {
        let owner = validate_address20(deps.api, &owner)?;
        OWNER.save(deps.storage, &owner)?;
    }

    let mut response = Response::new().add_attribute("method", "instantiate");

    if let Some(fee_collector) = msg.fee_collector {
        let fee_collector = validate_address20(deps.api, &fee_collector)?;
        FEE_COLLECTOR.save(deps.storage, &fee_collector)?;
        response = response.add_attribute("fee_collector", fee_collector);
    }

    if let Some(lock_proxy) = msg.lock_proxy {
        let lock_proxy = validate_address20(deps.api, &lock_proxy)?;
        LOCK_PROXY.save(deps.storage, &lock_proxy)?;
        response = response.add_attribute("lock_proxy", lock_proxy);
    }

    Ok(response
        .add_attribute("owner", load_owner(deps.storage)?)
        .add_attribute("chain_id", msg.chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    let result = match msg {
        // Access control & configuration
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::SetFeeCollector { fee_collector } => {
            execute_set_fee_collector(deps, info, fee_collector)
        }
        ExecuteMsg::SetLockProxy { lock_proxy } => execute_set_lock_proxy(deps, info, lock_proxy),

        // Pause switch
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),

        // Native coin recovery
        ExecuteMsg::RecoverNative {
            denom,
            amount,
            recipient,
        } => execute_recover_native(deps, info, denom, amount, recipient),

        // Fees
        ExecuteMsg::ExtractFee { asset } => execute_extract_fee(deps, env, info, asset),

        // Outgoing transfers
        ExecuteMsg::Lock {
            from_asset,
            from_address,
            to_chain_id,
            to_address,
            amount,
            fee,
            id,
        } => execute_lock(
            deps,
            env,
            info,
            from_asset,
            from_address,
            to_chain_id,
            to_address,
            amount,
            fee,
            id,
        ),
        ExecuteMsg::SpeedUp {
            from_asset,
            from_address,
            tx_hash,
            fee,
        } => execute_speed_up(deps, env, info, from_asset, from_address, tx_hash, fee),
    };

    result.map_err(|err| {
        api.debug(&format!("fault: {}", err));
        err
    })
}

// ============================================================================
// Reply
// ============================================================================

/// Only failed external calls reply; each one aborts the transaction.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new()),
        SubMsgResult::Err(err) => {
            let reason = format!("{}: {}", reply_context(msg.id), err);
            deps.api.debug(&format!("fault: {}", reason));
            Err(ContractError::TransferFailed { reason })
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::FeeCollector {} => to_json_binary(&query_fee_collector(deps)?),
        QueryMsg::LockProxy {} => to_json_binary(&query_lock_proxy(deps)?),
        QueryMsg::Paused {} => to_json_binary(&query_paused(deps)?),
        QueryMsg::ChainId {} => to_json_binary(&query_chain_id(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
