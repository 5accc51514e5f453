//! Outgoing transfer handlers (Lock and SpeedUp).
//!
//! `Lock` pulls the gross amount into this contract and forwards the net
//! amount through the lock proxy; the fee stays here until extracted.
//! `SpeedUp` only pulls a fee. Neither keeps per-request state.

use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::events::WrapperEvent;
use crate::state::{is_paused, CHAIN_ID};
use crate::transfer::{pull, push};

/// The claimed depositor must be the one sending the message.
fn ensure_sender(info: &MessageInfo, from_address: &str) -> Result<(), ContractError> {
    if info.sender.as_str() != from_address {
        return Err(ContractError::unauthorized("from address"));
    }
    Ok(())
}

/// Tokens move as CW20; native coins sent along would be stranded.
pub(crate) fn ensure_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::FundsNotAccepted);
    }
    Ok(())
}

fn ensure_not_paused(storage: &dyn Storage) -> Result<(), ContractError> {
    if is_paused(storage)? {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Execute handler for locking CW20 tokens towards another chain.
#[allow(clippy::too_many_arguments)]
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from_asset: String,
    from_address: String,
    to_chain_id: u64,
    to_address: Binary,
    amount: Uint128,
    fee: Uint128,
    id: Uint128,
) -> Result<Response, ContractError> {
    ensure_sender(&info, &from_address)?;
    ensure_no_funds(&info)?;

    let this_chain_id = CHAIN_ID.load(deps.storage)?;
    if to_chain_id == 0 || to_chain_id == this_chain_id {
        return Err(ContractError::InvalidChainId {
            chain_id: to_chain_id,
        });
    }

    if amount <= fee {
        return Err(ContractError::InvalidAmount {
            reason: format!("amount {} must exceed fee {}", amount, fee),
        });
    }

    ensure_not_paused(deps.storage)?;

    let from_asset = deps.api.addr_validate(&from_asset)?;
    let from_address = info.sender;
    let net_amount = amount - fee;

    let mut messages = vec![pull(
        &from_asset,
        &from_address,
        &env.contract.address,
        amount,
    )?];
    messages.extend(push(
        deps.storage,
        &from_asset,
        &env.contract.address,
        to_chain_id,
        to_address.clone(),
        net_amount,
    )?);

    Ok(Response::new()
        .add_submessages(messages)
        .add_event(Event::from(WrapperEvent::Lock {
            from_asset: from_asset.clone(),
            from_address: from_address.clone(),
            to_chain_id,
            to_address,
            net_amount,
            fee,
            id,
        }))
        .add_attribute("method", "lock")
        .add_attribute("from_asset", from_asset)
        .add_attribute("from_address", from_address)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("amount", net_amount)
        .add_attribute("fee", fee)
        .add_attribute("id", id))
}

/// Execute handler for topping up the fee of a pending transfer.
///
/// `tx_hash` is not checked against any earlier lock; relayers decide
/// what it refers to.
pub fn execute_speed_up(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from_asset: String,
    from_address: String,
    tx_hash: Binary,
    fee: Uint128,
) -> Result<Response, ContractError> {
    ensure_sender(&info, &from_address)?;
    ensure_no_funds(&info)?;
    ensure_not_paused(deps.storage)?;

    if fee.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "fee must be positive".to_string(),
        });
    }

    let from_asset = deps.api.addr_validate(&from_asset)?;
    let from_address = info.sender;

    let pull_msg = pull(&from_asset, &from_address, &env.contract.address, fee)?;

    Ok(Response::new()
        .add_submessage(pull_msg)
        .add_event(Event::from(WrapperEvent::SpeedUp {
            from_asset: from_asset.clone(),
            tx_hash,
            from_address: from_address.clone(),
            fee,
        }))
        .add_attribute("method", "speed_up")
        .add_attribute("from_asset", from_asset)
        .add_attribute("from_address", from_address)
        .add_attribute("fee", fee))
}
