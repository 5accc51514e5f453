//! Owner operations handlers.
//!
//! This module handles:
//! - Ownership transfer
//! - Pause/unpause contract
//! - Native coin recovery

use cosmwasm_std::{
    Addr, BankMsg, Coin, DepsMut, Event, MessageInfo, Response, Storage, Uint128,
};

use crate::address_codec::validate_address20;
use crate::error::ContractError;
use crate::events::WrapperEvent;
use crate::state::{load_owner, OWNER, PAUSED};

/// Fail unless `sender` is the current owner; returns the owner.
pub(crate) fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Addr, ContractError> {
    let owner = load_owner(storage)?;
    if *sender != owner {
        return Err(ContractError::unauthorized("owner"));
    }
    Ok(owner)
}

// ============================================================================
// Ownership
// ============================================================================

/// Hand ownership to a new 20-byte address.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let old_owner = ensure_owner(deps.storage, &info.sender)?;
    let new_owner = validate_address20(deps.api, &new_owner)?;

    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_event(Event::from(WrapperEvent::OwnershipTransferred {
            old_owner: old_owner.clone(),
            new_owner: new_owner.clone(),
        }))
        .add_attribute("method", "transfer_ownership")
        .add_attribute("old_owner", old_owner)
        .add_attribute("new_owner", new_owner))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops lock and speed-up).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let owner = ensure_owner(deps.storage, &info.sender)?;

    PAUSED.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_event(Event::from(WrapperEvent::Paused { owner }))
        .add_attribute("method", "pause"))
}

/// Unpause the contract.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let owner = ensure_owner(deps.storage, &info.sender)?;

    PAUSED.remove(deps.storage);

    Ok(Response::new()
        .add_event(Event::from(WrapperEvent::Unpaused { owner }))
        .add_attribute("method", "unpause"))
}

// ============================================================================
// Native Coin Recovery
// ============================================================================

/// Send native coins held at this contract's address to `recipient`.
///
/// The owner may spend them at any time, paused or not.
pub fn execute_recover_native(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    let recipient = validate_address20(deps.api, &recipient)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "recovered amount must be positive".to_string(),
        });
    }

    let send = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![Coin {
            denom: denom.clone(),
            amount,
        }],
    };

    Ok(Response::new()
        .add_message(send)
        .add_attribute("method", "recover_native")
        .add_attribute("denom", denom)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}
