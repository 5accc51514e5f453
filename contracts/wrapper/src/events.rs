//! Events emitted by the poly wrapper contract.
//!
//! Relayers and indexers key on these. The host publishes them only when
//! the whole transaction commits.

use cosmwasm_std::{Addr, Binary, Event, Uint128};

pub const EVENT_OWNERSHIP_TRANSFERRED: &str = "ownership_transferred";
pub const EVENT_PAUSED: &str = "paused";
pub const EVENT_UNPAUSED: &str = "unpaused";
pub const EVENT_LOCK: &str = "poly_wrapper_lock";
pub const EVENT_SPEED_UP: &str = "poly_wrapper_speed_up";

#[derive(Debug, Clone, PartialEq)]
pub enum WrapperEvent {
    OwnershipTransferred {
        old_owner: Addr,
        new_owner: Addr,
    },
    Paused {
        owner: Addr,
    },
    Unpaused {
        owner: Addr,
    },
    /// `net_amount` is what was forwarded to the lock proxy; `fee` stays here
    Lock {
        from_asset: Addr,
        from_address: Addr,
        to_chain_id: u64,
        to_address: Binary,
        net_amount: Uint128,
        fee: Uint128,
        id: Uint128,
    },
    SpeedUp {
        from_asset: Addr,
        tx_hash: Binary,
        from_address: Addr,
        fee: Uint128,
    },
}

impl From<WrapperEvent> for Event {
    fn from(event: WrapperEvent) -> Self {
        match event {
            WrapperEvent::OwnershipTransferred {
                old_owner,
                new_owner,
            } => Event::new(EVENT_OWNERSHIP_TRANSFERRED)
                .add_attribute("old_owner", old_owner)
                .add_attribute("new_owner", new_owner),
            WrapperEvent::Paused { owner } => Event::new(EVENT_PAUSED).add_attribute("owner", owner),
            WrapperEvent::Unpaused { owner } => {
                Event::new(EVENT_UNPAUSED).add_attribute("owner", owner)
            }
            WrapperEvent::Lock {
                from_asset,
                from_address,
                to_chain_id,
                to_address,
                net_amount,
                fee,
                id,
            } => Event::new(EVENT_LOCK)
                .add_attribute("from_asset", from_asset)
                .add_attribute("from_address", from_address)
                .add_attribute("to_chain_id", to_chain_id.to_string())
                .add_attribute("to_address", hex::encode(to_address.as_slice()))
                .add_attribute("net_amount", net_amount)
                .add_attribute("fee", fee)
                .add_attribute("id", id),
            WrapperEvent::SpeedUp {
                from_asset,
                tx_hash,
                from_address,
                fee,
            } => Event::new(EVENT_SPEED_UP)
                .add_attribute("from_asset", from_asset)
                .add_attribute("tx_hash", hex::encode(tx_hash.as_slice()))
                .add_attribute("from_address", from_address)
                .add_attribute("fee", fee),
        }
    }
}
