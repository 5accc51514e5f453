//! Integration tests for the poly wrapper's owner surface.
//!
//! These tests cover instantiation, ownership transfer, fee collector and
//! lock proxy configuration, the pause switch, queries and migration.

use cosmwasm_std::testing::{
    mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{
    coins, from_json, Addr, Attribute, BankMsg, CosmosMsg, OwnedDeps, Response, Uint128,
};

use poly_wrapper::address_codec::{encode_bech32, encode_bech32_address};
use poly_wrapper::contract::{execute, instantiate, migrate, query};
use poly_wrapper::events::{EVENT_OWNERSHIP_TRANSFERRED, EVENT_PAUSED, EVENT_UNPAUSED};
use poly_wrapper::msg::{
    ChainIdResponse, ConfigResponse, ExecuteMsg, FeeCollectorResponse, InstantiateMsg,
    LockProxyResponse, MigrateMsg, OwnerResponse, PausedResponse, QueryMsg,
};
use poly_wrapper::state::{CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_OWNER};
use poly_wrapper::ContractError;

type Deps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

const THIS_CHAIN_ID: u64 = 4;

// ============================================================================
// Test Setup
// ============================================================================

/// A valid 20-byte terra address filled with `fill`
fn addr(fill: u8) -> String {
    encode_bech32_address(&[fill; 20], "terra").unwrap()
}

fn owner() -> String {
    addr(0x01)
}

fn stranger() -> String {
    addr(0x66)
}

fn setup() -> Deps {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(&owner(), &[]),
        InstantiateMsg {
            owner: Some(owner()),
            fee_collector: None,
            lock_proxy: None,
            chain_id: THIS_CHAIN_ID,
        },
    )
    .unwrap();
    deps
}

fn exec(deps: &mut Deps, sender: &str, msg: ExecuteMsg) -> Result<Response, ContractError> {
    execute(deps.as_mut(), mock_env(), mock_info(sender, &[]), msg)
}

fn query_config(deps: &Deps) -> ConfigResponse {
    from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap()
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate_with_full_wiring() {
    let mut deps = mock_dependencies();
    let res = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(&owner(), &[]),
        InstantiateMsg {
            owner: Some(owner()),
            fee_collector: Some(addr(0x0f)),
            lock_proxy: Some(addr(0x0e)),
            chain_id: THIS_CHAIN_ID,
        },
    )
    .unwrap();
    assert!(res
        .attributes
        .contains(&Attribute::new("chain_id", THIS_CHAIN_ID.to_string())));

    let config = query_config(&deps);
    assert_eq!(
        config,
        ConfigResponse {
            owner: Addr::unchecked(owner()),
            fee_collector: Some(Addr::unchecked(addr(0x0f))),
            lock_proxy: Some(Addr::unchecked(addr(0x0e))),
            paused: false,
            chain_id: THIS_CHAIN_ID,
        }
    );

    let version = cw2::get_contract_version(deps.as_ref().storage).unwrap();
    assert_eq!(version.contract, CONTRACT_NAME);
    assert_eq!(version.version, CONTRACT_VERSION);
}

#[test]
fn test_instantiate_without_owner_uses_default() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(&stranger(), &[]),
        InstantiateMsg {
            owner: None,
            fee_collector: None,
            lock_proxy: None,
            chain_id: THIS_CHAIN_ID,
        },
    )
    .unwrap();

    let res: OwnerResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::Owner {}).unwrap()).unwrap();
    assert_eq!(res.owner, Addr::unchecked(DEFAULT_OWNER));

    // The default owner holds real authority
    exec(&mut deps, DEFAULT_OWNER, ExecuteMsg::Pause {}).unwrap();
    assert!(query_config(&deps).paused);

    let err = exec(&mut deps, &stranger(), ExecuteMsg::Unpause {}).unwrap_err();
    assert_eq!(err, ContractError::unauthorized("owner"));
}

#[test]
fn test_instantiate_rejects_zero_chain_id() {
    let mut deps = mock_dependencies();
    let err = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(&owner(), &[]),
        InstantiateMsg {
            owner: Some(owner()),
            fee_collector: None,
            lock_proxy: None,
            chain_id: 0,
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::InvalidChainId { chain_id: 0 });
}

#[test]
fn test_instantiate_rejects_short_lock_proxy() {
    let mut deps = mock_dependencies();
    let err = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(&owner(), &[]),
        InstantiateMsg {
            owner: Some(owner()),
            fee_collector: None,
            lock_proxy: Some(encode_bech32(&[0x0e; 19], "terra").unwrap()),
            chain_id: THIS_CHAIN_ID,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAddress { .. }));
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_transfer_ownership() {
    let mut deps = setup();
    let new_owner = addr(0x02);

    let res = exec(
        &mut deps,
        &owner(),
        ExecuteMsg::TransferOwnership {
            new_owner: new_owner.clone(),
        },
    )
    .unwrap();

    assert_eq!(res.events.len(), 1);
    let event = &res.events[0];
    assert_eq!(event.ty, EVENT_OWNERSHIP_TRANSFERRED);
    assert_eq!(
        event.attributes,
        vec![
            Attribute::new("old_owner", owner()),
            Attribute::new("new_owner", new_owner.clone()),
        ]
    );
    assert_eq!(query_config(&deps).owner, Addr::unchecked(&new_owner));

    // The old owner lost its rights, the new one has them
    let err = exec(&mut deps, &owner(), ExecuteMsg::Pause {}).unwrap_err();
    assert_eq!(err, ContractError::unauthorized("owner"));
    exec(&mut deps, &new_owner, ExecuteMsg::Pause {}).unwrap();
}

#[test]
fn test_owner_operations_reject_non_owner() {
    let mut deps = setup();
    let before = query_config(&deps);

    let msgs = vec![
        ExecuteMsg::TransferOwnership {
            new_owner: stranger(),
        },
        ExecuteMsg::SetFeeCollector {
            fee_collector: stranger(),
        },
        ExecuteMsg::SetLockProxy {
            lock_proxy: stranger(),
        },
        ExecuteMsg::Pause {},
        ExecuteMsg::Unpause {},
        ExecuteMsg::RecoverNative {
            denom: "uluna".to_string(),
            amount: Uint128::new(1),
            recipient: stranger(),
        },
    ];

    for msg in msgs {
        let err = exec(&mut deps, &stranger(), msg).unwrap_err();
        assert_eq!(err, ContractError::unauthorized("owner"));
    }

    assert_eq!(query_config(&deps), before);
}

#[test]
fn test_owner_operations_reject_bad_addresses() {
    let mut deps = setup();
    let before = query_config(&deps);

    let bad_addresses = vec![
        encode_bech32(&[0x07; 19], "terra").unwrap(),
        encode_bech32(&[0x07; 21], "terra").unwrap(),
        encode_bech32(&[0x07; 32], "terra").unwrap(),
        "terra1short".to_string(),
        String::new(),
    ];

    for bad in bad_addresses {
        let msgs = vec![
            ExecuteMsg::TransferOwnership {
                new_owner: bad.clone(),
            },
            ExecuteMsg::SetFeeCollector {
                fee_collector: bad.clone(),
            },
            ExecuteMsg::SetLockProxy {
                lock_proxy: bad.clone(),
            },
        ];
        for msg in msgs {
            let err = exec(&mut deps, &owner(), msg).unwrap_err();
            assert!(
                matches!(err, ContractError::InvalidAddress { .. }),
                "expected InvalidAddress for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    assert_eq!(query_config(&deps), before);
}

#[test]
fn test_authorization_checked_before_address() {
    let mut deps = setup();
    let err = exec(
        &mut deps,
        &stranger(),
        ExecuteMsg::SetLockProxy {
            lock_proxy: "not-an-address".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::unauthorized("owner"));
}

// ============================================================================
// Configuration Registry
// ============================================================================

#[test]
fn test_set_fee_collector_and_lock_proxy() {
    let mut deps = setup();

    let res = exec(
        &mut deps,
        &owner(),
        ExecuteMsg::SetLockProxy {
            lock_proxy: addr(0x0e),
        },
    )
    .unwrap();
    assert!(res.events.is_empty());
    assert!(res
        .attributes
        .contains(&Attribute::new("lock_proxy", addr(0x0e))));

    exec(
        &mut deps,
        &owner(),
        ExecuteMsg::SetFeeCollector {
            fee_collector: addr(0x0f),
        },
    )
    .unwrap();

    let proxy: LockProxyResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::LockProxy {}).unwrap()).unwrap();
    assert_eq!(proxy.lock_proxy, Some(Addr::unchecked(addr(0x0e))));

    let collector: FeeCollectorResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::FeeCollector {}).unwrap()).unwrap();
    assert_eq!(collector.fee_collector, Some(Addr::unchecked(addr(0x0f))));

    // Setters overwrite
    exec(
        &mut deps,
        &owner(),
        ExecuteMsg::SetLockProxy {
            lock_proxy: addr(0x0d),
        },
    )
    .unwrap();
    assert_eq!(
        query_config(&deps).lock_proxy,
        Some(Addr::unchecked(addr(0x0d)))
    );
}

#[test]
fn test_unset_registry_reads_empty() {
    let deps = setup();

    let proxy: LockProxyResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::LockProxy {}).unwrap()).unwrap();
    assert!(proxy.lock_proxy.is_none());

    let collector: FeeCollectorResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::FeeCollector {}).unwrap()).unwrap();
    assert!(collector.fee_collector.is_none());
}

// ============================================================================
// Pause Switch
// ============================================================================

#[test]
fn test_pause_and_unpause() {
    let mut deps = setup();

    let res = exec(&mut deps, &owner(), ExecuteMsg::Pause {}).unwrap();
    assert_eq!(res.events[0].ty, EVENT_PAUSED);
    assert_eq!(
        res.events[0].attributes,
        vec![Attribute::new("owner", owner())]
    );

    let paused: PausedResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::Paused {}).unwrap()).unwrap();
    assert!(paused.paused);

    // Pausing twice is allowed
    exec(&mut deps, &owner(), ExecuteMsg::Pause {}).unwrap();
    assert!(query_config(&deps).paused);

    let res = exec(&mut deps, &owner(), ExecuteMsg::Unpause {}).unwrap();
    assert_eq!(res.events[0].ty, EVENT_UNPAUSED);
    assert_eq!(
        res.events[0].attributes,
        vec![Attribute::new("owner", owner())]
    );
    assert!(!query_config(&deps).paused);

    // Unpausing an active contract is allowed too
    exec(&mut deps, &owner(), ExecuteMsg::Unpause {}).unwrap();
    assert!(!query_config(&deps).paused);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_reads_are_idempotent() {
    let mut deps = setup();
    exec(
        &mut deps,
        &owner(),
        ExecuteMsg::SetFeeCollector {
            fee_collector: addr(0x0f),
        },
    )
    .unwrap();

    let queries = vec![
        QueryMsg::Owner {},
        QueryMsg::FeeCollector {},
        QueryMsg::LockProxy {},
        QueryMsg::Paused {},
        QueryMsg::ChainId {},
        QueryMsg::Config {},
    ];

    for msg in queries {
        let first = query(deps.as_ref(), mock_env(), msg.clone()).unwrap();
        let second = query(deps.as_ref(), mock_env(), msg).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_query_chain_id() {
    let deps = setup();
    let res: ChainIdResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::ChainId {}).unwrap()).unwrap();
    assert_eq!(res.chain_id, THIS_CHAIN_ID);
}

// ============================================================================
// Migrate
// ============================================================================

#[test]
fn test_migrate_keeps_state() {
    let mut deps = setup();
    exec(&mut deps, &owner(), ExecuteMsg::Pause {}).unwrap();
    let before = query_config(&deps);

    cw2::set_contract_version(deps.as_mut().storage, CONTRACT_NAME, "0.0.1").unwrap();
    let res = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap();
    assert!(res
        .attributes
        .contains(&Attribute::new("version", CONTRACT_VERSION)));

    let version = cw2::get_contract_version(deps.as_ref().storage).unwrap();
    assert_eq!(version.version, CONTRACT_VERSION);
    assert_eq!(query_config(&deps), before);
}

// ============================================================================
// Native Coin Recovery
// ============================================================================

#[test]
fn test_recover_native_sends_to_recipient() {
    let mut deps = setup();

    let res = exec(
        &mut deps,
        &owner(),
        ExecuteMsg::RecoverNative {
            denom: "uluna".to_string(),
            amount: Uint128::new(5_000_000),
            recipient: addr(0x0f),
        },
    )
    .unwrap();

    assert_eq!(res.messages.len(), 1);
    assert_eq!(
        res.messages[0].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: addr(0x0f),
            amount: coins(5_000_000, "uluna"),
        })
    );
    assert!(res
        .attributes
        .contains(&Attribute::new("method", "recover_native")));
}

#[test]
fn test_recover_native_works_while_paused() {
    let mut deps = setup();
    exec(&mut deps, &owner(), ExecuteMsg::Pause {}).unwrap();

    let res = exec(
        &mut deps,
        &owner(),
        ExecuteMsg::RecoverNative {
            denom: "uluna".to_string(),
            amount: Uint128::new(10),
            recipient: owner(),
        },
    )
    .unwrap();
    assert_eq!(res.messages.len(), 1);
}

#[test]
fn test_recover_native_rejects_bad_input() {
    let mut deps = setup();

    let err = exec(
        &mut deps,
        &owner(),
        ExecuteMsg::RecoverNative {
            denom: "uluna".to_string(),
            amount: Uint128::zero(),
            recipient: owner(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAmount { .. }));

    let err = exec(
        &mut deps,
        &owner(),
        ExecuteMsg::RecoverNative {
            denom: "uluna".to_string(),
            amount: Uint128::new(10),
            recipient: "terra1short".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAddress { .. }));
}
