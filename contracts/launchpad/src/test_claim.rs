extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::{
    test::{
        assert_logged, bare, setup, Fixture, CLAIM_COUNT, CLAIM_CYCLE, CLAIM_START, END, START,
    },
    ClaimSchedule, ContractError, DepositParams,
};

#[test]
fn test_claim_requires_settlement() {
    let f = setup();
    let alice = f.depositor(10_000);

    f.at(START);
    f.deposit(&alice, 10_000, 100);

    f.at(CLAIM_START);
    let result = f.client.try_claim(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::ClaimUnauthorized),
        _ => unreachable!("Expected ClaimUnauthorized error"),
    }
}

#[test]
fn test_claim_follows_schedule() {
    let f = setup();
    let alice = f.depositor(10_000);

    f.at(START);
    f.deposit(&alice, 10_000, 100);

    // Settled before the schedule opens.
    f.at(END + 1);
    f.client.withdraw_refund(&alice, &f.stake_token);
    let result = f.client.try_claim(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotYetStarted),
        _ => unreachable!("Expected NotYetStarted error"),
    }
    assert_logged(&f.env, r#"["NotYetStarted", 1200]"#);

    f.at(CLAIM_START);
    assert_eq!(f.client.claim(&alice), 99_900);

    // Second installment opens one cycle later.
    let result = f.client.try_claim(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotYetStarted),
        _ => unreachable!("Expected NotYetStarted error"),
    }
    assert_logged(&f.env, r#"["NotYetStarted", 1300]"#);

    f.at(CLAIM_START + CLAIM_CYCLE);
    assert_eq!(f.client.claim(&alice), 99_900);

    let state = f.client.get_claim_state(&alice);
    assert_eq!(state.claimed_count, 2);
    assert_eq!(state.claimed_amount, 199_800);
    assert_eq!(f.balance(&f.reward_token, &alice), 199_800);
}

#[test]
fn test_late_claims_catch_up_one_at_a_time() {
    let f = setup();
    let alice = f.depositor(10_000);

    f.at(START);
    f.deposit(&alice, 10_000, 100);

    // Every installment is open, but each call pays only the next one.
    f.at(CLAIM_START + CLAIM_CYCLE * CLAIM_COUNT);
    f.client.withdraw_refund(&alice, &f.stake_token);
    for _ in 0..CLAIM_COUNT {
        assert_eq!(f.client.claim(&alice), 99_900);
    }

    let result = f.client.try_claim(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 10, 11]"#);
    assert_eq!(f.balance(&f.reward_token, &alice), 999_000);
}

#[test]
fn test_last_installment_absorbs_remainder() {
    let f = bare();
    let mut params = f.default_params();
    params.claim_schedule = ClaimSchedule {
        count_limit: 7,
        start_height: CLAIM_START,
        cycle: CLAIM_CYCLE,
    };
    f.init(&params);

    let alice = f.depositor(10_000);
    f.at(START);
    f.deposit(&alice, 10_000, 100);

    f.at(CLAIM_START);
    f.client.withdraw_refund(&alice, &f.stake_token);

    let mut paid = std::vec::Vec::new();
    for k in 0..7 {
        f.at(CLAIM_START + CLAIM_CYCLE * k);
        paid.push(f.client.claim(&alice));
    }

    assert_eq!(&paid[..6], &[142_714; 6]);
    assert_eq!(paid[6], 142_716);
    assert_eq!(paid.iter().sum::<i128>(), 999_000);
}

#[test]
fn test_claim_without_schedule_not_started() {
    let f = bare();
    let mut params = f.default_params();
    params.claim_schedule = ClaimSchedule::unset();
    f.init(&params);

    let alice = f.depositor(10_000);
    f.at(START);
    f.deposit(&alice, 10_000, 100);

    f.at(END + 1);
    f.client.withdraw_refund(&alice, &f.stake_token);
    let result = f.client.try_claim(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotYetStarted),
        _ => unreachable!("Expected NotYetStarted error"),
    }
    assert_logged(&f.env, r#"["NotYetStarted", 0]"#);
}

/// Registers a second funded pool emitting 500 per height and gives
/// `depositor` 5_000 in the first pool and 1_000 in the second, both at
/// option 100.
fn deposit_in_two_pools(f: &Fixture, depositor: &Address) -> Address {
    let second = f
        .env
        .register_stellar_asset_contract_v2(Address::generate(&f.env))
        .address();
    f.mint(&f.reward_token, &f.contract_id, 500_000);
    f.client.set_pool(&f.admin, &second, &500);
    f.mint(&second, depositor, 1_000);

    f.at(START);
    f.deposit(depositor, 5_000, 100);
    f.client.deposit(
        depositor,
        &DepositParams {
            token: second.clone(),
            amount: 1_000,
            refund_option: 100,
        },
    );
    second
}

#[test]
fn test_settling_a_second_pool_adds_to_entitlement() {
    let f = setup();
    let alice = f.depositor(5_000);
    let second = deposit_in_two_pools(&f, &alice);

    f.at(CLAIM_START);
    f.client.withdraw_refund(&alice, &f.stake_token);
    assert_eq!(f.client.total_user_rewards(&alice), 999_000);

    f.client.withdraw_refund(&alice, &second);
    assert_eq!(f.client.total_user_rewards(&alice), 999_000 + 499_500);
    assert_eq!(f.client.claim(&alice), 149_850);
}

#[test]
fn test_rewards_settled_after_last_installment_are_released() {
    let f = setup();
    let alice = f.depositor(5_000);
    let second = deposit_in_two_pools(&f, &alice);

    // Every installment is open; only the first pool is settled.
    f.at(CLAIM_START + CLAIM_CYCLE * (CLAIM_COUNT - 1));
    f.client.withdraw_refund(&alice, &f.stake_token);
    for _ in 0..CLAIM_COUNT {
        assert_eq!(f.client.claim(&alice), 99_900);
    }

    f.client.withdraw_refund(&alice, &second);
    assert_eq!(f.client.total_user_rewards(&alice), 1_498_500);
    assert_eq!(f.client.claim(&alice), 499_500);

    let state = f.client.get_claim_state(&alice);
    assert_eq!(state.claimed_count, CLAIM_COUNT);
    assert_eq!(state.claimed_amount, 1_498_500);
    assert_eq!(f.balance(&f.reward_token, &alice), 1_498_500);

    let result = f.client.try_claim(&alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 10, 11]"#);
}
