extern crate std;

use soroban_sdk::{testutils::Address as _, vec, Address};

use crate::{
    test::{assert_logged, bare, setup, ALLOCATION, BONUS, CLAIM_START, END, FUNDING, START},
    ClaimSchedule, ContractError, MultiplierEntry,
};

// ── Mining window ────────────────────────────────────────────────────────────

#[test]
fn test_period_can_change_before_start() {
    let f = setup();

    f.client.set_mining_period(&f.admin, &START, &599);
    let period = f.client.get_mining_period();
    assert_eq!(period.start_height, START);
    assert_eq!(period.end_height, 599);
    assert_eq!(f.client.total_mining_rewards(), ALLOCATION * 500 + BONUS);
}

#[test]
fn test_period_frozen_once_started() {
    let f = setup();
    f.at(START);

    let result = f.client.try_set_mining_period(&f.admin, &200, &900);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheDeadline),
        _ => unreachable!("Expected OverTheDeadline error"),
    }
    assert_logged(&f.env, r#"["OverTheDeadline", 99]"#);
}

#[test]
fn test_period_bounds() {
    let f = setup();

    // Start must lie in the future.
    let result = f.client.try_set_mining_period(&f.admin, &10, &900);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::BelowStandard),
        _ => unreachable!("Expected BelowStandard error"),
    }
    assert_logged(&f.env, r#"["BelowStandard", 11, 10]"#);

    // End must come after start.
    let result = f.client.try_set_mining_period(&f.admin, &200, &200);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::BelowStandard),
        _ => unreachable!("Expected BelowStandard error"),
    }
    assert_logged(&f.env, r#"["BelowStandard", 201, 200]"#);
}

#[test]
fn test_longer_period_needs_more_funding() {
    let f = setup();

    let result = f.client.try_set_mining_period(&f.admin, &START, &(END + 100));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 2850000, 2950000]"#);

    f.mint(&f.reward_token, &f.contract_id, ALLOCATION * 100);
    f.client.set_mining_period(&f.admin, &START, &(END + 100));
    assert_eq!(
        f.client.total_mining_rewards(),
        FUNDING + ALLOCATION * 100
    );
}

// ── Pools ────────────────────────────────────────────────────────────────────

#[test]
fn test_pool_needs_a_period() {
    let f = bare();
    f.init(&f.empty_params());

    let result = f.client.try_set_pool(&f.admin, &f.stake_token, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheDeadline),
        _ => unreachable!("Expected OverTheDeadline error"),
    }
    assert_logged(&f.env, r#"["OverTheDeadline", 0]"#);
}

#[test]
fn test_pool_allocation_capped_by_balance() {
    let f = setup();

    let result = f.client.try_set_pool(&f.admin, &f.stake_token, &(ALLOCATION + 1));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 1000, 1001]"#);

    // Lowering is always fine and frees room for the bonus.
    f.client.set_pool(&f.admin, &f.stake_token, &(ALLOCATION / 2));
    assert_eq!(f.client.total_allocation_per_block(), ALLOCATION / 2);
    assert_eq!(
        f.client.get_pool(&f.stake_token).unwrap().allocation_per_height,
        ALLOCATION / 2
    );
}

#[test]
fn test_two_pools_sum_allocations() {
    let f = setup();
    let second = f
        .env
        .register_stellar_asset_contract_v2(Address::generate(&f.env))
        .address();

    let result = f.client.try_set_pool(&f.admin, &second, &500);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 0, 500]"#);

    f.mint(&f.reward_token, &f.contract_id, 500_000);
    f.client.set_pool(&f.admin, &second, &500);

    assert_eq!(f.client.total_allocation_per_block(), 1_500);
    assert_eq!(f.client.total_mining_rewards(), 1_500 * 1_000 + BONUS);
    assert_eq!(
        f.client.get_pool_tokens(),
        vec![&f.env, f.stake_token.clone(), second]
    );
}

#[test]
fn test_pool_rejects_reward_token_and_negative_allocation() {
    let f = setup();

    let result = f.client.try_set_pool(&f.admin, &f.reward_token, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidPool),
        _ => unreachable!("Expected InvalidPool error"),
    }

    let result = f.client.try_set_pool(&f.admin, &f.stake_token, &-1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::BelowStandard),
        _ => unreachable!("Expected BelowStandard error"),
    }
    assert_logged(&f.env, r#"["BelowStandard", 0, -1]"#);
}

#[test]
fn test_pool_frozen_once_started() {
    let f = setup();
    f.at(START);

    let result = f.client.try_set_pool(&f.admin, &f.stake_token, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheDeadline),
        _ => unreachable!("Expected OverTheDeadline error"),
    }
    assert_logged(&f.env, r#"["OverTheDeadline", 99]"#);
}

// ── Bonus supply ─────────────────────────────────────────────────────────────

#[test]
fn test_bonus_capped_by_unallocated_balance() {
    let f = setup();

    let result = f.client.try_set_bonus_reward_supply(&f.admin, &(BONUS + 1));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 1850000, 1850001]"#);

    let result = f.client.try_set_bonus_reward_supply(&f.admin, &-1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::BelowStandard),
        _ => unreachable!("Expected BelowStandard error"),
    }

    f.client.set_bonus_reward_supply(&f.admin, &0);
    assert_eq!(f.client.bonus_reward_supply(), 0);
    assert_eq!(f.client.total_mining_rewards(), ALLOCATION * 1_000);
}

// ── Multipliers ──────────────────────────────────────────────────────────────

#[test]
fn test_multiplier_option_range() {
    let f = setup();

    f.client.set_mining_multiplier(&f.admin, &10, &2_700);
    assert_eq!(f.client.get_multiplier(&10), Some(2_700));

    let result = f.client.try_set_mining_multiplier(&f.admin, &101, &1_000);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OutOfRange),
        _ => unreachable!("Expected OutOfRange error"),
    }
    assert_logged(&f.env, r#"["OutOfRange", 0, 100, 101]"#);
}

#[test]
fn test_multiplier_batch_is_all_or_nothing() {
    let f = setup();

    let entries = vec![
        &f.env,
        MultiplierEntry {
            refund_option: 20,
            multiplier: 2_600,
        },
        MultiplierEntry {
            refund_option: 150,
            multiplier: 1_000,
        },
    ];
    let result = f.client.try_set_mining_multiplier_batch(&f.admin, &entries);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OutOfRange),
        _ => unreachable!("Expected OutOfRange error"),
    }
    assert_eq!(f.client.get_multiplier(&20), None);
}

// ── Claim schedule ───────────────────────────────────────────────────────────

#[test]
fn test_claimable_block_is_linear() {
    let f = setup();

    assert_eq!(f.client.claimable_block(&1), CLAIM_START);
    assert_eq!(f.client.claimable_block(&10), CLAIM_START + 900);

    let result = f.client.try_claimable_block(&0);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OutOfRange),
        _ => unreachable!("Expected OutOfRange error"),
    }
    assert_logged(&f.env, r#"["OutOfRange", 1, 10, 0]"#);

    let result = f.client.try_claimable_block(&11);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OutOfRange),
        _ => unreachable!("Expected OutOfRange error"),
    }
}

#[test]
fn test_schedule_bounds() {
    let f = setup();

    let result = f.client.try_set_claim_schedule(
        &f.admin,
        &ClaimSchedule {
            count_limit: 0,
            start_height: 2_000,
            cycle: 10,
        },
    );
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::BelowStandard),
        _ => unreachable!("Expected BelowStandard error"),
    }
    assert_logged(&f.env, r#"["BelowStandard", 1, 0]"#);

    let result = f.client.try_set_claim_schedule(
        &f.admin,
        &ClaimSchedule {
            count_limit: 3,
            start_height: 10,
            cycle: 10,
        },
    );
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::BelowStandard),
        _ => unreachable!("Expected BelowStandard error"),
    }
    assert_logged(&f.env, r#"["BelowStandard", 11, 10]"#);

    let result = f.client.try_set_claim_schedule(
        &f.admin,
        &ClaimSchedule {
            count_limit: 3,
            start_height: u32::MAX - 10,
            cycle: 10,
        },
    );
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheLimit),
        _ => unreachable!("Expected OverTheLimit error"),
    }
    assert_logged(&f.env, r#"["OverTheLimit", 4294967295, 4294967305]"#);
}

#[test]
fn test_schedule_frozen_once_started() {
    let f = setup();
    f.at(CLAIM_START);

    let result = f.client.try_set_claim_schedule(
        &f.admin,
        &ClaimSchedule {
            count_limit: 5,
            start_height: 3_000,
            cycle: 10,
        },
    );
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::OverTheDeadline),
        _ => unreachable!("Expected OverTheDeadline error"),
    }
    assert_logged(&f.env, r#"["OverTheDeadline", 1199]"#);
}

// ── Access control ───────────────────────────────────────────────────────────

#[test]
fn test_setters_are_owner_only() {
    let f = setup();
    let stranger = Address::generate(&f.env);

    let result = f.client.try_set_pool(&stranger, &f.stake_token, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    let result = f.client.try_set_mining_period(&stranger, &START, &END);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    let result = f.client.try_set_mining_multiplier(&stranger, &10, &1_000);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}
