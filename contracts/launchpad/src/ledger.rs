use soroban_sdk::{Address, Env, Vec};

use crate::{
    errors::{self, ContractError},
    lifecycle::WriteGuard,
    multiplier, pool, rewards, storage,
    types::{AdjustParams, DepositDetail, DepositParams, DepositRecord, Pool, Settlement},
};

// ── Deposit ──────────────────────────────────────────────────────────────────

/// Book a deposit into `(depositor, token, refund_option)`.
///
/// Only the bookkeeping happens here; the caller pulls the tokens afterwards.
pub fn deposit(
    env: &Env,
    guard: &WriteGuard,
    depositor: &Address,
    params: &DepositParams,
    current: u32,
) -> Result<(DepositRecord, Pool), ContractError> {
    let period = storage::get_period(env);
    if !period.contains(current) {
        return Err(errors::invalid_period(
            env,
            period.start_height,
            period.end_height,
        ));
    }
    if storage::get_pool(env, &params.token).is_none() {
        return Err(errors::invalid_pool(env, &params.token));
    }
    if params.amount <= 0 {
        return Err(errors::below_standard(env, 1, params.amount));
    }
    multiplier::validate_option(env, params.refund_option)?;
    multiplier::require(env, params.refund_option)?;

    let mut pool = pool::checkpoint(env, guard, &params.token, current)?;

    let existing = storage::get_deposit(env, depositor, &params.token, params.refund_option)
        .unwrap_or_else(DepositRecord::empty);
    let mut record = rewards::checkpoint(&existing, pool.acc_reward_per_share)?;

    record.amount = record
        .amount
        .checked_add(params.amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(params.amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    storage::set_pool(env, &pool);
    storage::set_deposit(
        env,
        depositor,
        &params.token,
        params.refund_option,
        &record,
    );
    storage::add_deposit_option(env, depositor, &params.token, params.refund_option);

    Ok((record, pool))
}

// ── Refund-option reassignment ───────────────────────────────────────────────

/// Move a bucket's whole principal to a strictly lower refund option.
///
/// The source keeps the reward it accrued at its own multiplier, with a zero
/// amount; it is paid out together with the other buckets at settlement.
/// Returns the amount moved.
pub fn adjust(
    env: &Env,
    guard: &WriteGuard,
    depositor: &Address,
    params: &AdjustParams,
    current: u32,
) -> Result<i128, ContractError> {
    multiplier::validate_option(env, params.current_option)?;
    if params.replacement_option >= params.current_option {
        return Err(errors::out_of_range(
            env,
            0,
            params.current_option.saturating_sub(1),
            params.replacement_option,
        ));
    }

    let period = storage::get_period(env);
    if !period.contains(current) {
        return Err(errors::invalid_period(
            env,
            period.start_height,
            period.end_height,
        ));
    }
    multiplier::require(env, params.replacement_option)?;

    let source = storage::get_deposit(env, depositor, &params.token, params.current_option)
        .filter(|record| record.amount > 0)
        .ok_or_else(|| errors::invalid_deposited_pool(env, depositor, &params.token))?;

    let pool = pool::checkpoint(env, guard, &params.token, current)?;
    let acc = pool.acc_reward_per_share;

    let mut source = rewards::checkpoint(&source, acc)?;
    let destination = storage::get_deposit(
        env,
        depositor,
        &params.token,
        params.replacement_option,
    )
    .unwrap_or_else(DepositRecord::empty);
    let mut destination = rewards::checkpoint(&destination, acc)?;

    let moved = source.amount;
    destination.amount = destination
        .amount
        .checked_add(moved)
        .ok_or(ContractError::ArithmeticOverflow)?;
    source.amount = 0;

    storage::set_deposit(
        env,
        depositor,
        &params.token,
        params.current_option,
        &source,
    );
    storage::set_deposit(
        env,
        depositor,
        &params.token,
        params.replacement_option,
        &destination,
    );
    storage::add_deposit_option(env, depositor, &params.token, params.replacement_option);

    Ok(moved)
}

// ── Settlement ───────────────────────────────────────────────────────────────

/// Close every bucket the depositor holds for `token`.
///
/// Adds the earned reward to the depositor's vesting entitlement and returns
/// how much principal goes back to the depositor and to the collector. No
/// tokens move here.
pub fn settle(
    env: &Env,
    guard: &WriteGuard,
    depositor: &Address,
    token: &Address,
    current: u32,
) -> Result<Settlement, ContractError> {
    let options = storage::get_deposit_options(env, depositor, token);
    if options.is_empty() {
        return Err(errors::invalid_deposited_pool(env, depositor, token));
    }

    let mut pool = pool::checkpoint(env, guard, token, current)?;

    let mut reward: i128 = 0;
    let mut refund: i128 = 0;
    let mut principal: i128 = 0;
    for option in options.iter() {
        let Some(record) = storage::get_deposit(env, depositor, token, option) else {
            continue;
        };
        let multiplier = multiplier::require(env, option)?;

        let bucket_reward = rewards::bucket_reward(&record, pool.acc_reward_per_share, multiplier)?;
        let bucket_refund = rewards::refund_amount(record.amount, option)?;

        reward = reward
            .checked_add(bucket_reward)
            .ok_or(ContractError::ArithmeticOverflow)?;
        refund = refund
            .checked_add(bucket_refund)
            .ok_or(ContractError::ArithmeticOverflow)?;
        principal = principal
            .checked_add(record.amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        storage::remove_deposit(env, depositor, token, option);
    }
    storage::remove_deposit_options(env, depositor, token);

    pool.total_staked = pool
        .total_staked
        .checked_sub(principal)
        .ok_or(ContractError::ArithmeticOverflow)?;
    storage::set_pool(env, &pool);

    let mut state = storage::get_claim_state(env, depositor);
    state.settled = true;
    state.total_rewards = state
        .total_rewards
        .checked_add(reward)
        .ok_or(ContractError::ArithmeticOverflow)?;
    storage::set_claim_state(env, depositor, &state);

    Ok(Settlement {
        token: token.clone(),
        reward,
        refund,
        forfeited: principal - refund,
    })
}

// ── Views ────────────────────────────────────────────────────────────────────

/// Projected reward of one bucket at `current`. Pure read.
pub fn earned(
    env: &Env,
    depositor: &Address,
    token: &Address,
    refund_option: u32,
    current: u32,
) -> Result<i128, ContractError> {
    let Some(record) = storage::get_deposit(env, depositor, token, refund_option) else {
        return Ok(0);
    };
    let Some(pool) = pool::projected(env, token, current)? else {
        return Ok(0);
    };
    let multiplier = multiplier::require(env, refund_option)?;
    rewards::bucket_reward(&record, pool.acc_reward_per_share, multiplier)
}

/// Sum of `earned` over every bucket the depositor holds for `token`.
pub fn earned_for_all_options(
    env: &Env,
    depositor: &Address,
    token: &Address,
    current: u32,
) -> Result<i128, ContractError> {
    let mut total: i128 = 0;
    for option in storage::get_deposit_options(env, depositor, token).iter() {
        total = total
            .checked_add(earned(env, depositor, token, option, current)?)
            .ok_or(ContractError::ArithmeticOverflow)?;
    }
    Ok(total)
}

pub fn deposit_details(
    env: &Env,
    depositor: &Address,
    token: &Address,
    current: u32,
) -> Result<Vec<DepositDetail>, ContractError> {
    let mut details = Vec::new(env);
    let Some(pool) = pool::projected(env, token, current)? else {
        return Ok(details);
    };

    for option in storage::get_deposit_options(env, depositor, token).iter() {
        let Some(record) = storage::get_deposit(env, depositor, token, option) else {
            continue;
        };
        let multiplier = multiplier::require(env, option)?;
        details.push_back(DepositDetail {
            token: token.clone(),
            refund_option: option,
            amount: record.amount,
            rewards: rewards::bucket_reward(&record, pool.acc_reward_per_share, multiplier)?,
            daily_rewards: rewards::daily_reward(record.amount, &pool, multiplier)?,
        });
    }
    Ok(details)
}
