use soroban_sdk::{token, Address, Env};

use crate::{
    admin::AdminCap,
    errors::{self, ContractError},
    lifecycle::WriteGuard,
    rewards, storage,
    types::{MiningPeriod, Pool},
};

// ── Balance safety ───────────────────────────────────────────────────────────

/// Reward-token balance held by this contract.
pub fn reward_balance(env: &Env) -> Result<i128, ContractError> {
    let reward_token = storage::get_reward_token(env)?;
    Ok(token::Client::new(env, &reward_token).balance(&env.current_contract_address()))
}

/// `allocation × length + bonus`: what a configuration commits to paying out.
fn committed(allocation: i128, length: u32, bonus: i128) -> Result<i128, ContractError> {
    allocation
        .checked_mul(length as i128)
        .and_then(|r| r.checked_add(bonus))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Total rewards committed by the current configuration.
pub fn total_mining_rewards(env: &Env) -> Result<i128, ContractError> {
    committed(
        storage::get_total_allocation(env),
        storage::get_period(env).length(),
        storage::get_bonus_supply(env),
    )
}

/// Configuration tied to the window is frozen once mining starts, and cannot
/// exist before a window does.
fn require_before_start(
    env: &Env,
    period: &MiningPeriod,
    current: u32,
) -> Result<(), ContractError> {
    if !period.is_set() {
        return Err(errors::over_the_deadline(env, 0));
    }
    if current >= period.start_height {
        return Err(errors::over_the_deadline(
            env,
            period.start_height.saturating_sub(1),
        ));
    }
    Ok(())
}

// ── Configuration ────────────────────────────────────────────────────────────

pub fn set_mining_period(
    env: &Env,
    _cap: &AdminCap,
    start: u32,
    end: u32,
    current: u32,
) -> Result<MiningPeriod, ContractError> {
    let existing = storage::get_period(env);
    if existing.is_set() && current >= existing.start_height {
        return Err(errors::over_the_deadline(
            env,
            existing.start_height.saturating_sub(1),
        ));
    }
    if start <= current {
        return Err(errors::below_standard(
            env,
            current as i128 + 1,
            start as i128,
        ));
    }
    if end <= start {
        return Err(errors::below_standard(env, start as i128 + 1, end as i128));
    }

    let period = MiningPeriod {
        start_height: start,
        end_height: end,
    };

    // A longer window stretches every existing allocation.
    let needed = committed(
        storage::get_total_allocation(env),
        period.length(),
        storage::get_bonus_supply(env),
    )?;
    let balance = reward_balance(env)?;
    if needed > balance {
        return Err(errors::over_the_limit(env, balance, needed));
    }

    storage::set_period(env, &period);
    Ok(period)
}

/// Add a pool or change its allocation.
///
/// The pool is checkpointed first so elapsed heights keep the old rate.
pub fn set_pool(
    env: &Env,
    _cap: &AdminCap,
    _guard: &WriteGuard,
    token: &Address,
    allocation: i128,
    current: u32,
) -> Result<Pool, ContractError> {
    let period = storage::get_period(env);
    require_before_start(env, &period, current)?;

    if *token == storage::get_reward_token(env)? {
        return Err(errors::invalid_pool(env, token));
    }
    if allocation < 0 {
        return Err(errors::below_standard(env, 0, allocation));
    }

    let existing = storage::get_pool(env, token);
    let previous_allocation = existing
        .as_ref()
        .map(|p| p.allocation_per_height)
        .unwrap_or(0);
    let other_allocations = storage::get_total_allocation(env)
        .checked_sub(previous_allocation)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let new_total = other_allocations
        .checked_add(allocation)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let length = period.length();
    let bonus = storage::get_bonus_supply(env);
    let balance = reward_balance(env)?;
    if committed(new_total, length, bonus)? > balance {
        let reserved = committed(other_allocations, length, bonus)?;
        let max_allocation = balance.saturating_sub(reserved).max(0) / length as i128;
        return Err(errors::over_the_limit(env, max_allocation, allocation));
    }

    let mut pool = match existing {
        Some(pool) => rewards::accrue(&pool, &period, current)?,
        None => Pool {
            token: token.clone(),
            allocation_per_height: 0,
            acc_reward_per_share: 0,
            last_accrual_height: current,
            total_staked: 0,
        },
    };
    pool.allocation_per_height = allocation;

    storage::set_pool(env, &pool);
    storage::set_total_allocation(env, new_total);
    Ok(pool)
}

pub fn set_bonus_reward_supply(
    env: &Env,
    _cap: &AdminCap,
    amount: i128,
    current: u32,
) -> Result<(), ContractError> {
    let period = storage::get_period(env);
    require_before_start(env, &period, current)?;

    if amount < 0 {
        return Err(errors::below_standard(env, 0, amount));
    }

    let allocated = committed(storage::get_total_allocation(env), period.length(), 0)?;
    let balance = reward_balance(env)?;
    let max_bonus = balance.saturating_sub(allocated).max(0);
    if amount > max_bonus {
        return Err(errors::over_the_limit(env, max_bonus, amount));
    }

    storage::set_bonus_supply(env, amount);
    Ok(())
}

// ── Accrual checkpoints ──────────────────────────────────────────────────────

/// Accrue `token`'s pool up to `current` and persist it.
pub fn checkpoint(
    env: &Env,
    _guard: &WriteGuard,
    token: &Address,
    current: u32,
) -> Result<Pool, ContractError> {
    let pool = storage::get_pool(env, token).ok_or_else(|| errors::invalid_pool(env, token))?;
    let pool = rewards::accrue(&pool, &storage::get_period(env), current)?;
    storage::set_pool(env, &pool);
    Ok(pool)
}

/// Accrued view of `token`'s pool at `current`, without writing anything.
pub fn projected(env: &Env, token: &Address, current: u32) -> Result<Option<Pool>, ContractError> {
    match storage::get_pool(env, token) {
        Some(pool) => Ok(Some(rewards::accrue(
            &pool,
            &storage::get_period(env),
            current,
        )?)),
        None => Ok(None),
    }
}
