use soroban_sdk::{Address, Env};

use crate::{
    admin::AdminCap,
    errors::{self, ContractError},
    lifecycle::WriteGuard,
    storage,
    types::{ClaimSchedule, ClaimState},
};

// ── Schedule ─────────────────────────────────────────────────────────────────

pub fn set_claim_schedule(
    env: &Env,
    _cap: &AdminCap,
    schedule: &ClaimSchedule,
    current: u32,
) -> Result<(), ContractError> {
    let existing = storage::get_claim_schedule(env);
    if existing.is_set() && current >= existing.start_height {
        return Err(errors::over_the_deadline(
            env,
            existing.start_height.saturating_sub(1),
        ));
    }
    if schedule.count_limit < 1 {
        return Err(errors::below_standard(
            env,
            1,
            schedule.count_limit as i128,
        ));
    }
    if schedule.start_height <= current {
        return Err(errors::below_standard(
            env,
            current as i128 + 1,
            schedule.start_height as i128,
        ));
    }

    // The final installment height must be representable.
    let last = schedule.start_height as u64
        + schedule.cycle as u64 * (schedule.count_limit as u64 - 1);
    if last > u32::MAX as u64 {
        return Err(errors::over_the_limit(
            env,
            u32::MAX as i128,
            last as i128,
        ));
    }

    storage::set_claim_schedule(env, schedule);
    Ok(())
}

/// Height from which installment `n` (1-based) can be claimed.
///
/// ```text
/// claimable_block(n) = start + cycle × (n − 1)
/// ```
pub fn claimable_block(env: &Env, schedule: &ClaimSchedule, n: u32) -> Result<u32, ContractError> {
    if n == 0 || n > schedule.count_limit {
        return Err(errors::out_of_range(env, 1, schedule.count_limit, n));
    }
    schedule
        .cycle
        .checked_mul(n - 1)
        .and_then(|offset| schedule.start_height.checked_add(offset))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Amount paid by the next installment. The final one takes whatever the
/// earlier truncated installments left behind.
pub fn installment(state: &ClaimState, schedule: &ClaimSchedule) -> Result<i128, ContractError> {
    if state.claimed_count + 1 >= schedule.count_limit {
        return state
            .total_rewards
            .checked_sub(state.claimed_amount)
            .ok_or(ContractError::ArithmeticOverflow);
    }
    Ok(state.total_rewards / schedule.count_limit as i128)
}

// ── Claim ────────────────────────────────────────────────────────────────────

/// Book the next installment for `depositor` and return its amount.
///
/// Once every installment is paid, a claim releases whatever was settled
/// since, and fails with `OverTheLimit` when nothing is outstanding.
pub fn claim(
    env: &Env,
    _guard: &WriteGuard,
    depositor: &Address,
    current: u32,
) -> Result<i128, ContractError> {
    let mut state = storage::get_claim_state(env, depositor);
    if !state.settled {
        return Err(errors::claim_unauthorized(env, depositor));
    }

    let schedule = storage::get_claim_schedule(env);
    if !schedule.is_set() {
        return Err(errors::not_yet_started(env, 0));
    }
    if state.claimed_count >= schedule.count_limit {
        // Rewards settled after the final installment are released at once.
        let outstanding = state
            .total_rewards
            .checked_sub(state.claimed_amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        if outstanding <= 0 {
            return Err(errors::over_the_limit(
                env,
                schedule.count_limit as i128,
                state.claimed_count as i128 + 1,
            ));
        }
        state.claimed_amount = state.total_rewards;
        storage::set_claim_state(env, depositor, &state);
        return Ok(outstanding);
    }

    let next = state.claimed_count + 1;
    let opens_at = claimable_block(env, &schedule, next)?;
    if current < opens_at {
        return Err(errors::not_yet_started(env, opens_at));
    }

    let amount = installment(&state, &schedule)?;
    state.claimed_count = next;
    state.claimed_amount = state
        .claimed_amount
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    storage::set_claim_state(env, depositor, &state);

    Ok(amount)
}
