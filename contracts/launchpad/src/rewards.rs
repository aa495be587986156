use crate::{
    errors::ContractError,
    types::{DepositRecord, MiningPeriod, Pool},
};

/// Fixed-point scaling factor for `acc_reward_per_share`.
///
/// Using 10^12 keeps sub-unit precision for 7-decimal Stellar assets while
/// leaving headroom in `i128` for `amount × Δacc × multiplier`.
pub const SCALE: i128 = 1_000_000_000_000;

/// Multiplier fixed-point base: 1000 = 1.0x.
pub const MULTIPLIER_SCALE: i128 = 1_000;

/// A day of 5-second ledgers.
pub const LEDGERS_PER_DAY: i128 = 60 * 60 * 24 / 5;

// ── Core accrual ─────────────────────────────────────────────────────────────

/// Heights elapsed since `last_accrual`, clamped to the mining window.
///
/// ```text
/// elapsed = min(current, end) − max(last_accrual, start)
/// ```
///
/// Negative spans (before the window opens, or after a checkpoint already at
/// the end) count as zero.
pub fn elapsed_heights(period: &MiningPeriod, last_accrual: u32, current: u32) -> u32 {
    if !period.is_set() {
        return 0;
    }
    let upper = current.min(period.end_height);
    let lower = last_accrual.max(period.start_height);
    upper.saturating_sub(lower)
}

/// Recompute the accumulator after `elapsed` heights at `allocation` per height.
///
/// ```text
/// Δacc = elapsed × allocation × SCALE / total_staked
/// ```
///
/// The accumulator does not move while nothing is staked.
pub fn compute_reward_per_share(
    stored: i128,
    allocation: i128,
    elapsed: u32,
    total_staked: i128,
) -> Result<i128, ContractError> {
    if total_staked <= 0 || elapsed == 0 {
        return Ok(stored);
    }

    let delta = allocation
        .checked_mul(elapsed as i128)
        .and_then(|r| r.checked_mul(SCALE))
        .map(|r| r / total_staked)
        .ok_or(ContractError::ArithmeticOverflow)?;

    stored
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Bring a pool up to `current`, returning the checkpointed copy.
///
/// Pure: the caller decides whether the result is persisted (`ledger`) or
/// only read (`earned` projections).
pub fn accrue(pool: &Pool, period: &MiningPeriod, current: u32) -> Result<Pool, ContractError> {
    let elapsed = elapsed_heights(period, pool.last_accrual_height, current);
    let acc = compute_reward_per_share(
        pool.acc_reward_per_share,
        pool.allocation_per_height,
        elapsed,
        pool.total_staked,
    )?;

    let mut next = pool.clone();
    next.acc_reward_per_share = acc;
    next.last_accrual_height = if period.is_set() {
        current.min(period.end_height)
    } else {
        current
    };
    Ok(next)
}

// ── Per-bucket math ──────────────────────────────────────────────────────────

/// Share-scaled reward a bucket holds at accumulator value `acc`.
///
/// ```text
/// accrued + amount × (acc − reward_per_share_paid)
/// ```
pub fn pending_shares(record: &DepositRecord, acc: i128) -> Result<i128, ContractError> {
    let delta = acc
        .checked_sub(record.reward_per_share_paid)
        .ok_or(ContractError::ArithmeticOverflow)?;
    record
        .amount
        .checked_mul(delta)
        .and_then(|r| r.checked_add(record.accrued))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Move everything accrued so far into `accrued` and reset the debt to `acc`.
pub fn checkpoint(record: &DepositRecord, acc: i128) -> Result<DepositRecord, ContractError> {
    Ok(DepositRecord {
        amount: record.amount,
        reward_per_share_paid: acc,
        accrued: pending_shares(record, acc)?,
    })
}

/// Reward owed to a bucket, in reward-token units.
///
/// Both scaling factors are divided out in a single step after every
/// multiplication so nothing is truncated early.
pub fn bucket_reward(
    record: &DepositRecord,
    acc: i128,
    multiplier: u32,
) -> Result<i128, ContractError> {
    pending_shares(record, acc)?
        .checked_mul(multiplier as i128)
        .map(|r| r / (SCALE * MULTIPLIER_SCALE))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Projected reward for one day at the pool's current rate and stake.
pub fn daily_reward(amount: i128, pool: &Pool, multiplier: u32) -> Result<i128, ContractError> {
    if pool.total_staked <= 0 {
        return Ok(0);
    }
    let denominator = pool
        .total_staked
        .checked_mul(MULTIPLIER_SCALE)
        .ok_or(ContractError::ArithmeticOverflow)?;
    amount
        .checked_mul(pool.allocation_per_height)
        .and_then(|r| r.checked_mul(LEDGERS_PER_DAY))
        .and_then(|r| r.checked_mul(multiplier as i128))
        .map(|r| r / denominator)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Principal returned to the depositor for a bucket: `amount × option / 100`.
pub fn refund_amount(amount: i128, refund_option: u32) -> Result<i128, ContractError> {
    amount
        .checked_mul(refund_option as i128)
        .map(|r| r / 100)
        .ok_or(ContractError::ArithmeticOverflow)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
// Pure math, no Soroban environment needed beyond building a `Pool`.
