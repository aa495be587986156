use soroban_sdk::{contracttype, Address, Vec};

// ── Configuration ────────────────────────────────────────────────────────────

/// Height window during which deposits are accepted and rewards accrue.
///
/// Both bounds are inclusive. `{0, 0}` means no window has been configured.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MiningPeriod {
    pub start_height: u32,
    pub end_height: u32,
}

impl MiningPeriod {
    pub fn unset() -> Self {
        MiningPeriod {
            start_height: 0,
            end_height: 0,
        }
    }

    pub fn is_set(&self) -> bool {
        self.end_height > self.start_height
    }

    /// Number of heights covered by the window, both ends included.
    pub fn length(&self) -> u32 {
        if !self.is_set() {
            return 0;
        }
        self.end_height - self.start_height + 1
    }

    pub fn contains(&self, height: u32) -> bool {
        self.is_set() && self.start_height <= height && height <= self.end_height
    }
}

/// One staking pool per token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub token: Address,
    pub allocation_per_height: i128,
    /// Reward per staked unit, scaled by `rewards::SCALE`.
    pub acc_reward_per_share: i128,
    pub last_accrual_height: u32,
    pub total_staked: i128,
}

/// Pool entry accepted by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub staking_token: Address,
    pub allocation: i128,
}

/// Maps a refund option (0–100) to a reward multiplier where 1000 = 1.0x.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiplierEntry {
    pub refund_option: u32,
    pub multiplier: u32,
}

/// Vesting schedule applied to every settled entitlement.
///
/// `count_limit == 0` means no schedule has been configured.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSchedule {
    pub count_limit: u32,
    pub start_height: u32,
    pub cycle: u32,
}

impl ClaimSchedule {
    pub fn unset() -> Self {
        ClaimSchedule {
            count_limit: 0,
            start_height: 0,
            cycle: 0,
        }
    }

    pub fn is_set(&self) -> bool {
        self.count_limit > 0
    }
}

/// Everything `initialize` configures in one call. Zeroed sections are skipped.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitParams {
    pub mining_start_height: u32,
    pub mining_end_height: u32,
    pub bonus_supply: i128,
    pub pools: Vec<PoolConfig>,
    pub multipliers: Vec<MultiplierEntry>,
    pub claim_schedule: ClaimSchedule,
}

// ── Depositor requests ───────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositParams {
    pub token: Address,
    pub amount: i128,
    pub refund_option: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjustParams {
    pub token: Address,
    pub current_option: u32,
    pub replacement_option: u32,
}

// ── Ledger records ───────────────────────────────────────────────────────────

/// Deposit bucket keyed by `(depositor, token, refund_option)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    pub amount: i128,
    /// Pool accumulator value at the last checkpoint of this bucket.
    pub reward_per_share_paid: i128,
    /// Share-scaled reward checkpointed so far, before the multiplier.
    pub accrued: i128,
}

impl DepositRecord {
    pub fn empty() -> Self {
        DepositRecord {
            amount: 0,
            reward_per_share_paid: 0,
            accrued: 0,
        }
    }
}

/// Per-bucket reporting row returned by `get_deposit_info_list`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositDetail {
    pub token: Address,
    pub refund_option: u32,
    pub amount: i128,
    pub rewards: i128,
    pub daily_rewards: i128,
}

/// Outcome of settling every bucket a depositor holds for one token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub token: Address,
    pub reward: i128,
    pub refund: i128,
    pub forfeited: i128,
}

/// Per-depositor vesting progress.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimState {
    pub settled: bool,
    pub total_rewards: i128,
    pub claimed_count: u32,
    pub claimed_amount: i128,
}

impl ClaimState {
    pub fn empty() -> Self {
        ClaimState {
            settled: false,
            total_rewards: 0,
            claimed_count: 0,
            claimed_amount: 0,
        }
    }
}
