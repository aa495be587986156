#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{MiningPeriod, Settlement};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the launchpad is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub collector: Address,
    pub round: u32,
    pub timestamp: u64,
    pub height: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MiningPeriodSetEvent {
    pub start_height: u32,
    pub end_height: u32,
    pub timestamp: u64,
    pub height: u32,
}

/// Fired when a pool is registered or its allocation changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSetEvent {
    pub token: Address,
    pub allocation: i128,
    pub total_allocation: i128,
    pub timestamp: u64,
    pub height: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusSupplySetEvent {
    pub amount: i128,
    pub timestamp: u64,
    pub height: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiplierSetEvent {
    pub refund_option: u32,
    pub multiplier: u32,
    pub timestamp: u64,
    pub height: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimScheduleSetEvent {
    pub count_limit: u32,
    pub start_height: u32,
    pub cycle: u32,
    pub timestamp: u64,
    pub height: u32,
}

/// Fired when a depositor adds principal to a bucket.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub depositor: Address,
    pub token: Address,
    pub refund_option: u32,
    pub amount: i128,
    pub bucket_amount: i128,
    pub total_staked: i128,
    pub timestamp: u64,
    pub height: u32,
}

/// Fired when principal moves to a lower refund option.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositAdjustedEvent {
    pub depositor: Address,
    pub token: Address,
    pub from_option: u32,
    pub to_option: u32,
    pub amount: i128,
    pub timestamp: u64,
    pub height: u32,
}

/// Fired when a depositor's buckets for one token are settled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEvent {
    pub depositor: Address,
    pub token: Address,
    pub reward: i128,
    pub refund: i128,
    pub forfeited: i128,
    pub emergency: bool,
    pub timestamp: u64,
    pub height: u32,
}

/// Fired for every vesting installment paid.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub depositor: Address,
    pub amount: i128,
    pub installment: u32,
    pub timestamp: u64,
    pub height: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub admin: Address,
    pub paused: bool,
    pub timestamp: u64,
    pub height: u32,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    reward_token: Address,
    collector: Address,
    round: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            collector,
            round,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_mining_period_set(env: &Env, period: &MiningPeriod) {
    env.events().publish(
        (symbol_short!("PERIOD"),),
        MiningPeriodSetEvent {
            start_height: period.start_height,
            end_height: period.end_height,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_set(env: &Env, token: Address, allocation: i128, total_allocation: i128) {
    env.events().publish(
        (symbol_short!("POOL_SET"), token.clone()),
        PoolSetEvent {
            token,
            allocation,
            total_allocation,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_bonus_supply_set(env: &Env, amount: i128) {
    env.events().publish(
        (symbol_short!("BONUS"),),
        BonusSupplySetEvent {
            amount,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_multiplier_set(env: &Env, refund_option: u32, multiplier: u32) {
    env.events().publish(
        (symbol_short!("MULT_SET"), refund_option),
        MultiplierSetEvent {
            refund_option,
            multiplier,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_claim_schedule_set(env: &Env, count_limit: u32, start_height: u32, cycle: u32) {
    env.events().publish(
        (symbol_short!("SCHEDULE"),),
        ClaimScheduleSetEvent {
            count_limit,
            start_height,
            cycle,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    depositor: Address,
    token: Address,
    refund_option: u32,
    amount: i128,
    bucket_amount: i128,
    total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), depositor.clone()),
        DepositedEvent {
            depositor,
            token,
            refund_option,
            amount,
            bucket_amount,
            total_staked,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_deposit_adjusted(
    env: &Env,
    depositor: Address,
    token: Address,
    from_option: u32,
    to_option: u32,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("ADJUST"), depositor.clone()),
        DepositAdjustedEvent {
            depositor,
            token,
            from_option,
            to_option,
            amount,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_refund_withdrawn(
    env: &Env,
    depositor: Address,
    settlement: &Settlement,
    emergency: bool,
) {
    env.events().publish(
        (symbol_short!("REFUND"), depositor.clone()),
        RefundWithdrawnEvent {
            depositor,
            token: settlement.token.clone(),
            reward: settlement.reward,
            refund: settlement.refund,
            forfeited: settlement.forfeited,
            emergency,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_claimed(env: &Env, depositor: Address, amount: i128, installment: u32) {
    env.events().publish(
        (symbol_short!("CLAIMED"), depositor.clone()),
        ClaimedEvent {
            depositor,
            amount,
            installment,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_pause_changed(env: &Env, admin: Address, paused: bool) {
    let topic = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    env.events().publish(
        (topic, admin.clone()),
        PauseChangedEvent {
            admin,
            paused,
            timestamp: env.ledger().timestamp(),
            height: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
