#![no_std]

pub mod admin;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod multiplier;
pub mod pool;
pub mod rewards;
pub mod storage;
pub mod types;
pub mod vesting;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

pub use errors::{ContractError, ErrorCategory};
use lifecycle::WriteGuard;
pub use types::{
    AdjustParams, ClaimSchedule, ClaimState, DepositDetail, DepositParams, DepositRecord,
    InitParams, MiningPeriod, MultiplierEntry, Pool, PoolConfig, Settlement,
};

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct LaunchpadContract;

#[contractimpl]
impl LaunchpadContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the launchpad.
    ///
    /// * `reward_token` – SAC address of the token paid out as rewards. The
    ///   contract must already hold enough of it for everything `params`
    ///   commits to.
    /// * `collector`    – receives the principal forfeited by refund options
    ///   below 100.
    /// * `round`        – launchpad round identifier, informational only.
    /// * `params`       – window, bonus, pools, multipliers and schedule. Each
    ///   section goes through the same checks as its setter; zeroed sections
    ///   are skipped.
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        collector: Address,
        round: u32,
        params: InitParams,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        let cap = admin::bootstrap(&env, &admin);
        storage::set_initialized(&env, &reward_token, &collector, round);
        storage::extend_instance_ttl(&env);

        let guard = WriteGuard::acquire(&env)?;
        let current = env.ledger().sequence();

        if params.mining_start_height != 0 || params.mining_end_height != 0 {
            let period = pool::set_mining_period(
                &env,
                &cap,
                params.mining_start_height,
                params.mining_end_height,
                current,
            )?;
            events::publish_mining_period_set(&env, &period);
        }
        for config in params.pools.iter() {
            let configured = pool::set_pool(
                &env,
                &cap,
                &guard,
                &config.staking_token,
                config.allocation,
                current,
            )?;
            events::publish_pool_set(
                &env,
                configured.token,
                configured.allocation_per_height,
                storage::get_total_allocation(&env),
            );
        }
        if params.bonus_supply != 0 {
            pool::set_bonus_reward_supply(&env, &cap, params.bonus_supply, current)?;
            events::publish_bonus_supply_set(&env, params.bonus_supply);
        }
        if !params.multipliers.is_empty() {
            multiplier::set_batch(&env, &cap, &params.multipliers)?;
            for entry in params.multipliers.iter() {
                events::publish_multiplier_set(&env, entry.refund_option, entry.multiplier);
            }
        }
        if params.claim_schedule.is_set() {
            let schedule = params.claim_schedule;
            vesting::set_claim_schedule(&env, &cap, &schedule, current)?;
            events::publish_claim_schedule_set(
                &env,
                schedule.count_limit,
                schedule.start_height,
                schedule.cycle,
            );
        }

        events::publish_initialized(&env, admin, reward_token, collector, round);

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Set the mining window. Allowed until the current window starts.
    pub fn set_mining_period(
        env: Env,
        caller: Address,
        start_height: u32,
        end_height: u32,
    ) -> Result<(), ContractError> {
        let cap = Self::require_owner_write(&env, &caller)?;
        let _guard = WriteGuard::acquire(&env)?;

        let period = pool::set_mining_period(
            &env,
            &cap,
            start_height,
            end_height,
            env.ledger().sequence(),
        )?;

        events::publish_mining_period_set(&env, &period);
        Ok(())
    }

    /// Register a staking pool or change its per-height allocation.
    pub fn set_pool(
        env: Env,
        caller: Address,
        token: Address,
        allocation: i128,
    ) -> Result<(), ContractError> {
        let cap = Self::require_owner_write(&env, &caller)?;
        let guard = WriteGuard::acquire(&env)?;

        let configured = pool::set_pool(
            &env,
            &cap,
            &guard,
            &token,
            allocation,
            env.ledger().sequence(),
        )?;

        events::publish_pool_set(
            &env,
            token,
            configured.allocation_per_height,
            storage::get_total_allocation(&env),
        );
        Ok(())
    }

    pub fn set_bonus_reward_supply(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let cap = Self::require_owner_write(&env, &caller)?;
        let _guard = WriteGuard::acquire(&env)?;

        pool::set_bonus_reward_supply(&env, &cap, amount, env.ledger().sequence())?;

        events::publish_bonus_supply_set(&env, amount);
        Ok(())
    }

    // ── Multiplier table ────────────────────────────────────────────────────

    /// Set the reward multiplier (1000 = 1.0x) for one refund option.
    pub fn set_mining_multiplier(
        env: Env,
        caller: Address,
        refund_option: u32,
        multiplier: u32,
    ) -> Result<(), ContractError> {
        let cap = Self::require_owner_write(&env, &caller)?;
        let _guard = WriteGuard::acquire(&env)?;

        multiplier::set(
            &env,
            &cap,
            &MultiplierEntry {
                refund_option,
                multiplier,
            },
        )?;

        events::publish_multiplier_set(&env, refund_option, multiplier);
        Ok(())
    }

    /// Set several multipliers at once. Nothing is written if any entry is
    /// out of range.
    pub fn set_mining_multiplier_batch(
        env: Env,
        caller: Address,
        entries: Vec<MultiplierEntry>,
    ) -> Result<(), ContractError> {
        let cap = Self::require_owner_write(&env, &caller)?;
        let _guard = WriteGuard::acquire(&env)?;

        multiplier::set_batch(&env, &cap, &entries)?;

        for entry in entries.iter() {
            events::publish_multiplier_set(&env, entry.refund_option, entry.multiplier);
        }
        Ok(())
    }

    // ── Vesting schedule ────────────────────────────────────────────────────

    pub fn set_claim_schedule(
        env: Env,
        caller: Address,
        schedule: ClaimSchedule,
    ) -> Result<(), ContractError> {
        let cap = Self::require_owner_write(&env, &caller)?;
        let _guard = WriteGuard::acquire(&env)?;

        vesting::set_claim_schedule(&env, &cap, &schedule, env.ledger().sequence())?;

        events::publish_claim_schedule_set(
            &env,
            schedule.count_limit,
            schedule.start_height,
            schedule.cycle,
        );
        Ok(())
    }

    // ── Deposits ────────────────────────────────────────────────────────────

    /// Stake `params.amount` of `params.token` under a refund option.
    ///
    /// The pool is checkpointed before the stake changes, so the new
    /// principal only earns from this height on.
    pub fn deposit(env: Env, depositor: Address, params: DepositParams) -> Result<(), ContractError> {
        Self::require_writable(&env, &depositor)?;
        let guard = WriteGuard::acquire(&env)?;

        let (record, pool) =
            ledger::deposit(&env, &guard, &depositor, &params, env.ledger().sequence())?;

        token::Client::new(&env, &params.token).transfer(
            &depositor,
            &env.current_contract_address(),
            &params.amount,
        );

        events::publish_deposited(
            &env,
            depositor,
            params.token,
            params.refund_option,
            params.amount,
            record.amount,
            pool.total_staked,
        );
        Ok(())
    }

    /// Move a bucket's principal to a lower refund option during the window.
    pub fn adjust_deposit(
        env: Env,
        depositor: Address,
        params: AdjustParams,
    ) -> Result<(), ContractError> {
        Self::require_writable(&env, &depositor)?;
        let guard = WriteGuard::acquire(&env)?;

        let moved = ledger::adjust(&env, &guard, &depositor, &params, env.ledger().sequence())?;

        events::publish_deposit_adjusted(
            &env,
            depositor,
            params.token,
            params.current_option,
            params.replacement_option,
            moved,
        );
        Ok(())
    }

    // ── Settlement ──────────────────────────────────────────────────────────

    /// Settle every bucket the depositor holds for `token` once the window
    /// has closed.
    ///
    /// The refund goes back to the depositor and the forfeited principal to
    /// the collector. Earned rewards are not paid here; they join the
    /// depositor's vesting entitlement and are released through `claim`.
    pub fn withdraw_refund(
        env: Env,
        depositor: Address,
        token: Address,
    ) -> Result<Settlement, ContractError> {
        Self::require_writable(&env, &depositor)?;
        let guard = WriteGuard::acquire(&env)?;
        let current = env.ledger().sequence();
        Self::require_window_closed(&env, current)?;

        let settlement = ledger::settle(&env, &guard, &depositor, &token, current)?;

        Self::pay_out(&env, &depositor, &settlement)?;
        events::publish_refund_withdrawn(&env, depositor, &settlement, false);
        Ok(settlement)
    }

    /// Owner-driven settlement for many depositors of one token.
    ///
    /// Depositors with nothing open for `token` are skipped. Returns how many
    /// were settled.
    pub fn withdraw_refund_batch(
        env: Env,
        caller: Address,
        token: Address,
        depositors: Vec<Address>,
    ) -> Result<u32, ContractError> {
        let _cap = Self::require_owner_write(&env, &caller)?;
        let guard = WriteGuard::acquire(&env)?;
        let current = env.ledger().sequence();
        Self::require_window_closed(&env, current)?;

        let mut settled: Vec<(Address, Settlement)> = Vec::new(&env);
        for depositor in depositors.iter() {
            if storage::get_deposit_options(&env, &depositor, &token).is_empty() {
                continue;
            }
            let settlement = ledger::settle(&env, &guard, &depositor, &token, current)?;
            settled.push_back((depositor, settlement));
        }

        // Transfers only after every depositor has been booked.
        for (depositor, settlement) in settled.iter() {
            Self::pay_out(&env, &depositor, &settlement)?;
            events::publish_refund_withdrawn(&env, depositor, &settlement, false);
        }
        Ok(settled.len())
    }

    /// Pay the next vesting installment of the depositor's settled rewards.
    pub fn claim(env: Env, depositor: Address) -> Result<i128, ContractError> {
        Self::require_writable(&env, &depositor)?;
        let guard = WriteGuard::acquire(&env)?;

        let amount = vesting::claim(&env, &guard, &depositor, env.ledger().sequence())?;
        let installment = storage::get_claim_state(&env, &depositor).claimed_count;

        if amount > 0 {
            let reward_token = storage::get_reward_token(&env)?;
            token::Client::new(&env, &reward_token).transfer(
                &env.current_contract_address(),
                &depositor,
                &amount,
            );
        }

        events::publish_claimed(&env, depositor, amount, installment);
        Ok(amount)
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        let cap = admin::authorize(&env, &caller)?;

        lifecycle::pause(&env, &cap)?;

        events::publish_pause_changed(&env, caller, true);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        let cap = admin::authorize(&env, &caller)?;

        lifecycle::unpause(&env, &cap)?;

        events::publish_pause_changed(&env, caller, false);
        Ok(())
    }

    /// Settle a depositor while the launchpad is paused, ignoring the window.
    pub fn emergency_withdraw_refund(
        env: Env,
        caller: Address,
        depositor: Address,
        token: Address,
    ) -> Result<Settlement, ContractError> {
        storage::require_initialized(&env)?;
        let _cap = admin::authorize(&env, &caller)?;
        lifecycle::require_paused(&env)?;
        let guard = WriteGuard::acquire(&env)?;
        storage::extend_instance_ttl(&env);

        let settlement =
            ledger::settle(&env, &guard, &depositor, &token, env.ledger().sequence())?;

        Self::pay_out(&env, &depositor, &settlement)?;
        events::publish_refund_withdrawn(&env, depositor, &settlement, true);
        Ok(settlement)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new owner. The proposed address completes the transfer with
    /// `accept_admin`.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        let cap = admin::authorize(&env, &current_admin)?;

        admin::propose(&env, &cap, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);
        Ok(())
    }

    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;

        let old_admin = admin::accept(&env, &new_admin)?;

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);
        Ok(())
    }

    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        let cap = admin::authorize(&env, &current_admin)?;

        let pending = admin::cancel(&env, &cap)?;

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);
        Ok(())
    }

    // ── Reward views ────────────────────────────────────────────────────────

    /// Reward a bucket would receive if settled at the current height.
    pub fn earned(
        env: Env,
        depositor: Address,
        token: Address,
        refund_option: u32,
    ) -> Result<i128, ContractError> {
        ledger::earned(
            &env,
            &depositor,
            &token,
            refund_option,
            env.ledger().sequence(),
        )
    }

    pub fn earned_for_all_options(
        env: Env,
        depositor: Address,
        token: Address,
    ) -> Result<i128, ContractError> {
        ledger::earned_for_all_options(&env, &depositor, &token, env.ledger().sequence())
    }

    pub fn get_deposit_info(
        env: Env,
        depositor: Address,
        token: Address,
        refund_option: u32,
    ) -> Option<DepositRecord> {
        storage::get_deposit(&env, &depositor, &token, refund_option)
    }

    /// One row per open bucket, with projected and per-day rewards.
    pub fn get_deposit_info_list(
        env: Env,
        depositor: Address,
        token: Address,
    ) -> Result<Vec<DepositDetail>, ContractError> {
        ledger::deposit_details(&env, &depositor, &token, env.ledger().sequence())
    }

    pub fn get_deposit_options(env: Env, depositor: Address, token: Address) -> Vec<u32> {
        storage::get_deposit_options(&env, &depositor, &token)
    }

    pub fn total_user_rewards(env: Env, depositor: Address) -> i128 {
        storage::get_claim_state(&env, &depositor).total_rewards
    }

    pub fn get_claim_state(env: Env, depositor: Address) -> ClaimState {
        storage::get_claim_state(&env, &depositor)
    }

    // ── Configuration views ─────────────────────────────────────────────────

    pub fn total_allocation_per_block(env: Env) -> i128 {
        storage::get_total_allocation(&env)
    }

    /// `total_allocation × window length + bonus supply`.
    pub fn total_mining_rewards(env: Env) -> Result<i128, ContractError> {
        pool::total_mining_rewards(&env)
    }

    pub fn bonus_reward_supply(env: Env) -> i128 {
        storage::get_bonus_supply(&env)
    }

    /// Height from which installment `n` (1-based) can be claimed.
    pub fn claimable_block(env: Env, n: u32) -> Result<u32, ContractError> {
        vesting::claimable_block(&env, &storage::get_claim_schedule(&env), n)
    }

    pub fn get_claim_schedule(env: Env) -> ClaimSchedule {
        storage::get_claim_schedule(&env)
    }

    pub fn get_mining_period(env: Env) -> MiningPeriod {
        storage::get_period(&env)
    }

    pub fn get_pool(env: Env, token: Address) -> Option<Pool> {
        storage::get_pool(&env, &token)
    }

    pub fn get_pool_tokens(env: Env) -> Vec<Address> {
        storage::get_pool_tokens(&env)
    }

    pub fn get_multiplier(env: Env, refund_option: u32) -> Option<u32> {
        storage::get_multiplier(&env, refund_option)
    }

    pub fn reward_token(env: Env) -> Result<Address, ContractError> {
        storage::get_reward_token(&env)
    }

    pub fn collector(env: Env) -> Result<Address, ContractError> {
        storage::get_collector(&env)
    }

    pub fn round(env: Env) -> u32 {
        storage::get_round(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        lifecycle::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        storage::get_pending_admin(&env)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    /// Gate shared by the owner setters: initialized, owner-signed, not paused.
    fn require_owner_write(env: &Env, caller: &Address) -> Result<admin::AdminCap, ContractError> {
        storage::require_initialized(env)?;
        let cap = admin::authorize(env, caller)?;
        lifecycle::require_not_paused(env)?;
        storage::extend_instance_ttl(env);
        Ok(cap)
    }

    /// Gate shared by depositor operations.
    fn require_writable(env: &Env, depositor: &Address) -> Result<(), ContractError> {
        storage::require_initialized(env)?;
        depositor.require_auth();
        lifecycle::require_not_paused(env)?;
        storage::extend_instance_ttl(env);
        Ok(())
    }

    fn require_window_closed(env: &Env, current: u32) -> Result<(), ContractError> {
        let period = storage::get_period(env);
        if !period.is_set() || current <= period.end_height {
            return Err(errors::not_yet_started(
                env,
                period.end_height.saturating_add(1),
            ));
        }
        Ok(())
    }

    /// Transfer a settlement's principal out of custody.
    fn pay_out(env: &Env, depositor: &Address, settlement: &Settlement) -> Result<(), ContractError> {
        let custody = token::Client::new(env, &settlement.token);
        let this = env.current_contract_address();
        if settlement.refund > 0 {
            custody.transfer(&this, depositor, &settlement.refund);
        }
        if settlement.forfeited > 0 {
            let collector = storage::get_collector(env)?;
            custody.transfer(&this, &collector, &settlement.forfeited);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_config;



#[cfg(test)]
mod test_claim;
