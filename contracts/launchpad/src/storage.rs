use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, Val, Vec};

use crate::{
    errors::ContractError,
    types::{ClaimSchedule, ClaimState, DepositRecord, MiningPeriod, Pool},
};

// ── Storage key constants ────────────────────────────────────────────────────

pub(crate) const ADMIN: Symbol = symbol_short!("ADMIN");
pub(crate) const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const COLLECTOR: Symbol = symbol_short!("COLLECTOR");
const ROUND: Symbol = symbol_short!("ROUND");
const PERIOD: Symbol = symbol_short!("PERIOD");
const BONUS_SUPPLY: Symbol = symbol_short!("BONUS");
const TOTAL_ALLOCATION: Symbol = symbol_short!("TOT_ALLOC");
const POOL_TOKENS: Symbol = symbol_short!("POOLS");
const SCHEDULE: Symbol = symbol_short!("SCHEDULE");
pub(crate) const PAUSED: Symbol = symbol_short!("PAUSED");
pub(crate) const WRITE_LOCK: Symbol = symbol_short!("LOCK");

// Persistent storage uses tuple keys:  (prefix, ...identity)
const POOL: Symbol = symbol_short!("POOL");
const MULTIPLIER: Symbol = symbol_short!("MULT");
const DEPOSIT: Symbol = symbol_short!("DEPOSIT");
const DEPOSIT_OPTIONS: Symbol = symbol_short!("DEP_OPTS");
const CLAIM_STATE: Symbol = symbol_short!("CLAIM");

/// A week of 5-second ledgers. Entries are extended on write only.
const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

// ── TTL ──────────────────────────────────────────────────────────────────────

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl.saturating_sub(WEEK_OF_LEDGERS), max_ttl);
}

fn extend_ttl<K: IntoVal<Env, Val>>(env: &Env, key: &K) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl(key, max_ttl.saturating_sub(WEEK_OF_LEDGERS), max_ttl);
}

fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: soroban_sdk::TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

fn set_persistent<K, V>(env: &Env, key: &K, value: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn require_initialized(env: &Env) -> Result<(), ContractError> {
    if !is_initialized(env) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

pub fn set_initialized(env: &Env, reward_token: &Address, collector: &Address, round: u32) {
    env.storage().instance().set(&INITIALIZED, &true);
    env.storage().instance().set(&REWARD_TOKEN, reward_token);
    env.storage().instance().set(&COLLECTOR, collector);
    env.storage().instance().set(&ROUND, &round);
}

pub fn get_reward_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&REWARD_TOKEN)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_collector(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&COLLECTOR)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_round(env: &Env) -> u32 {
    env.storage().instance().get(&ROUND).unwrap_or(0)
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

// ── Pool registry ────────────────────────────────────────────────────────────

pub fn get_period(env: &Env) -> MiningPeriod {
    env.storage()
        .instance()
        .get(&PERIOD)
        .unwrap_or_else(MiningPeriod::unset)
}

pub fn set_period(env: &Env, period: &MiningPeriod) {
    env.storage().instance().set(&PERIOD, period);
}

pub fn get_bonus_supply(env: &Env) -> i128 {
    env.storage().instance().get(&BONUS_SUPPLY).unwrap_or(0)
}

pub fn set_bonus_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&BONUS_SUPPLY, &amount);
}

pub fn get_total_allocation(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_ALLOCATION).unwrap_or(0)
}

pub fn set_total_allocation(env: &Env, total: i128) {
    env.storage().instance().set(&TOTAL_ALLOCATION, &total);
}

pub fn get_pool_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&POOL_TOKENS)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_pool(env: &Env, token: &Address) -> Option<Pool> {
    get_persistent(env, &(POOL, token.clone()))
}

/// Stores the pool and registers its token the first time it is seen.
pub fn set_pool(env: &Env, pool: &Pool) {
    set_persistent(env, &(POOL, pool.token.clone()), pool);

    let mut tokens = get_pool_tokens(env);
    if !tokens.contains(&pool.token) {
        tokens.push_back(pool.token.clone());
        env.storage().instance().set(&POOL_TOKENS, &tokens);
    }
}

// ── Multiplier table ─────────────────────────────────────────────────────────

pub fn get_multiplier(env: &Env, refund_option: u32) -> Option<u32> {
    get_persistent(env, &(MULTIPLIER, refund_option))
}

pub fn set_multiplier(env: &Env, refund_option: u32, multiplier: u32) {
    set_persistent(env, &(MULTIPLIER, refund_option), &multiplier);
}

// ── Deposit ledger ───────────────────────────────────────────────────────────

pub fn get_deposit(
    env: &Env,
    depositor: &Address,
    token: &Address,
    refund_option: u32,
) -> Option<DepositRecord> {
    get_persistent(
        env,
        &(DEPOSIT, depositor.clone(), token.clone(), refund_option),
    )
}

pub fn set_deposit(
    env: &Env,
    depositor: &Address,
    token: &Address,
    refund_option: u32,
    record: &DepositRecord,
) {
    set_persistent(
        env,
        &(DEPOSIT, depositor.clone(), token.clone(), refund_option),
        record,
    );
}

pub fn remove_deposit(env: &Env, depositor: &Address, token: &Address, refund_option: u32) {
    env.storage().persistent().remove(&(
        DEPOSIT,
        depositor.clone(),
        token.clone(),
        refund_option,
    ));
}

/// Refund options the depositor holds an open bucket for, in first-use order.
pub fn get_deposit_options(env: &Env, depositor: &Address, token: &Address) -> Vec<u32> {
    get_persistent(env, &(DEPOSIT_OPTIONS, depositor.clone(), token.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_deposit_option(env: &Env, depositor: &Address, token: &Address, refund_option: u32) {
    let mut options = get_deposit_options(env, depositor, token);
    if options.contains(refund_option) {
        return;
    }
    options.push_back(refund_option);
    set_persistent(
        env,
        &(DEPOSIT_OPTIONS, depositor.clone(), token.clone()),
        &options,
    );
}

pub fn remove_deposit_options(env: &Env, depositor: &Address, token: &Address) {
    env.storage()
        .persistent()
        .remove(&(DEPOSIT_OPTIONS, depositor.clone(), token.clone()));
}

// ── Vesting ──────────────────────────────────────────────────────────────────

pub fn get_claim_schedule(env: &Env) -> ClaimSchedule {
    env.storage()
        .instance()
        .get(&SCHEDULE)
        .unwrap_or_else(ClaimSchedule::unset)
}

pub fn set_claim_schedule(env: &Env, schedule: &ClaimSchedule) {
    env.storage().instance().set(&SCHEDULE, schedule);
}

pub fn get_claim_state(env: &Env, depositor: &Address) -> ClaimState {
    get_persistent(env, &(CLAIM_STATE, depositor.clone())).unwrap_or_else(ClaimState::empty)
}

pub fn set_claim_state(env: &Env, depositor: &Address, state: &ClaimState) {
    set_persistent(env, &(CLAIM_STATE, depositor.clone()), state);
}
