use soroban_sdk::Env;

use crate::{
    admin::AdminCap,
    errors::ContractError,
    storage::{PAUSED, WRITE_LOCK},
};

// ── Pause ────────────────────────────────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::EnforcedPause);
    }
    Ok(())
}

pub fn require_paused(env: &Env) -> Result<(), ContractError> {
    if !is_paused(env) {
        return Err(ContractError::ExpectedPause);
    }
    Ok(())
}

pub fn pause(env: &Env, _cap: &AdminCap) -> Result<(), ContractError> {
    require_not_paused(env)?;
    env.storage().instance().set(&PAUSED, &true);
    Ok(())
}

pub fn unpause(env: &Env, _cap: &AdminCap) -> Result<(), ContractError> {
    require_paused(env)?;
    env.storage().instance().set(&PAUSED, &false);
    Ok(())
}

// ── Single-writer guard ──────────────────────────────────────────────────────

/// Held for the whole of a mutating entry point, token transfers included.
///
/// Helpers that write accrual or ledger state take `&WriteGuard`, so they can
/// only run inside an entry point that owns the lock. A second acquisition
/// while the lock is held fails with `ReentrantCall`.
pub struct WriteGuard<'a> {
    env: &'a Env,
}

impl<'a> WriteGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, ContractError> {
        if env.storage().instance().has(&WRITE_LOCK) {
            return Err(ContractError::ReentrantCall);
        }
        env.storage().instance().set(&WRITE_LOCK, &true);
        Ok(WriteGuard { env })
    }
}

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&WRITE_LOCK);
    }
}
