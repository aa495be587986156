use soroban_sdk::{Address, Env};

use crate::{
    errors::ContractError,
    storage::{self, ADMIN, PENDING_ADMIN},
};

/// Proof that the current invocation was authorized by the owner.
///
/// Only [`authorize`] and [`bootstrap`] can build one, so every configuration
/// function that takes `&AdminCap` is owner-gated by its signature.
pub struct AdminCap {
    _private: (),
}

/// Record `admin` as the owner during `initialize`.
pub fn bootstrap(env: &Env, admin: &Address) -> AdminCap {
    admin.require_auth();
    env.storage().instance().set(&ADMIN, admin);
    AdminCap { _private: () }
}

/// Require `caller` to be the stored owner and to have signed this invocation.
pub fn authorize(env: &Env, caller: &Address) -> Result<AdminCap, ContractError> {
    caller.require_auth();
    let admin = storage::get_admin(env)?;
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(AdminCap { _private: () })
}

// ── Two-step ownership transfer ──────────────────────────────────────────────

pub fn propose(env: &Env, _cap: &AdminCap, new_admin: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, new_admin);
}

/// Complete a pending transfer. Returns the previous owner.
pub fn accept(env: &Env, new_admin: &Address) -> Result<Address, ContractError> {
    new_admin.require_auth();

    let pending = storage::get_pending_admin(env).ok_or(ContractError::Unauthorized)?;
    if *new_admin != pending {
        return Err(ContractError::Unauthorized);
    }

    let old_admin = storage::get_admin(env)?;
    env.storage().instance().set(&ADMIN, new_admin);
    env.storage().instance().remove(&PENDING_ADMIN);
    Ok(old_admin)
}

/// Drop a pending transfer. Returns the address that was proposed.
pub fn cancel(env: &Env, _cap: &AdminCap) -> Result<Address, ContractError> {
    let pending = storage::get_pending_admin(env).ok_or(ContractError::Unauthorized)?;
    env.storage().instance().remove(&PENDING_ADMIN);
    Ok(pending)
}
