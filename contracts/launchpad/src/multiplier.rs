use soroban_sdk::{Env, Vec};

use crate::{admin::AdminCap, errors, errors::ContractError, storage, types::MultiplierEntry};

pub const MIN_REFUND_OPTION: u32 = 0;
pub const MAX_REFUND_OPTION: u32 = 100;

pub fn validate_option(env: &Env, refund_option: u32) -> Result<(), ContractError> {
    if refund_option > MAX_REFUND_OPTION {
        return Err(errors::out_of_range(
            env,
            MIN_REFUND_OPTION,
            MAX_REFUND_OPTION,
            refund_option,
        ));
    }
    Ok(())
}

/// Multiplier registered for `refund_option`, or `MultiplierNotSet`.
pub fn require(env: &Env, refund_option: u32) -> Result<u32, ContractError> {
    storage::get_multiplier(env, refund_option)
        .ok_or_else(|| errors::multiplier_not_set(env, refund_option))
}

pub fn set(env: &Env, _cap: &AdminCap, entry: &MultiplierEntry) -> Result<(), ContractError> {
    validate_option(env, entry.refund_option)?;
    storage::set_multiplier(env, entry.refund_option, entry.multiplier);
    Ok(())
}

/// Validates the whole batch before writing any entry.
pub fn set_batch(
    env: &Env,
    cap: &AdminCap,
    entries: &Vec<MultiplierEntry>,
) -> Result<(), ContractError> {
    for entry in entries.iter() {
        validate_option(env, entry.refund_option)?;
    }
    for entry in entries.iter() {
        set(env, cap, &entry)?;
    }
    Ok(())
}
