use soroban_sdk::{contracterror, contracttype, log, Address, Env};

// ── Error codes ──────────────────────────────────────────────────────────────

/// Every rejected operation returns one of these codes and leaves no state
/// behind. The bound values that caused the rejection are emitted as
/// diagnostics by the reporting helpers below.
///
/// # Code ranges
/// | Range   | Purpose                   |
/// |---------|---------------------------|
/// | 1 – 9   | Lifecycle / authorization |
/// | 10 – 19 | Temporal                  |
/// | 20 – 29 | Bounds                    |
/// | 30 – 39 | State consistency         |
/// | 40 – 49 | Pause / guard             |
/// | 50+     | Arithmetic                |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidPeriod = 10,
    OverTheDeadline = 11,
    NotYetStarted = 12,
    OutOfRange = 20,
    BelowStandard = 21,
    OverTheLimit = 22,
    InvalidPool = 30,
    InvalidDepositedPool = 31,
    ClaimUnauthorized = 32,
    MultiplierNotSet = 33,
    EnforcedPause = 40,
    ExpectedPause = 41,
    ReentrantCall = 42,
    ArithmeticOverflow = 50,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Caller identity or initialization state is wrong.
    Authorization = 1,
    /// The operation is attempted at the wrong height.
    Temporal = 2,
    /// A value falls outside its declared interval or capacity.
    Bounds = 3,
    /// Referenced records are missing or already consumed.
    State = 4,
    /// Pause or re-entry misuse.
    Lifecycle = 5,
    Arithmetic = 6,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::InvalidPeriod
            | ContractError::OverTheDeadline
            | ContractError::NotYetStarted => ErrorCategory::Temporal,
            ContractError::OutOfRange
            | ContractError::BelowStandard
            | ContractError::OverTheLimit => ErrorCategory::Bounds,
            ContractError::InvalidPool
            | ContractError::InvalidDepositedPool
            | ContractError::ClaimUnauthorized
            | ContractError::MultiplierNotSet => ErrorCategory::State,
            ContractError::EnforcedPause
            | ContractError::ExpectedPause
            | ContractError::ReentrantCall => ErrorCategory::Lifecycle,
            ContractError::ArithmeticOverflow => ErrorCategory::Arithmetic,
        }
    }
}

// ── Reporting helpers ────────────────────────────────────────────────────────
//
// Each helper logs the bounds of the violated rule and hands back the code,
// so call sites read `return Err(errors::out_of_range(env, 0, 100, got))`.

pub fn invalid_period(env: &Env, start: u32, end: u32) -> ContractError {
    log!(env, "InvalidPeriod", start, end);
    ContractError::InvalidPeriod
}

/// `deadline` is the last height at which the configuration was mutable.
pub fn over_the_deadline(env: &Env, deadline: u32) -> ContractError {
    log!(env, "OverTheDeadline", deadline);
    ContractError::OverTheDeadline
}

/// `height` is the first height at which the operation becomes valid.
pub fn not_yet_started(env: &Env, height: u32) -> ContractError {
    log!(env, "NotYetStarted", height);
    ContractError::NotYetStarted
}

pub fn out_of_range(env: &Env, min: u32, max: u32, got: u32) -> ContractError {
    log!(env, "OutOfRange", min, max, got);
    ContractError::OutOfRange
}

/// `standard` is the smallest acceptable value.
pub fn below_standard(env: &Env, standard: i128, got: i128) -> ContractError {
    log!(env, "BelowStandard", standard, got);
    ContractError::BelowStandard
}

/// `limit` is the largest acceptable value.
pub fn over_the_limit(env: &Env, limit: i128, got: i128) -> ContractError {
    log!(env, "OverTheLimit", limit, got);
    ContractError::OverTheLimit
}

pub fn invalid_pool(env: &Env, token: &Address) -> ContractError {
    log!(env, "InvalidPool", token.clone());
    ContractError::InvalidPool
}

pub fn invalid_deposited_pool(env: &Env, depositor: &Address, token: &Address) -> ContractError {
    log!(env, "InvalidDepositedPool", depositor.clone(), token.clone());
    ContractError::InvalidDepositedPool
}

pub fn claim_unauthorized(env: &Env, depositor: &Address) -> ContractError {
    log!(env, "ClaimUnauthorized", depositor.clone());
    ContractError::ClaimUnauthorized
}

pub fn multiplier_not_set(env: &Env, refund_option: u32) -> ContractError {
    log!(env, "MultiplierNotSet", refund_option);
    ContractError::MultiplierNotSet
}
